//! The balance store: the imperative shell over the core types.
//!
//! [`BalanceStore`] owns the friend list, the current selection, and the
//! add-friend panel flag. The surrounding event loop calls its operations
//! one at a time and re-renders from the accessors; there is no internal
//! synchronization because there is no concurrent caller.

mod log;

pub use log::{ActivityEntry, ActivityEvent, ActivityLog};

use crate::core::{Friend, FriendId, Selection};
use crate::error::StoreError;
use crate::id::{IdSource, UuidSource};
use std::fmt;

/// The friend list every session starts from.
const INITIAL_FRIENDS: [(&str, &str, f64); 3] = [
    ("118836", "Clark", -7.0),
    ("933372", "Sarah", 20.0),
    ("499476", "Anthony", 0.0),
];

/// In-memory store of friends, balances, and the split-target selection.
///
/// The store is created at session start, owned by the session, and dropped
/// at session end. Every operation either succeeds and mutates, or fails
/// and leaves the state exactly as it was.
///
/// # Example
///
/// ```rust
/// use tally::core::{compute_split, Payer};
/// use tally::id::SequenceSource;
/// use tally::store::BalanceStore;
///
/// let mut store = BalanceStore::new(Box::new(SequenceSource::default()));
///
/// let sarah = store.add_friend("Sarah", "https://i.pravatar.cc/48").unwrap();
/// store.select_friend(sarah.id()).unwrap();
///
/// let delta = compute_split(50.0, 20.0, Payer::User).unwrap();
/// store.split_bill(delta).unwrap();
///
/// assert_eq!(store.friend(sarah.id()).unwrap().balance(), 30.0);
/// assert!(store.selection().selected_id().is_none());
/// ```
pub struct BalanceStore {
    friends: Vec<Friend>,
    selection: Selection,
    add_form_open: bool,
    ids: Box<dyn IdSource + Send>,
    log: ActivityLog,
}

impl Default for BalanceStore {
    fn default() -> Self {
        Self::new(Box::new(UuidSource))
    }
}

impl fmt::Debug for BalanceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BalanceStore")
            .field("friends", &self.friends)
            .field("selection", &self.selection)
            .field("add_form_open", &self.add_form_open)
            .finish_non_exhaustive()
    }
}

impl BalanceStore {
    /// Create an empty store drawing ids from `ids`.
    pub fn new(ids: Box<dyn IdSource + Send>) -> Self {
        Self {
            friends: Vec::new(),
            selection: Selection::None,
            add_form_open: false,
            ids,
            log: ActivityLog::new(),
        }
    }

    /// Create a store seeded with the fixed initial friends
    /// (Clark -7, Sarah 20, Anthony 0).
    ///
    /// Seed entries predate the session, so they do not appear in the
    /// activity log.
    pub fn seeded(ids: Box<dyn IdSource + Send>) -> Self {
        let mut store = Self::new(ids);
        for (id, name, balance) in INITIAL_FRIENDS {
            let image = format!("https://i.pravatar.cc/48?u={id}");
            let friend = Friend::with_balance(FriendId::new(id), name, image, balance)
                .expect("Seed entries should always validate");
            store.friends.push(friend);
        }
        store
    }

    /// Add a friend with a zero balance and return it.
    ///
    /// The stored image reference is derived by appending the fresh id to
    /// `image_template` as a `?u=` query. Clears the selection and closes
    /// the add-friend panel.
    ///
    /// Fails with a validation error when `name` or `image_template` is
    /// empty; field checks run before an id is drawn, so a rejected
    /// submission never consumes one.
    pub fn add_friend(
        &mut self,
        name: &str,
        image_template: &str,
    ) -> Result<Friend, StoreError> {
        if name.is_empty() {
            return Err(StoreError::MissingField { field: "name" });
        }
        if image_template.is_empty() {
            return Err(StoreError::MissingField { field: "image" });
        }

        let id = self.ids.next_id();
        let image = format!("{image_template}?u={id}");
        let friend = Friend::new(id, name, image)?;

        tracing::debug!("Added friend {} ({})", friend.name(), friend.id());
        self.friends.push(friend.clone());
        self.selection = Selection::None;
        self.add_form_open = false;
        self.log = self.log.record(ActivityEntry::now(ActivityEvent::FriendAdded {
            id: friend.id().clone(),
            name: friend.name().to_string(),
        }));
        Ok(friend)
    }

    /// Toggle the selection for `id` and return the new selected id.
    ///
    /// Selecting the currently selected friend clears the selection.
    /// Closes the add-friend panel either way. Fails with a not-found
    /// error when `id` is not in the list.
    pub fn select_friend(&mut self, id: &FriendId) -> Result<Option<FriendId>, StoreError> {
        if self.friend(id).is_none() {
            return Err(StoreError::UnknownFriend(id.clone()));
        }

        self.selection = self.selection.toggle(id.clone());
        self.add_form_open = false;
        tracing::debug!("Selection now {}", self.selection.name());
        self.log = self
            .log
            .record(ActivityEntry::now(ActivityEvent::from_selection(
                &self.selection,
            )));
        Ok(self.selection.selected_id().cloned())
    }

    /// Apply a signed split `amount` to the selected friend's balance.
    ///
    /// The caller computes the sign beforehand, normally via
    /// [`compute_split`](crate::core::compute_split). Clears the selection
    /// afterwards. Fails with a precondition error when nothing is
    /// selected, or a validation error when `amount` is not finite; either
    /// way no balance moves.
    pub fn split_bill(&mut self, amount: f64) -> Result<(), StoreError> {
        let id = self
            .selection
            .selected_id()
            .ok_or(StoreError::NothingSelected)?
            .clone();
        if !amount.is_finite() {
            return Err(StoreError::InvalidAmount {
                field: "amount",
                value: amount,
            });
        }
        let friend = self
            .friends
            .iter_mut()
            .find(|f| *f.id() == id)
            .ok_or_else(|| StoreError::UnknownFriend(id.clone()))?;

        friend.apply(amount);
        tracing::debug!("Split {} with {}, balance now {}", amount, id, friend.balance());
        self.selection = Selection::None;
        self.log = self.log.record(ActivityEntry::now(ActivityEvent::BillSplit {
            id,
            amount,
        }));
        Ok(())
    }

    /// Flip the add-friend panel open or closed; returns the new state.
    pub fn toggle_add_form(&mut self) -> bool {
        self.add_form_open = !self.add_form_open;
        self.add_form_open
    }

    /// All friends in insertion order.
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    /// Look up a friend by id.
    pub fn friend(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id() == id)
    }

    /// The current selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The currently selected friend, if any.
    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selection.selected_id().and_then(|id| self.friend(id))
    }

    /// Whether the add-friend panel is open.
    pub fn is_add_form_open(&self) -> bool {
        self.add_form_open
    }

    /// The session's activity log.
    pub fn activity(&self) -> &ActivityLog {
        &self.log
    }
}
