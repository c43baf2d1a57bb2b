//! Activity log for store mutations.
//!
//! The log is an ordered, timestamped record of what the user did in a
//! session. Recording is pure: [`ActivityLog::record`] returns a new log
//! and leaves the receiver untouched, the store assigns the result.

use crate::core::{FriendId, Selection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-level store mutation.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum ActivityEvent {
    /// A friend was added to the list.
    FriendAdded { id: FriendId, name: String },
    /// A friend was selected as the split target.
    Selected { id: FriendId },
    /// The selection was toggled off.
    SelectionCleared,
    /// A bill was split with a friend, moving their balance by `amount`.
    BillSplit { id: FriendId, amount: f64 },
}

impl ActivityEvent {
    /// The resulting selection event for a toggle, derived from the new
    /// selection state.
    pub(crate) fn from_selection(selection: &Selection) -> Self {
        match selection.selected_id() {
            Some(id) => Self::Selected { id: id.clone() },
            None => Self::SelectionCleared,
        }
    }
}

/// A single log entry: the event plus when it happened.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub event: ActivityEvent,
    pub timestamp: DateTime<Utc>,
}

impl ActivityEntry {
    /// Stamp an event with the current time.
    pub fn now(event: ActivityEvent) -> Self {
        Self {
            event,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of store mutations.
///
/// # Example
///
/// ```rust
/// use tally::core::FriendId;
/// use tally::store::{ActivityEntry, ActivityEvent, ActivityLog};
///
/// let log = ActivityLog::new();
/// let log = log.record(ActivityEntry::now(ActivityEvent::Selected {
///     id: FriendId::new("933372"),
/// }));
///
/// assert_eq!(log.entries().len(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new log.
    pub fn record(&self, entry: ActivityEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// All entries in recording order.
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
