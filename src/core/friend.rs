//! Friend entities and their balance semantics.
//!
//! A [`Friend`] is only constructed through validating constructors, so a
//! value that exists is a value that passed the field checks. Balances are
//! signed: positive means the friend owes the owner, negative means the
//! owner owes the friend.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique identifier for a friend.
///
/// Ids are produced by an [`IdSource`](crate::id::IdSource) or by seeding;
/// the store never parses or orders them.
///
/// # Example
///
/// ```rust
/// use tally::core::FriendId;
///
/// let id = FriendId::new("933372");
/// assert_eq!(id.as_str(), "933372");
/// assert_eq!(id.to_string(), "933372");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct FriendId(String);

impl FriendId {
    /// Wrap a raw identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sign classification of a balance.
///
/// This is the branching the list view does on every row, kept here so
/// callers never re-derive the sign convention.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Standing {
    /// Positive balance: the friend owes the owner.
    OwesUser,
    /// Negative balance: the owner owes the friend.
    UserOwes,
    /// Zero balance.
    Settled,
}

/// A friend with a running shared-expense balance.
///
/// Fields are validated at construction: `name` and `image` must be
/// non-empty, the balance must be finite. Mutation happens only through the
/// store's split operation.
///
/// # Example
///
/// ```rust
/// use tally::core::{Friend, FriendId, Standing};
///
/// let friend = Friend::new(
///     FriendId::new("42"),
///     "Sarah",
///     "https://i.pravatar.cc/48?u=42",
/// )
/// .unwrap();
///
/// assert_eq!(friend.name(), "Sarah");
/// assert_eq!(friend.balance(), 0.0);
/// assert_eq!(friend.standing(), Standing::Settled);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Friend {
    id: FriendId,
    name: String,
    image: String,
    balance: f64,
}

impl Friend {
    /// Construct a friend with a zero balance.
    ///
    /// Fails with a validation error when `name` or `image` is empty.
    pub fn new(
        id: FriendId,
        name: impl Into<String>,
        image: impl Into<String>,
    ) -> Result<Self, StoreError> {
        Self::with_balance(id, name, image, 0.0)
    }

    /// Construct a friend with an explicit starting balance.
    ///
    /// Used for seeding; fails with a validation error when `name` or
    /// `image` is empty or `balance` is not finite.
    pub fn with_balance(
        id: FriendId,
        name: impl Into<String>,
        image: impl Into<String>,
        balance: f64,
    ) -> Result<Self, StoreError> {
        let name = name.into();
        let image = image.into();
        if name.is_empty() {
            return Err(StoreError::MissingField { field: "name" });
        }
        if image.is_empty() {
            return Err(StoreError::MissingField { field: "image" });
        }
        if !balance.is_finite() {
            return Err(StoreError::InvalidAmount {
                field: "balance",
                value: balance,
            });
        }
        Ok(Self {
            id,
            name,
            image,
            balance,
        })
    }

    /// The friend's identifier.
    pub fn id(&self) -> &FriendId {
        &self.id
    }

    /// The friend's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored image reference.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// The current signed balance.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Classify the balance sign.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{Friend, FriendId, Standing};
    ///
    /// let clark = Friend::with_balance(
    ///     FriendId::new("118836"),
    ///     "Clark",
    ///     "https://i.pravatar.cc/48?u=118836",
    ///     -7.0,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(clark.standing(), Standing::UserOwes);
    /// ```
    pub fn standing(&self) -> Standing {
        if self.balance > 0.0 {
            Standing::OwesUser
        } else if self.balance < 0.0 {
            Standing::UserOwes
        } else {
            Standing::Settled
        }
    }

    /// Apply a signed delta to the balance. Only the store calls this.
    pub(crate) fn apply(&mut self, delta: f64) {
        self.balance += delta;
    }
}
