//! Errors surfaced by store operations.

use crate::core::FriendId;
use thiserror::Error;

/// Broad classification of a [`StoreError`].
///
/// The presentation layer mostly cares about which of these it is looking
/// at, not the exact variant.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// A required field was missing or an amount was invalid.
    Validation,
    /// An operation referenced an id not present in the friend list.
    NotFound,
    /// An operation ran against the wrong store state.
    Precondition,
}

/// Errors returned by [`BalanceStore`](crate::store::BalanceStore)
/// operations and the split arithmetic.
///
/// None of these are fatal: the store state is unchanged after any failed
/// call and the store remains usable.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("{field} must not be empty")]
    MissingField { field: &'static str },

    #[error("{field} is not a usable amount: {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("expense share {share} exceeds the bill total {bill}")]
    ShareExceedsBill { share: f64, bill: f64 },

    #[error("no friend with id {0}")]
    UnknownFriend(FriendId),

    #[error("no friend selected for the split")]
    NothingSelected,
}

impl StoreError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. }
            | Self::InvalidAmount { .. }
            | Self::ShareExceedsBill { .. } => ErrorKind::Validation,
            Self::UnknownFriend(_) => ErrorKind::NotFound,
            Self::NothingSelected => ErrorKind::Precondition,
        }
    }
}
