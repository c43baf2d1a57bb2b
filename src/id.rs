//! Friend id generation.
//!
//! Id generation is an injected capability rather than an ambient global,
//! so tests and demos can substitute a deterministic source.

use crate::core::FriendId;
use uuid::Uuid;

/// Source of fresh friend identifiers.
///
/// Every id handed out must be globally unique for the lifetime of the
/// source.
pub trait IdSource {
    /// Produce the next fresh identifier.
    fn next_id(&mut self) -> FriendId;
}

/// Random ids backed by UUID v4. The production source.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&mut self) -> FriendId {
        FriendId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic sequential ids, for tests and demos.
///
/// # Example
///
/// ```rust
/// use tally::id::{IdSource, SequenceSource};
///
/// let mut ids = SequenceSource::default();
/// assert_eq!(ids.next_id().as_str(), "friend-1");
/// assert_eq!(ids.next_id().as_str(), "friend-2");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SequenceSource {
    issued: u64,
}

impl IdSource for SequenceSource {
    fn next_id(&mut self) -> FriendId {
        self.issued += 1;
        FriendId::new(format!("friend-{}", self.issued))
    }
}
