//! Tally: an in-memory store for shared-expense balances between friends.
//!
//! Tally keeps a "pure core, imperative shell" split: the domain types and
//! the bill arithmetic in [`core`] are pure values and functions, while the
//! owning [`store::BalanceStore`] is the single mutable shell the
//! presentation layer talks to. All calls are synchronous; the surrounding
//! event loop serializes them.
//!
//! # Core Concepts
//!
//! - **Balance**: signed amount between the owner and a friend; positive
//!   means the friend owes the owner
//! - **Selection**: the one friend currently targeted for a bill split,
//!   or none; selecting the same friend twice toggles it off
//! - **Split**: a signed delta computed by [`core::compute_split`] and
//!   applied to the selected friend's balance
//!
//! # Example
//!
//! ```rust
//! use tally::core::{compute_split, Payer};
//! use tally::id::SequenceSource;
//! use tally::store::BalanceStore;
//!
//! let mut store = BalanceStore::new(Box::new(SequenceSource::default()));
//!
//! let sarah = store.add_friend("Sarah", "https://i.pravatar.cc/48").unwrap();
//! store.select_friend(sarah.id()).unwrap();
//!
//! // Dinner came to 50, the user covered 20 of it and paid the bill.
//! let delta = compute_split(50.0, 20.0, Payer::User).unwrap();
//! store.split_bill(delta).unwrap();
//!
//! assert_eq!(store.friend(sarah.id()).unwrap().balance(), 30.0);
//! ```

pub mod core;
pub mod error;
pub mod id;
pub mod store;

// Re-export commonly used types
pub use crate::core::{compute_split, Friend, FriendId, Payer, Selection, Standing};
pub use crate::error::{ErrorKind, StoreError};
pub use crate::store::BalanceStore;
