//! Deterministic Ids
//!
//! This example demonstrates injecting an id source into the store.
//!
//! Key concepts:
//! - Id generation is a capability, not an ambient global
//! - SequenceSource makes sessions reproducible for tests
//! - Rejected submissions never consume an id
//!
//! Run with: cargo run --example deterministic_ids

use tally::id::{IdSource, SequenceSource, UuidSource};
use tally::store::BalanceStore;

fn main() {
    println!("=== Deterministic Ids Example ===\n");

    println!("Sequential source:");
    let mut store = BalanceStore::new(Box::new(SequenceSource::default()));

    let denise = store.add_friend("Denise", "https://i.pravatar.cc/48").unwrap();
    println!("  Denise got id {}", denise.id());
    println!("  Image derived from the id: {}", denise.image());

    // An invalid submission is rejected before an id is drawn.
    assert!(store.add_friend("", "https://i.pravatar.cc/48").is_err());
    let marco = store.add_friend("Marco", "https://i.pravatar.cc/48").unwrap();
    println!("  Marco got id {} (the rejected add burned none)\n", marco.id());

    println!("UUID source (production):");
    let mut ids = UuidSource;
    println!("  Fresh id: {}", ids.next_id());
    println!("  Fresh id: {}", ids.next_id());

    println!("\nKey Takeaways:");
    println!("- The store never decides how ids look, the source does");
    println!("- Deterministic sources make assertions on ids possible");
    println!("- Validation happens before the id draw");

    println!("\n=== Example Complete ===");
}
