//! Bill Splitting
//!
//! This example walks through a session against a seeded balance store.
//!
//! Key concepts:
//! - Seeded friend list with signed starting balances
//! - Selection toggling and the split precondition
//! - Both payer conventions of the split arithmetic
//! - Errors leave the store untouched and usable
//!
//! Run with: cargo run --example bill_splitting

use tally::core::{compute_split, friend_share, Payer, Standing};
use tally::id::UuidSource;
use tally::store::BalanceStore;
use tally::FriendId;

fn print_friends(store: &BalanceStore) {
    for friend in store.friends() {
        let line = match friend.standing() {
            Standing::OwesUser => {
                format!("{} owes you {}", friend.name(), friend.balance())
            }
            Standing::UserOwes => {
                format!("You owe {} {}", friend.name(), -friend.balance())
            }
            Standing::Settled => format!("You and {} are even", friend.name()),
        };
        println!("  {line}");
    }
}

fn main() {
    println!("=== Bill Splitting Example ===\n");

    let mut store = BalanceStore::seeded(Box::new(UuidSource));
    println!("Starting balances:");
    print_friends(&store);
    println!();

    // Scenario 1: dinner with Sarah, the user pays
    println!("Scenario 1: Dinner With Sarah (You Pay)");
    let sarah = FriendId::new("933372");
    store.select_friend(&sarah).unwrap();
    println!(
        "  Selected: {}",
        store.selected_friend().unwrap().name()
    );

    let bill = 50.0;
    let paid_by_user = 20.0;
    println!(
        "  Bill {bill}, your expense {paid_by_user}, Sarah's expense {}",
        friend_share(bill, paid_by_user)
    );

    let delta = compute_split(bill, paid_by_user, Payer::User).unwrap();
    store.split_bill(delta).unwrap();
    println!("  ✓ Split applied: delta {delta}\n");

    // Scenario 2: taxi with Clark, Clark pays
    println!("Scenario 2: Taxi With Clark (Clark Pays)");
    let clark = FriendId::new("118836");
    store.select_friend(&clark).unwrap();

    let delta = compute_split(18.0, 9.0, Payer::Friend).unwrap();
    store.split_bill(delta).unwrap();
    println!("  ✓ Split applied: delta {delta}\n");

    // Scenario 3: a split with nothing selected fails cleanly
    println!("Scenario 3: Split Without a Selection");
    match store.split_bill(10.0) {
        Ok(()) => unreachable!(),
        Err(err) => println!("  ✗ Rejected: {err}\n"),
    }

    println!("Final balances:");
    print_friends(&store);

    println!("\nKey Takeaways:");
    println!("- compute_split returns a signed delta; the store just applies it");
    println!("- When the friend pays, your own share becomes negative balance");
    println!("- Every split clears the selection");
    println!("- Failed operations change nothing");

    println!("\n=== Example Complete ===");
}
