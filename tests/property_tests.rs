//! Property-based tests for the balance store.
//!
//! These tests use proptest to verify the store's invariants hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use tally::core::{compute_split, user_share_update, Friend, FriendId, Payer, Selection};
use tally::id::SequenceSource;
use tally::store::BalanceStore;

const TEMPLATE: &str = "https://i.pravatar.cc/48";

/// Ids of the three seed friends, in insertion order.
const SEED_IDS: [&str; 3] = ["118836", "933372", "499476"];

fn seeded_store() -> BalanceStore {
    BalanceStore::seeded(Box::new(SequenceSource::default()))
}

prop_compose! {
    fn arb_name()(name in "[A-Za-z]{1,12}") -> String {
        name
    }
}

prop_compose! {
    fn arb_amount()(amount in -500.0..500.0f64) -> f64 {
        amount
    }
}

fn arb_bill_and_share() -> impl Strategy<Value = (f64, f64)> {
    (0.0..1000.0f64).prop_flat_map(|bill| (Just(bill), 0.0..=bill))
}

proptest! {
    #[test]
    fn add_friend_appends_one_settled_friend_with_a_fresh_id(
        names in prop::collection::vec(arb_name(), 1..8)
    ) {
        let mut store = seeded_store();

        for name in &names {
            let before = store.friends().len();
            let friend = store.add_friend(name, TEMPLATE).unwrap();

            prop_assert_eq!(store.friends().len(), before + 1);
            prop_assert_eq!(friend.balance(), 0.0);
            prop_assert_eq!(store.selection(), &Selection::None);
        }

        let mut ids: Vec<&str> = store.friends().iter().map(|f| f.id().as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    #[test]
    fn identical_adds_never_share_an_id(name in arb_name()) {
        let mut store = seeded_store();
        let first = store.add_friend(&name, TEMPLATE).unwrap();
        let second = store.add_friend(&name, TEMPLATE).unwrap();
        prop_assert_ne!(first.id(), second.id());
    }

    #[test]
    fn selecting_twice_is_a_toggle(index in 0..3usize) {
        let mut store = seeded_store();
        let id = FriendId::new(SEED_IDS[index]);

        let selected = store.select_friend(&id).unwrap();
        prop_assert_eq!(selected, Some(id.clone()));

        let selected = store.select_friend(&id).unwrap();
        prop_assert_eq!(selected, None);
        prop_assert_eq!(store.selection(), &Selection::None);
    }

    #[test]
    fn split_moves_only_the_selected_balance(
        index in 0..3usize,
        amount in arb_amount()
    ) {
        let mut store = seeded_store();
        let id = FriendId::new(SEED_IDS[index]);
        let before: Vec<f64> = store.friends().iter().map(|f| f.balance()).collect();

        store.select_friend(&id).unwrap();
        store.split_bill(amount).unwrap();

        for (i, friend) in store.friends().iter().enumerate() {
            if i == index {
                prop_assert_eq!(friend.balance(), before[i] + amount);
            } else {
                prop_assert_eq!(friend.balance(), before[i]);
            }
        }
        prop_assert_eq!(store.selection(), &Selection::None);
    }

    #[test]
    fn split_without_selection_changes_nothing(amount in arb_amount()) {
        let mut store = seeded_store();
        let before: Vec<f64> = store.friends().iter().map(|f| f.balance()).collect();

        prop_assert!(store.split_bill(amount).is_err());

        let after: Vec<f64> = store.friends().iter().map(|f| f.balance()).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn split_deltas_partition_the_bill((bill, share) in arb_bill_and_share()) {
        let user_pays = compute_split(bill, share, Payer::User).unwrap();
        let friend_pays = compute_split(bill, share, Payer::Friend).unwrap();

        // The two conventions differ by exactly the bill total.
        prop_assert!((user_pays - friend_pays - bill).abs() < 1e-9);
        prop_assert!(user_pays >= 0.0);
        prop_assert!(friend_pays <= 0.0);
    }

    #[test]
    fn share_update_never_exceeds_the_bill(
        (bill, current) in arb_bill_and_share(),
        proposed in -100.0..2000.0f64
    ) {
        let updated = user_share_update(bill, current, proposed);

        prop_assert!(updated <= bill);
        prop_assert!(updated == proposed || updated == current);
    }

    #[test]
    fn rejected_add_leaves_the_store_untouched(index in 0..3usize) {
        let mut store = seeded_store();
        let id = FriendId::new(SEED_IDS[index]);
        store.select_friend(&id).unwrap();

        prop_assert!(store.add_friend("", TEMPLATE).is_err());

        prop_assert_eq!(store.friends().len(), 3);
        prop_assert_eq!(store.selection(), &Selection::Selected(id));
    }

    #[test]
    fn friend_roundtrip_serialization(name in arb_name(), balance in arb_amount()) {
        let friend = Friend::with_balance(
            FriendId::new("roundtrip"),
            name,
            TEMPLATE,
            balance,
        )
        .unwrap();

        let json = serde_json::to_string(&friend).unwrap();
        let deserialized: Friend = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(friend, deserialized);
    }
}
