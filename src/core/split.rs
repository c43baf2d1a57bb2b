//! Pure bill-split arithmetic.
//!
//! No function here touches store state. The presentation layer uses
//! [`friend_share`] and [`user_share_update`] while the split form is being
//! filled in, then [`compute_split`] to turn the final form into the signed
//! balance delta that [`split_bill`](crate::store::BalanceStore::split_bill)
//! applies.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// Who covered the bill at the table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Payer {
    /// The store owner paid; the friend owes their share.
    User,
    /// The friend paid; the owner owes their own share.
    Friend,
}

/// Compute the signed balance delta for a split bill.
///
/// `paid_by_user` must lie within `[0, bill]`; out-of-range or non-finite
/// inputs are rejected rather than clamped. The friend's share is
/// `bill - paid_by_user`. When the user paid, that share is what the friend
/// now owes (positive delta). When the friend paid, the user's own share is
/// owed back, so the delta is `-paid_by_user`.
///
/// The friend-pays sign is easy to get backwards: the friend covered the
/// whole bill, but only the user's share of it becomes debt.
///
/// # Example
///
/// ```rust
/// use tally::core::{compute_split, Payer};
///
/// assert_eq!(compute_split(100.0, 40.0, Payer::User).unwrap(), 60.0);
/// assert_eq!(compute_split(100.0, 40.0, Payer::Friend).unwrap(), -40.0);
/// assert_eq!(compute_split(0.0, 0.0, Payer::User).unwrap(), 0.0);
/// ```
pub fn compute_split(bill: f64, paid_by_user: f64, payer: Payer) -> Result<f64, StoreError> {
    if !bill.is_finite() || bill < 0.0 {
        return Err(StoreError::InvalidAmount {
            field: "bill",
            value: bill,
        });
    }
    if !paid_by_user.is_finite() || paid_by_user < 0.0 {
        return Err(StoreError::InvalidAmount {
            field: "paid_by_user",
            value: paid_by_user,
        });
    }
    if paid_by_user > bill {
        return Err(StoreError::ShareExceedsBill {
            share: paid_by_user,
            bill,
        });
    }
    Ok(match payer {
        Payer::User => bill - paid_by_user,
        Payer::Friend => -paid_by_user,
    })
}

/// The friend's share of a bill, as displayed read-only in the split form.
pub fn friend_share(bill: f64, paid_by_user: f64) -> f64 {
    bill - paid_by_user
}

/// Input policy for the user's-share field.
///
/// A proposed share above the bill, or a non-finite one, is rejected and
/// the previous value kept; anything else replaces it. [`compute_split`]
/// still validates its own inputs.
///
/// # Example
///
/// ```rust
/// use tally::core::user_share_update;
///
/// assert_eq!(user_share_update(100.0, 40.0, 70.0), 70.0);
/// assert_eq!(user_share_update(100.0, 40.0, 120.0), 40.0);
/// ```
pub fn user_share_update(bill: f64, current: f64, proposed: f64) -> f64 {
    if !proposed.is_finite() || proposed > bill {
        current
    } else {
        proposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_pays_yields_friend_share() {
        assert_eq!(compute_split(100.0, 40.0, Payer::User).unwrap(), 60.0);
    }

    #[test]
    fn friend_pays_yields_negated_user_share() {
        assert_eq!(compute_split(100.0, 40.0, Payer::Friend).unwrap(), -40.0);
    }

    #[test]
    fn zero_bill_splits_to_zero() {
        assert_eq!(compute_split(0.0, 0.0, Payer::User).unwrap(), 0.0);
        assert_eq!(compute_split(0.0, 0.0, Payer::Friend).unwrap(), -0.0);
    }

    #[test]
    fn negative_bill_is_rejected() {
        let result = compute_split(-1.0, 0.0, Payer::User);
        assert!(matches!(
            result,
            Err(StoreError::InvalidAmount { field: "bill", .. })
        ));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(compute_split(f64::NAN, 0.0, Payer::User).is_err());
        assert!(compute_split(100.0, f64::INFINITY, Payer::User).is_err());
    }

    #[test]
    fn share_above_bill_is_rejected() {
        let result = compute_split(50.0, 60.0, Payer::User);
        assert_eq!(
            result,
            Err(StoreError::ShareExceedsBill {
                share: 60.0,
                bill: 50.0
            })
        );
    }

    #[test]
    fn negative_share_is_rejected() {
        let result = compute_split(50.0, -10.0, Payer::User);
        assert!(matches!(
            result,
            Err(StoreError::InvalidAmount {
                field: "paid_by_user",
                ..
            })
        ));
    }

    #[test]
    fn friend_share_is_remainder() {
        assert_eq!(friend_share(50.0, 20.0), 30.0);
        assert_eq!(friend_share(100.0, 100.0), 0.0);
    }

    #[test]
    fn share_update_keeps_current_when_proposal_exceeds_bill() {
        assert_eq!(user_share_update(100.0, 40.0, 120.0), 40.0);
    }

    #[test]
    fn share_update_keeps_current_on_non_finite_proposal() {
        assert_eq!(user_share_update(100.0, 40.0, f64::NAN), 40.0);
    }

    #[test]
    fn share_update_accepts_in_range_proposal() {
        assert_eq!(user_share_update(100.0, 40.0, 0.0), 0.0);
        assert_eq!(user_share_update(100.0, 40.0, 100.0), 100.0);
    }
}
