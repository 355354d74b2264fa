//! Balance aggregation
//!
//! Folds per-counterparty signed balances into the three totals shown in the
//! friends overview: what others owe the user, what the user owes, and the
//! net of the two.

use serde::{Deserialize, Serialize};

use crate::models::{CounterpartyBalance, Money};

/// Totals across a set of counterparty balances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BalanceTotals {
    /// Sum of |amount| over negative balances
    pub owed_to_user: Money,
    /// Sum of amount over positive balances
    pub owed_by_user: Money,
    /// `owed_to_user - owed_by_user`
    pub net: Money,
}

/// Aggregate balances into owed-to-user, owed-by-user and net totals
///
/// Settled (zero) entries contribute to neither side and an empty slice
/// yields all zeros. The function is total: every input is accepted, and
/// totals beyond the `i64` cent range saturate.
pub fn aggregate(balances: &[CounterpartyBalance]) -> BalanceTotals {
    let mut owed_to_user = Money::zero();
    let mut owed_by_user = Money::zero();

    for balance in balances {
        if balance.amount.is_negative() {
            owed_to_user += balance.amount.abs();
        } else if balance.amount.is_positive() {
            owed_by_user += balance.amount;
        }
    }

    tracing::trace!(
        entries = balances.len(),
        owed_to_user = owed_to_user.cents(),
        owed_by_user = owed_by_user.cents(),
        "aggregated balances"
    );

    BalanceTotals {
        owed_to_user,
        owed_by_user,
        net: owed_to_user - owed_by_user,
    }
}
