use serde::{Deserialize, Serialize};

/// A displayed total in minor currency units.
///
/// `is_exact` is false when the total includes an averaged amount of a range
/// schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceValue {
    pub amount: i64,
    pub is_exact: bool,
}

impl BalanceValue {
    pub fn exact(amount: i64) -> Self {
        Self {
            amount,
            is_exact: true,
        }
    }

    pub fn approximate(amount: i64) -> Self {
        Self {
            amount,
            is_exact: false,
        }
    }
}
