use crate::domain::a001_account::AccountId;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of a recurring schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleId(pub Uuid);

impl ScheduleId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ScheduleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ScheduleId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Amount definition
// ============================================================================

/// Operator tag of a schedule amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountOp {
    Is,
    IsApprox,
    IsBetween,
}

impl AmountOp {
    pub fn code(&self) -> &'static str {
        match self {
            AmountOp::Is => "is",
            AmountOp::IsApprox => "isapprox",
            AmountOp::IsBetween => "isbetween",
        }
    }
}

/// Amount a schedule is expected to post, in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum ScheduleAmount {
    Is { amount: i64 },
    IsApprox { amount: i64 },
    IsBetween { num1: i64, num2: i64 },
}

impl ScheduleAmount {
    pub fn op(&self) -> AmountOp {
        match self {
            ScheduleAmount::Is { .. } => AmountOp::Is,
            ScheduleAmount::IsApprox { .. } => AmountOp::IsApprox,
            ScheduleAmount::IsBetween { .. } => AmountOp::IsBetween,
        }
    }

    /// True for range amounts; totals including one are only an estimate.
    pub fn is_range(&self) -> bool {
        matches!(self, ScheduleAmount::IsBetween { .. })
    }

    /// Single representative amount.
    ///
    /// Ranges resolve to the mean of their bounds, halves rounded toward
    /// positive infinity. The mean of two `i64` always fits in an `i64`.
    pub fn scheduled_amount(&self) -> i64 {
        match *self {
            ScheduleAmount::Is { amount } | ScheduleAmount::IsApprox { amount } => amount,
            ScheduleAmount::IsBetween { num1, num2 } => {
                let sum = i128::from(num1) + i128::from(num2);
                (sum.div_euclid(2) + sum.rem_euclid(2)) as i64
            }
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Recurring schedule as exposed by the schedules cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    /// Account the scheduled transaction posts to
    #[serde(default)]
    pub account: Option<AccountId>,
    pub amount: ScheduleAmount,
}

impl Schedule {
    pub fn new(id: ScheduleId, account: Option<AccountId>, amount: ScheduleAmount) -> Self {
        Self {
            id,
            account,
            amount,
        }
    }

    /// Signed contribution of one occurrence to a balance of `viewed`.
    ///
    /// Occurrences posting to another account are the opposite leg of a
    /// transfer and count negatively. Without a viewed account every
    /// occurrence counts as is.
    pub fn contribution_to(&self, viewed: Option<&AccountId>) -> i64 {
        let amount = self.amount.scheduled_amount();
        match viewed {
            None => amount,
            Some(account) if self.account.as_ref() == Some(account) => amount,
            Some(_) => amount.saturating_neg(),
        }
    }
}
