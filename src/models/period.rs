//! Period points for trend charts

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// One sample in a chronologically ordered series (e.g. a month's spending)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPoint {
    /// Period label such as "Jan"; labels need not be unique
    pub label: String,
    pub amount: Money,
}

impl PeriodPoint {
    pub fn new(label: impl Into<String>, amount: Money) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

impl fmt::Display for PeriodPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.amount)
    }
}
