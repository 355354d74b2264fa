//! Counterparty balances
//!
//! A counterparty is a friend or a group the user splits expenses with. Each
//! carries one signed balance:
//!
//! - negative: the counterparty owes the user
//! - positive: the user owes the counterparty
//! - zero: settled

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CounterpartyId;
use super::money::Money;

/// Whether a counterparty is a single friend or a shared group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CounterpartyKind {
    #[default]
    Friend,
    Group,
}

impl fmt::Display for CounterpartyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Friend => write!(f, "friend"),
            Self::Group => write!(f, "group"),
        }
    }
}

/// Direction of a single balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStanding {
    OwesUser,
    UserOwes,
    Settled,
}

impl BalanceStanding {
    /// Short label used next to a balance in lists
    pub fn label(&self) -> &'static str {
        match self {
            Self::OwesUser => "owes you",
            Self::UserOwes => "you owe",
            Self::Settled => "settled",
        }
    }
}

/// The balance held with one friend or group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterpartyBalance {
    #[serde(default)]
    pub id: CounterpartyId,

    /// Display name
    pub name: String,

    /// Signed balance (see module docs for the sign convention)
    pub amount: Money,

    #[serde(default)]
    pub kind: CounterpartyKind,

    /// Free-text note about the latest activity ("Owes you for dinner")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<String>,
}

impl CounterpartyBalance {
    /// Create a friend balance
    pub fn friend(name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: CounterpartyId::new(),
            name: name.into(),
            amount,
            kind: CounterpartyKind::Friend,
            last_activity: None,
        }
    }

    /// Create a group balance
    pub fn group(name: impl Into<String>, amount: Money) -> Self {
        Self {
            kind: CounterpartyKind::Group,
            ..Self::friend(name, amount)
        }
    }

    /// Attach a last-activity note
    pub fn with_activity(mut self, note: impl Into<String>) -> Self {
        self.last_activity = Some(note.into());
        self
    }

    pub fn standing(&self) -> BalanceStanding {
        if self.amount.is_negative() {
            BalanceStanding::OwesUser
        } else if self.amount.is_positive() {
            BalanceStanding::UserOwes
        } else {
            BalanceStanding::Settled
        }
    }

    pub fn is_settled(&self) -> bool {
        self.amount.is_zero()
    }

    /// Validate the record; amounts are intentionally unchecked
    pub fn validate(&self) -> Result<(), CounterpartyValidationError> {
        if self.name.trim().is_empty() {
            return Err(CounterpartyValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CounterpartyValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for CounterpartyBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for counterparty balances
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterpartyValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CounterpartyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Counterparty name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Counterparty name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CounterpartyValidationError {}
