//! Core data models for SocialFin
//!
//! Immutable value records that feed the computations in `services`:
//! counterparty balances, budget categories and trend points.

pub mod category;
pub mod counterparty;
pub mod ids;
pub mod money;
pub mod period;

pub use category::{BudgetCategory, CategoryValidationError};
pub use counterparty::{
    BalanceStanding, CounterpartyBalance, CounterpartyKind, CounterpartyValidationError,
};
pub use ids::CounterpartyId;
pub use money::{Money, MoneyParseError};
pub use period::PeriodPoint;
