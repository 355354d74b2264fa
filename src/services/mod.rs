//! Computation layer for SocialFin
//!
//! Pure functions over in-memory collections. Nothing here performs I/O or
//! holds state, so every function may be called concurrently and returns the
//! same result for the same input.

pub mod assistant;
pub mod balance;
pub mod budget;
pub mod trend;

pub use assistant::{Assistant, Intent, IntentClassifier, KeywordClassifier, Reply, ResponseCatalog};
pub use balance::{aggregate, BalanceTotals};
pub use budget::{progress_fraction, summarize, BudgetSummary, CategoryStatus};
pub use trend::{normalize, TrendScale};
