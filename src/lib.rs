//! SocialFin - shared balances, budget progress and spending trends
//!
//! The library computes the numbers behind the SocialFin views: what friends
//! and groups owe the user, how spending compares to category limits, and
//! how period totals scale for a bar chart. A keyword-based assistant
//! answers short finance questions with canned replies.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: the crate error type
//! - `models`: money, counterparties, categories, period points
//! - `services`: aggregation, summaries, normalization, the assistant
//! - `storage`: dataset loading, CSV import, sample data
//! - `reports`: report structures and terminal rendering
//! - `export`: output formats
//! - `cli`: command handlers for the `socialfin` binary
//!
//! # Example
//!
//! ```rust
//! use socialfin::services::{aggregate, summarize};
//! use socialfin::storage::sample_dataset;
//!
//! let dataset = sample_dataset();
//! let totals = aggregate(&dataset.friends);
//! assert_eq!(totals.net.to_string(), "$775.50");
//!
//! let summary = summarize(&dataset.categories);
//! assert_eq!(summary.over_budget_count(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SocialFinError, SocialFinResult};
