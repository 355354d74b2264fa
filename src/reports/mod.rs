//! Reports module for SocialFin
//!
//! Reports are the presentation side of the computations: they pull the
//! collections out of a [`Dataset`](crate::storage::Dataset), call the
//! services, turn `DivisionUndefined`/`EmptyInput` into explicit "no value"
//! fields and render the result for the terminal or as CSV.

pub mod balances;
pub mod budget;
pub mod trend;

use std::io::Write;

use serde::Serialize;

use crate::config::Settings;
use crate::display::MoneyFormatter;
use crate::error::{SocialFinError, SocialFinResult};

pub use balances::{BalanceReport, BalanceRow};
pub use budget::{BudgetReport, BudgetRow};
pub use trend::{TrendReport, TrendRow};

/// Terminal rendering options derived from settings
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub money: MoneyFormatter,
    pub chart_width: usize,
}

impl RenderOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            money: MoneyFormatter::new(settings.currency_symbol.clone(), settings.color_output),
            chart_width: usize::from(settings.chart_width.max(1)),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            money: MoneyFormatter::default(),
            chart_width: 40,
        }
    }
}

/// Common surface of every report
pub trait Report: Serialize {
    /// Render for terminal display
    fn format_terminal(&self, options: &RenderOptions) -> String;

    /// Write the report rows as CSV
    fn export_csv<W: Write>(&self, writer: W) -> SocialFinResult<()>;
}

/// Map a zero-denominator failure to `None`; any other error propagates
pub(crate) fn defined_ratio(result: SocialFinResult<f64>) -> SocialFinResult<Option<f64>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_division_undefined() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Convert a CSV writer failure into an export error
pub(crate) fn csv_export_error(err: csv::Error) -> SocialFinError {
    SocialFinError::Export(err.to_string())
}
