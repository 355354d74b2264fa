//! Spending trend report
//!
//! A horizontal bar chart of period totals, each bar scaled against the
//! largest period.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::display::{double_separator, format_bar, truncate};
use crate::error::SocialFinResult;
use crate::models::{Money, PeriodPoint};
use crate::services::normalize;

use super::{csv_export_error, RenderOptions, Report};

/// One period in the chart
#[derive(Debug, Clone, Serialize)]
pub struct TrendRow {
    pub label: String,
    pub amount: Money,
    /// `amount / max`, `None` when every amount is zero
    pub ratio: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub generated_at: DateTime<Utc>,
    /// Largest amount; `None` when there are no points
    pub max: Option<Money>,
    pub rows: Vec<TrendRow>,
}

impl TrendReport {
    pub fn generate(points: &[PeriodPoint]) -> SocialFinResult<Self> {
        let (max, ratios): (Option<Money>, Vec<Option<f64>>) = match normalize(points) {
            Ok(scale) => (Some(scale.max), scale.ratios.into_iter().map(Some).collect()),
            Err(e) if e.is_empty_input() => (None, Vec::new()),
            Err(e) if e.is_division_undefined() => (Some(Money::zero()), vec![None; points.len()]),
            Err(e) => return Err(e),
        };

        let rows = points
            .iter()
            .zip(ratios)
            .map(|(point, ratio)| TrendRow {
                label: point.label.clone(),
                amount: point.amount,
                ratio,
            })
            .collect::<Vec<_>>();

        tracing::debug!(points = rows.len(), "generated trend report");

        Ok(Self {
            generated_at: Utc::now(),
            max,
            rows,
        })
    }
}

impl Report for TrendReport {
    fn format_terminal(&self, options: &RenderOptions) -> String {
        let money = &options.money;
        let mut output = String::new();

        output.push_str("Spending Trend\n");
        output.push_str(&double_separator(options.chart_width + 24));
        output.push('\n');

        let max = match self.max {
            Some(max) => max,
            None => {
                output.push_str("No data yet\n");
                return output;
            }
        };

        for row in &self.rows {
            output.push_str(&format!(
                "{:<8} {}  {}\n",
                truncate(&row.label, 8),
                format_bar(row.ratio.unwrap_or(0.0), options.chart_width),
                money.plain(row.amount)
            ));
        }

        output.push_str(&format!("\nPeak: {}\n", money.plain(max)));
        output
    }

    fn export_csv<W: Write>(&self, writer: W) -> SocialFinResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Label", "Amount", "Ratio"])
            .map_err(csv_export_error)?;

        for row in &self.rows {
            csv_writer
                .write_record([
                    row.label.clone(),
                    format!("{:.2}", row.amount.as_f64()),
                    row.ratio.map(|r| format!("{:.4}", r)).unwrap_or_default(),
                ])
                .map_err(csv_export_error)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
