//! Budget overview report
//!
//! Totals, percentage used and a progress bar per category. A zero total
//! budget shows "no budget set" and a zero category limit shows "n/a"; both
//! serialize as `null`.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::display::{double_separator, format_bar, format_percentage, separator, truncate};
use crate::error::SocialFinResult;
use crate::models::{BudgetCategory, Money};
use crate::services::{progress_fraction, summarize};

use super::{csv_export_error, defined_ratio, RenderOptions, Report};

/// One category in the overview
#[derive(Debug, Clone, Serialize)]
pub struct BudgetRow {
    pub name: String,
    pub color: String,
    pub spent: Money,
    pub limit: Money,
    pub is_over_budget: bool,
    pub overage: Money,
    /// `min(spent / limit, 1.0)`, `None` when the limit is zero
    pub progress: Option<f64>,
}

/// Budget overview across all categories
#[derive(Debug, Clone, Serialize)]
pub struct BudgetReport {
    pub generated_at: DateTime<Utc>,
    pub total_spent: Money,
    pub total_budget: Money,
    pub remaining: Money,
    /// `None` when the total budget is zero
    pub percent_used: Option<f64>,
    pub over_budget_count: usize,
    pub rows: Vec<BudgetRow>,
}

impl BudgetReport {
    pub fn generate(categories: &[BudgetCategory]) -> SocialFinResult<Self> {
        let summary = summarize(categories);
        let percent_used = defined_ratio(summary.percent_used())?;

        let mut rows = Vec::with_capacity(categories.len());
        for (category, status) in categories.iter().zip(&summary.categories) {
            rows.push(BudgetRow {
                name: status.name.clone(),
                color: category.color.clone(),
                spent: category.spent,
                limit: category.limit,
                is_over_budget: status.is_over_budget,
                overage: status.overage,
                progress: defined_ratio(progress_fraction(category))?,
            });
        }

        tracing::debug!(
            categories = rows.len(),
            over_budget = summary.over_budget_count(),
            "generated budget report"
        );

        Ok(Self {
            generated_at: Utc::now(),
            total_spent: summary.total_spent,
            total_budget: summary.total_budget,
            remaining: summary.remaining,
            percent_used,
            over_budget_count: summary.over_budget_count(),
            rows,
        })
    }

    /// Rows that have exceeded their limit
    pub fn over_budget_rows(&self) -> Vec<&BudgetRow> {
        self.rows.iter().filter(|r| r.is_over_budget).collect()
    }
}

impl Report for BudgetReport {
    fn format_terminal(&self, options: &RenderOptions) -> String {
        let money = &options.money;
        let bar_width = options.chart_width.min(20);
        let mut output = String::new();

        output.push_str("Budget Overview\n");
        output.push_str(&double_separator(80));
        output.push('\n');
        output.push_str(&format!(
            "Spent {} of {} ({})\n",
            money.plain(self.total_spent),
            money.plain(self.total_budget),
            self.percent_used
                .map(format_percentage)
                .unwrap_or_else(|| "no budget set".to_string())
        ));
        output.push_str(&format!(
            "Remaining: {}\n\n",
            money.signal(self.remaining, !self.remaining.is_negative())
        ));

        if self.rows.is_empty() {
            output.push_str("No categories yet.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:>12} {:>12}  {:<width$}  {}\n",
            "Category",
            "Spent",
            "Limit",
            "Progress",
            "Used",
            width = bar_width
        ));
        output.push_str(&separator(80));
        output.push('\n');

        for row in &self.rows {
            let (bar, used) = match row.progress {
                Some(fraction) => (format_bar(fraction, bar_width), format_percentage(fraction * 100.0)),
                None => (" ".repeat(bar_width), "n/a".to_string()),
            };
            let marker = if row.is_over_budget { " *" } else { "" };

            output.push_str(&format!(
                "{:<20} {:>12} {:>12}  {}  {}{}\n",
                truncate(&row.name, 20),
                money.plain(row.spent),
                money.plain(row.limit),
                bar,
                used,
                marker
            ));
        }

        if self.over_budget_count > 0 {
            output.push_str(&format!(
                "\n* = Over budget ({} {})\n",
                self.over_budget_count,
                if self.over_budget_count == 1 { "category" } else { "categories" }
            ));
            for row in self.over_budget_rows() {
                output.push_str(&format!(
                    "  {} is over by {}\n",
                    row.name,
                    money.signal(row.overage, false)
                ));
            }
        }

        output
    }

    fn export_csv<W: Write>(&self, writer: W) -> SocialFinResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Category", "Spent", "Limit", "Over Budget", "Overage", "Progress"])
            .map_err(csv_export_error)?;

        for row in &self.rows {
            csv_writer
                .write_record([
                    row.name.clone(),
                    format!("{:.2}", row.spent.as_f64()),
                    format!("{:.2}", row.limit.as_f64()),
                    row.is_over_budget.to_string(),
                    format!("{:.2}", row.overage.as_f64()),
                    row.progress.map(|p| format!("{:.4}", p)).unwrap_or_default(),
                ])
                .map_err(csv_export_error)?;
        }

        csv_writer
            .write_record([
                "TOTAL".to_string(),
                format!("{:.2}", self.total_spent.as_f64()),
                format!("{:.2}", self.total_budget.as_f64()),
                (self.over_budget_count > 0).to_string(),
                String::new(),
                self.percent_used
                    .map(|p| format!("{:.4}", p / 100.0))
                    .unwrap_or_default(),
            ])
            .map_err(csv_export_error)?;

        csv_writer.flush()?;
        Ok(())
    }
}
