//! Budget summarization
//!
//! Computes totals, remaining budget, percentage used and per-category
//! over-budget status for a set of categories. Ratios are fallible: a zero
//! denominator is reported as `DivisionUndefined` and the caller chooses a
//! placeholder ("no budget set") instead of a coerced 0% or infinity.

use serde::{Deserialize, Serialize};

use crate::error::{SocialFinError, SocialFinResult};
use crate::models::{BudgetCategory, Money};

/// Over-budget status of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStatus {
    pub name: String,
    /// `spent > limit`
    pub is_over_budget: bool,
    /// `max(0, spent - limit)`
    pub overage: Money,
}

/// Totals across a set of budget categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total_spent: Money,
    pub total_budget: Money,
    /// `total_budget - total_spent`; negative when overspent overall
    pub remaining: Money,
    /// One entry per input category, in input order
    pub categories: Vec<CategoryStatus>,
}

impl BudgetSummary {
    /// Percentage of the total budget that has been spent
    ///
    /// # Errors
    ///
    /// Returns `DivisionUndefined` when the total budget is zero.
    pub fn percent_used(&self) -> SocialFinResult<f64> {
        if self.total_budget.is_zero() {
            return Err(SocialFinError::division_undefined("percent used"));
        }
        Ok(self.total_spent.cents() as f64 / self.total_budget.cents() as f64 * 100.0)
    }

    pub fn over_budget_count(&self) -> usize {
        self.categories.iter().filter(|c| c.is_over_budget).count()
    }
}

/// Summarize spend against limits for a set of categories
pub fn summarize(categories: &[BudgetCategory]) -> BudgetSummary {
    let total_spent: Money = categories.iter().map(|c| c.spent).sum();
    let total_budget: Money = categories.iter().map(|c| c.limit).sum();

    let statuses = categories
        .iter()
        .map(|c| {
            let is_over_budget = c.spent > c.limit;
            CategoryStatus {
                name: c.name.clone(),
                is_over_budget,
                overage: if is_over_budget {
                    c.spent - c.limit
                } else {
                    Money::zero()
                },
            }
        })
        .collect();

    tracing::trace!(
        categories = categories.len(),
        total_spent = total_spent.cents(),
        total_budget = total_budget.cents(),
        "summarized budget"
    );

    BudgetSummary {
        total_spent,
        total_budget,
        remaining: total_budget - total_spent,
        categories: statuses,
    }
}

/// Fill fraction for a category progress bar: `min(spent / limit, 1.0)`
///
/// # Errors
///
/// Returns `DivisionUndefined` when the limit is zero.
pub fn progress_fraction(category: &BudgetCategory) -> SocialFinResult<f64> {
    if category.limit.is_zero() {
        return Err(SocialFinError::division_undefined("progress fraction"));
    }
    let fraction = category.spent.cents() as f64 / category.limit.cents() as f64;
    Ok(fraction.min(1.0))
}
