//! Trend normalization
//!
//! Scales a series of period totals against its maximum so a chart can size
//! each bar as `ratio * height`.

use serde::{Deserialize, Serialize};

use crate::error::{SocialFinError, SocialFinResult};
use crate::models::{Money, PeriodPoint};

/// A series normalized against its largest value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendScale {
    pub max: Money,
    /// `amount / max` per point, in input order
    pub ratios: Vec<f64>,
}

impl TrendScale {
    /// Multiply every ratio by a caller-supplied height
    pub fn scaled(&self, height: f64) -> Vec<f64> {
        self.ratios.iter().map(|r| r * height).collect()
    }
}

/// Normalize a series against its maximum amount
///
/// # Errors
///
/// - `EmptyInput` when `points` is empty (no maximum exists)
/// - `Validation` when any amount is negative
/// - `DivisionUndefined` when the maximum is zero
pub fn normalize(points: &[PeriodPoint]) -> SocialFinResult<TrendScale> {
    if let Some(point) = points.iter().find(|p| p.amount.is_negative()) {
        return Err(SocialFinError::Validation(format!(
            "trend amount for '{}' is negative ({})",
            point.label, point.amount
        )));
    }

    let max = points
        .iter()
        .map(|p| p.amount)
        .max()
        .ok_or_else(|| SocialFinError::empty_input("trend maximum"))?;

    if max.is_zero() {
        return Err(SocialFinError::division_undefined("trend ratios"));
    }

    let denominator = max.cents() as f64;
    let ratios = points
        .iter()
        .map(|p| p.amount.cents() as f64 / denominator)
        .collect();

    tracing::trace!(points = points.len(), max = max.cents(), "normalized trend");

    Ok(TrendScale { max, ratios })
}
