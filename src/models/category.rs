//! Budget categories
//!
//! A category is a budget bucket with an amount spent and a limit for the
//! current period. Neither amount is bounded: spending may exceed the limit
//! and a zero limit is legal (it only makes ratios undefined).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Color used when a record does not specify one
pub const DEFAULT_CATEGORY_COLOR: &str = "#00ff88";

/// A budget category with its spend and limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Category name
    pub name: String,

    /// Amount spent this period
    pub spent: Money,

    /// Budget limit for this period
    pub limit: Money,

    /// Display color as a hex string
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

impl BudgetCategory {
    pub fn new(name: impl Into<String>, spent: Money, limit: Money) -> Self {
        Self {
            name: name.into(),
            spent,
            limit,
            color: default_color(),
        }
    }

    /// Set the display color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Validate name and color; amounts are intentionally unchecked
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if !is_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// `#rgb` or `#rrggbb`
fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidColor(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::InvalidColor(color) => {
                write!(f, "Category color must be #rgb or #rrggbb, got '{}'", color)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_uses_default_color() {
        let category = BudgetCategory::new("Dining", Money::from_units(450), Money::from_units(600));
        assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_validate_color() {
        let category = BudgetCategory::new("Travel", Money::zero(), Money::zero());
        assert!(category.clone().with_color("#fff").validate().is_ok());
        assert!(category.clone().with_color("#FECA57").validate().is_ok());
        assert_eq!(
            category.clone().with_color("red").validate(),
            Err(CategoryValidationError::InvalidColor("red".into()))
        );
        assert!(category.with_color("#12345g").validate().is_err());
    }

    #[test]
    fn test_validate_ignores_amounts() {
        let category = BudgetCategory::new("Odd", Money::from_units(-5), Money::from_units(-10));
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_validate_name() {
        let category = BudgetCategory::new("", Money::zero(), Money::zero());
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));
    }
}
