//! CSV import for budget categories and trend points
//!
//! Both formats require a header row. Columns are located by header name
//! (case-insensitive), so their order is free:
//!
//! - categories: `name,spent,limit[,color]`
//! - trend points: `label,amount`
//!
//! Amounts accept anything [`Money::parse`] accepts.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{SocialFinError, SocialFinResult};
use crate::models::{BudgetCategory, Money, PeriodPoint};

/// Locate a named column in the header row
fn column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

fn required_column(headers: &StringRecord, name: &str) -> SocialFinResult<usize> {
    column(headers, name)
        .ok_or_else(|| SocialFinError::Import(format!("Missing required column '{}'", name)))
}

fn field<'r>(record: &'r StringRecord, index: usize, row: usize) -> SocialFinResult<&'r str> {
    record
        .get(index)
        .map(str::trim)
        .ok_or_else(|| SocialFinError::Import(format!("Row {}: missing column {}", row, index + 1)))
}

fn amount(record: &StringRecord, index: usize, row: usize) -> SocialFinResult<Money> {
    let raw = field(record, index, row)?;
    Money::parse(raw).map_err(|e| SocialFinError::Import(format!("Row {}: {}", row, e)))
}

/// Parse budget categories from CSV data
pub fn parse_categories_csv<R: Read>(reader: R) -> SocialFinResult<Vec<BudgetCategory>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let name_col = required_column(&headers, "name")?;
    let spent_col = required_column(&headers, "spent")?;
    let limit_col = required_column(&headers, "limit")?;
    let color_col = column(&headers, "color");

    let mut categories = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        // Row numbers count the header as row 1
        let row = i + 2;
        let record = result?;

        let mut category = BudgetCategory::new(
            field(&record, name_col, row)?,
            amount(&record, spent_col, row)?,
            amount(&record, limit_col, row)?,
        );
        if let Some(color) = color_col.and_then(|c| record.get(c)).map(str::trim) {
            if !color.is_empty() {
                category.color = color.to_string();
            }
        }

        category
            .validate()
            .map_err(|e| SocialFinError::Import(format!("Row {}: {}", row, e)))?;
        categories.push(category);
    }

    Ok(categories)
}

/// Parse trend points from CSV data, keeping file order
pub fn parse_trend_csv<R: Read>(reader: R) -> SocialFinResult<Vec<PeriodPoint>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let label_col = required_column(&headers, "label")?;
    let amount_col = required_column(&headers, "amount")?;

    let mut points = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        let row = i + 2;
        let record = result?;
        let value = amount(&record, amount_col, row)?;
        if value.is_negative() {
            return Err(SocialFinError::Import(format!(
                "Row {}: trend amount cannot be negative ({})",
                row, value
            )));
        }
        points.push(PeriodPoint::new(field(&record, label_col, row)?, value));
    }

    Ok(points)
}

fn open(path: &Path) -> SocialFinResult<std::fs::File> {
    std::fs::File::open(path)
        .map_err(|e| SocialFinError::Import(format!("Failed to open {}: {}", path.display(), e)))
}

/// Import budget categories from a CSV file
pub fn import_categories_csv(path: &Path) -> SocialFinResult<Vec<BudgetCategory>> {
    let categories = parse_categories_csv(open(path)?)?;
    tracing::info!(path = %path.display(), count = categories.len(), "imported budget categories");
    Ok(categories)
}

/// Import trend points from a CSV file
pub fn import_trend_csv(path: &Path) -> SocialFinResult<Vec<PeriodPoint>> {
    let points = parse_trend_csv(open(path)?)?;
    tracing::info!(path = %path.display(), count = points.len(), "imported trend points");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories() {
        let data = "name,spent,limit,color\n\
                    Dining,450.00,600,#ff6b6b\n\
                    Shopping,$800,850.00,\n";
        let categories = parse_categories_csv(data.as_bytes()).unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Dining");
        assert_eq!(categories[0].spent, Money::from_units(450));
        assert_eq!(categories[0].color, "#ff6b6b");
        assert_eq!(categories[1].limit, Money::from_units(850));
        assert_eq!(categories[1].color, crate::models::category::DEFAULT_CATEGORY_COLOR);
    }

    #[test]
    fn test_columns_in_any_order_without_color() {
        let data = "Limit,Name,Spent\n600,Dining,450\n";
        let categories = parse_categories_csv(data.as_bytes()).unwrap();
        assert_eq!(categories[0].name, "Dining");
        assert_eq!(categories[0].limit, Money::from_units(600));
    }

    #[test]
    fn test_missing_column() {
        let data = "name,spent\nDining,450\n";
        let err = parse_categories_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("'limit'"));
    }

    #[test]
    fn test_bad_amount_reports_row() {
        let data = "name,spent,limit\nDining,450,600\nTravel,lots,100\n";
        let err = parse_categories_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Row 3"), "{}", err);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let data = "name,spent,limit,color\nDining,1,2,blue\n";
        let err = parse_categories_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, SocialFinError::Import(_)));
    }

    #[test]
    fn test_parse_trend_keeps_order() {
        let data = "label,amount\nJan,2400\nFeb,2100\nJan,5\n";
        let points = parse_trend_csv(data.as_bytes()).unwrap();

        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan", "Feb", "Jan"]);
        assert_eq!(points[1].amount, Money::from_units(2100));
    }

    #[test]
    fn test_negative_trend_amount_reports_row() {
        let data = "label,amount\nJan,5\nFeb,-10\n";
        let err = parse_trend_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Row 3"), "{}", err);
        assert!(err.to_string().contains("negative"), "{}", err);
    }

    #[test]
    fn test_oversized_amount_reports_row() {
        let data = "name,spent,limit\nDining,99999999999999999,600\n";
        let err = parse_categories_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, SocialFinError::Import(_)));
        assert!(err.to_string().contains("Row 2"), "{}", err);
        assert!(err.to_string().contains("out of range"), "{}", err);
    }

    #[test]
    fn test_sign_after_symbol_reports_row() {
        let data = "name,spent,limit\nDining,$-12.50,600\n";
        let err = parse_categories_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Row 2"), "{}", err);
    }

    #[test]
    fn test_header_only_is_empty() {
        let points = parse_trend_csv("label,amount\n".as_bytes()).unwrap();
        assert!(points.is_empty());
    }
}
