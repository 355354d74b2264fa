//! Export module for SocialFin
//!
//! Writes reports in one of four formats:
//! - table: terminal rendering
//! - json / yaml: the full report structure
//! - csv: report rows, spreadsheet-compatible

use std::io::Write;

use serde::Serialize;

use crate::error::{SocialFinError, SocialFinResult};
use crate::reports::{RenderOptions, Report};
use crate::storage::Dataset;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Csv,
}

/// Output format for datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DatasetFormat {
    #[default]
    Json,
    Yaml,
}

fn export_error(e: impl std::fmt::Display) -> SocialFinError {
    SocialFinError::Export(e.to_string())
}

fn write_json<T: Serialize, W: Write>(value: &T, writer: &mut W) -> SocialFinResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(export_error)?;
    writeln!(writer).map_err(export_error)
}

/// Write a report in the requested format
pub fn write_report<R: Report, W: Write>(
    report: &R,
    format: OutputFormat,
    options: &RenderOptions,
    mut writer: W,
) -> SocialFinResult<()> {
    match format {
        OutputFormat::Table => writer
            .write_all(report.format_terminal(options).as_bytes())
            .map_err(export_error)?,
        OutputFormat::Json => write_json(report, &mut writer)?,
        OutputFormat::Yaml => serde_yaml::to_writer(&mut writer, report).map_err(export_error)?,
        OutputFormat::Csv => report.export_csv(&mut writer)?,
    }
    writer.flush().map_err(export_error)
}

/// Write a dataset so it can be edited and loaded back with `--data`
pub fn write_dataset<W: Write>(
    dataset: &Dataset,
    format: DatasetFormat,
    mut writer: W,
) -> SocialFinResult<()> {
    match format {
        DatasetFormat::Json => write_json(dataset, &mut writer)?,
        DatasetFormat::Yaml => {
            writeln!(writer, "# SocialFin dataset").map_err(export_error)?;
            writeln!(writer, "# Amounts are in currency units; negative balances are owed to you.")
                .map_err(export_error)?;
            serde_yaml::to_writer(&mut writer, dataset).map_err(export_error)?;
        }
    }
    writer.flush().map_err(export_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BalanceScope;
    use crate::reports::{BalanceReport, TrendReport};
    use crate::storage::sample_dataset;

    #[test]
    fn test_json_report() {
        let report = BalanceReport::generate(&sample_dataset(), BalanceScope::Friends);
        let mut buffer = Vec::new();
        write_report(&report, OutputFormat::Json, &RenderOptions::default(), &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["totals"]["net"], 775.5);
        assert_eq!(value["scope"], "friends");
    }

    #[test]
    fn test_yaml_report() {
        let report = TrendReport::generate(&sample_dataset().trend).unwrap();
        let mut buffer = Vec::new();
        write_report(&report, OutputFormat::Yaml, &RenderOptions::default(), &mut buffer).unwrap();

        let yaml = String::from_utf8(buffer).unwrap();
        assert!(yaml.contains("max: 2800.0"), "{}", yaml);
    }

    #[test]
    fn test_table_report_matches_terminal_format() {
        let report = TrendReport::generate(&sample_dataset().trend).unwrap();
        let options = RenderOptions::default();
        let mut buffer = Vec::new();
        write_report(&report, OutputFormat::Table, &options, &mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), report.format_terminal(&options));
    }

    #[test]
    fn test_dataset_yaml_round_trip() {
        let sample = sample_dataset();
        let mut buffer = Vec::new();
        write_dataset(&sample, DatasetFormat::Yaml, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# SocialFin dataset"));
        let parsed: Dataset = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed, sample);
    }
}
