//! CLI commands for the balance, budget and trend reports

use std::path::PathBuf;

use clap::Args;

use crate::config::BalanceScope;
use crate::error::SocialFinResult;
use crate::export::{write_report, OutputFormat};
use crate::reports::{BalanceReport, BudgetReport, TrendReport};
use crate::storage::{import_categories_csv, import_trend_csv};

use super::{open_output, CliContext};

/// Options for `balances`
#[derive(Args, Debug)]
pub struct BalancesArgs {
    /// Which counterparties to include (defaults to the configured scope)
    #[arg(short, long, value_enum)]
    pub scope: Option<BalanceScope>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Options for `budget`
#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Read categories from a CSV file (name,spent,limit[,color])
    #[arg(long, value_name = "PATH")]
    pub import_csv: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Options for `trend`
#[derive(Args, Debug)]
pub struct TrendArgs {
    /// Read period totals from a CSV file (label,amount)
    #[arg(long, value_name = "PATH")]
    pub import_csv: Option<PathBuf>,

    /// Width of the longest bar, in columns
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `balances`
pub fn handle_balances_command(ctx: &CliContext, args: BalancesArgs) -> SocialFinResult<()> {
    let dataset = ctx.load_dataset()?;
    let scope = args.scope.unwrap_or(ctx.settings.default_scope);

    let report = BalanceReport::generate(&dataset, scope);
    let options = ctx.render_options(args.output.as_deref());
    write_report(&report, args.format, &options, open_output(args.output.as_deref())?)
}

/// Handle `budget`
pub fn handle_budget_command(ctx: &CliContext, args: BudgetArgs) -> SocialFinResult<()> {
    let categories = match &args.import_csv {
        Some(path) => import_categories_csv(path)?,
        None => ctx.load_dataset()?.categories,
    };

    let report = BudgetReport::generate(&categories)?;
    let options = ctx.render_options(args.output.as_deref());
    write_report(&report, args.format, &options, open_output(args.output.as_deref())?)
}

/// Handle `trend`
pub fn handle_trend_command(ctx: &CliContext, args: TrendArgs) -> SocialFinResult<()> {
    let points = match &args.import_csv {
        Some(path) => import_trend_csv(path)?,
        None => ctx.load_dataset()?.trend,
    };

    let report = TrendReport::generate(&points)?;
    let mut options = ctx.render_options(args.output.as_deref());
    if let Some(width) = args.width {
        options.chart_width = usize::from(width);
    }
    write_report(&report, args.format, &options, open_output(args.output.as_deref())?)
}
