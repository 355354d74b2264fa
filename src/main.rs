use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use socialfin::cli::{
    handle_ask_command, handle_balances_command, handle_budget_command, handle_config_command,
    handle_init_command, handle_sample_command, handle_trend_command, AskArgs, BalancesArgs,
    BudgetArgs, CliContext, SampleArgs, TrendArgs,
};
use socialfin::config::SocialFinPaths;

/// Environment variable holding the log filter, checked before `RUST_LOG`
const LOG_ENV: &str = "SOCIALFIN_LOG";

#[derive(Parser)]
#[command(
    name = "socialfin",
    version,
    about = "Shared balances, budget progress and spending trends",
    long_about = "SocialFin summarizes what friends and groups owe you, how your \
                  spending compares to category budgets, and how spending moves \
                  from period to period."
)]
struct Cli {
    /// Dataset file to read (JSON or YAML)
    #[arg(long, global = true, value_name = "PATH", env = "SOCIALFIN_DATA")]
    data: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show who owes whom
    #[command(alias = "bal")]
    Balances(BalancesArgs),

    /// Show spending against category budgets
    Budget(BudgetArgs),

    /// Chart spending over time
    Trend(TrendArgs),

    /// Ask the finance assistant a question
    Ask(AskArgs),

    /// Print the built-in sample dataset
    Sample(SampleArgs),

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "socialfin=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        println!("SocialFin - shared balances and budget insights");
        println!();
        println!("Run 'socialfin --help' for usage information.");
        println!("Run 'socialfin balances' to see who owes whom.");
        return Ok(());
    };

    // Built on demand: ask and sample need neither settings nor a dataset
    let context = || -> Result<CliContext> {
        let paths = SocialFinPaths::new()?;
        Ok(CliContext::new(paths, cli.data.clone())?)
    };

    match command {
        Commands::Balances(args) => handle_balances_command(&context()?, args)?,
        Commands::Budget(args) => handle_budget_command(&context()?, args)?,
        Commands::Trend(args) => handle_trend_command(&context()?, args)?,
        Commands::Ask(args) => handle_ask_command(args)?,
        Commands::Sample(args) => handle_sample_command(args)?,
        Commands::Init => handle_init_command(&context()?)?,
        Commands::Config => handle_config_command(&context()?)?,
    }

    Ok(())
}
