//! CLI commands for settings and sample data

use std::io;

use clap::Args;

use crate::error::SocialFinResult;
use crate::export::{write_dataset, DatasetFormat};
use crate::storage::sample_dataset;

use super::CliContext;

/// Options for `sample`
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = DatasetFormat::Json)]
    pub format: DatasetFormat,
}

/// Handle `init`: write the current settings (defaults on first run)
pub fn handle_init_command(ctx: &CliContext) -> SocialFinResult<()> {
    let settings_file = ctx.paths.settings_file();
    if ctx.paths.is_initialized() {
        println!("Settings already exist at: {}", settings_file.display());
        return Ok(());
    }

    ctx.settings.save(&ctx.paths)?;
    tracing::info!(path = %settings_file.display(), "wrote settings");

    println!("Wrote settings to: {}", settings_file.display());
    println!(
        "Put a dataset at {} or pass --data to use your own numbers.",
        ctx.paths.dataset_file().display()
    );
    println!("Run 'socialfin sample > dataset.json' for a starting point.");
    Ok(())
}

/// Handle `config`
pub fn handle_config_command(ctx: &CliContext) -> SocialFinResult<()> {
    let settings = &ctx.settings;

    println!("SocialFin Configuration");
    println!("=======================");
    println!("Base directory:  {}", ctx.paths.base_dir().display());
    println!("Settings file:   {}", ctx.paths.settings_file().display());
    println!("Dataset:         {}", ctx.source);
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Chart width:     {}", settings.chart_width);
    println!("  Color output:    {}", settings.color_output);
    println!("  Default scope:   {}", settings.default_scope);
    Ok(())
}

/// Handle `sample`
pub fn handle_sample_command(args: SampleArgs) -> SocialFinResult<()> {
    write_dataset(&sample_dataset(), args.format, io::stdout().lock())
}
