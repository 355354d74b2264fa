//! CLI command handlers
//!
//! Bridges clap argument parsing with the reports and services.

pub mod ask;
pub mod config;
pub mod report;

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};

use crate::config::{Settings, SocialFinPaths};
use crate::display::MoneyFormatter;
use crate::reports::RenderOptions;
use crate::error::{SocialFinError, SocialFinResult};
use crate::storage::{Dataset, DatasetSource};

pub use ask::{handle_ask_command, AskArgs};
pub use config::{handle_config_command, handle_init_command, handle_sample_command, SampleArgs};
pub use report::{
    handle_balances_command, handle_budget_command, handle_trend_command, BalancesArgs,
    BudgetArgs, TrendArgs,
};

/// Shared state for one invocation
#[derive(Debug, Clone)]
pub struct CliContext {
    pub paths: SocialFinPaths,
    pub settings: Settings,
    pub source: DatasetSource,
}

impl CliContext {
    /// Resolve paths, settings and the dataset source
    pub fn new(paths: SocialFinPaths, data: Option<PathBuf>) -> SocialFinResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        let source = Dataset::resolve_source(data.as_deref(), &settings, &paths);
        tracing::debug!(%source, "resolved dataset source");

        Ok(Self {
            paths,
            settings,
            source,
        })
    }

    pub fn load_dataset(&self) -> SocialFinResult<Dataset> {
        Dataset::from_source(&self.source)
    }

    /// Render options for a report headed to `output`
    ///
    /// Color is only emitted when writing to an interactive stdout.
    pub fn render_options(&self, output: Option<&Path>) -> RenderOptions {
        let mut options = RenderOptions::from_settings(&self.settings);
        let color = self.settings.color_output && output.is_none() && io::stdout().is_terminal();
        if !color {
            options.money = MoneyFormatter::new(self.settings.currency_symbol.clone(), false);
        }
        options
    }
}

/// Open the report destination: a file when given, stdout otherwise
pub(crate) fn open_output(path: Option<&Path>) -> SocialFinResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SocialFinError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
