//! User settings for SocialFin
//!
//! Display preferences for the terminal front end. Every field has a serde
//! default so older or hand-written config files keep loading.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::paths::SocialFinPaths;
use crate::error::SocialFinError;

/// Which counterparties the balance overview covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BalanceScope {
    /// Friends only (the friends screen overview)
    #[default]
    Friends,
    /// Groups only
    Groups,
    /// Friends and groups together
    All,
}

impl fmt::Display for BalanceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Friends => "friends",
            Self::Groups => "groups",
            Self::All => "all",
        };
        f.write_str(name)
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Width in columns of the longest chart bar
    #[serde(default = "default_chart_width")]
    pub chart_width: u16,

    /// Whether to color amounts with ANSI escapes
    #[serde(default = "default_color_output")]
    pub color_output: bool,

    /// Scope used by `balances` when none is given
    #[serde(default)]
    pub default_scope: BalanceScope,

    /// Dataset file used when `--data` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_chart_width() -> u16 {
    40
}

fn default_color_output() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            chart_width: default_chart_width(),
            color_output: default_color_output(),
            default_scope: BalanceScope::default(),
            data_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    ///
    /// Never writes; call [`Settings::save`] to persist.
    pub fn load_or_create(paths: &SocialFinPaths) -> Result<Self, SocialFinError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SocialFinError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            SocialFinError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        if settings.chart_width == 0 {
            return Err(SocialFinError::Config(
                "chart_width must be at least 1".into(),
            ));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SocialFinPaths) -> Result<(), SocialFinError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SocialFinError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SocialFinError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
