//! Path management for SocialFin
//!
//! ## Path Resolution Order
//!
//! 1. `SOCIALFIN_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/socialfin` or `~/.config/socialfin`
//! 3. Windows: `%APPDATA%\socialfin`

use std::path::PathBuf;

use crate::error::SocialFinError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SOCIALFIN_DATA_DIR";

/// Resolves every path SocialFin reads or writes
#[derive(Debug, Clone)]
pub struct SocialFinPaths {
    base_dir: PathBuf,
}

impl SocialFinPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, SocialFinError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use an explicit base directory (tests, embedding)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding input datasets
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Settings file (`config.json`)
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Dataset picked up automatically when no other source is given
    pub fn dataset_file(&self) -> PathBuf {
        self.data_dir().join("dataset.json")
    }

    /// Create the base and data directories
    pub fn ensure_directories(&self) -> Result<(), SocialFinError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SocialFinError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SocialFinError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SocialFinError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join("socialfin"));
        }
    }

    let home = std::env::var("HOME").map_err(|_| {
        SocialFinError::Config("Could not determine HOME directory".into())
    })?;
    Ok(PathBuf::from(home).join(".config").join("socialfin"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SocialFinError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SocialFinError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("socialfin"))
}
