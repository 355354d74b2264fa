//! File reading helpers for dataset files
//!
//! Datasets are read-only inputs; the format is chosen from the file
//! extension.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::SocialFinError;

/// Supported dataset file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Detect from the extension (`.json`, `.yaml`, `.yml`)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Read a JSON or YAML file, returning an error if it doesn't exist
pub fn read_data_file<T, P>(path: P) -> Result<T, SocialFinError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(SocialFinError::dataset_not_found(path.display().to_string()));
    }

    let format = DataFormat::from_path(path).ok_or_else(|| {
        SocialFinError::Validation(format!(
            "Unsupported dataset extension for {} (expected .json, .yaml or .yml)",
            path.display()
        ))
    })?;

    let file = File::open(path)
        .map_err(|e| SocialFinError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    match format {
        DataFormat::Json => serde_json::from_reader(reader).map_err(|e| {
            SocialFinError::Json(format!("Failed to parse {}: {}", path.display(), e))
        }),
        DataFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
            SocialFinError::Yaml(format!("Failed to parse {}: {}", path.display(), e))
        }),
    }
}
