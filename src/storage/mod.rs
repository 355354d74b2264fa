//! Input datasets for SocialFin
//!
//! A [`Dataset`] bundles the collections the computations run over. It is
//! read once per invocation and never written back: SocialFin keeps no state
//! of its own between runs.

pub mod file_io;
pub mod import;
pub mod sample;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{SocialFinPaths, Settings};
use crate::error::{SocialFinError, SocialFinResult};
use crate::models::{BudgetCategory, CounterpartyBalance, CounterpartyKind, PeriodPoint};

pub use file_io::{read_data_file, DataFormat};
pub use import::{import_categories_csv, import_trend_csv};
pub use sample::sample_dataset;

/// All inputs for one run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub friends: Vec<CounterpartyBalance>,
    #[serde(default)]
    pub groups: Vec<CounterpartyBalance>,
    #[serde(default)]
    pub categories: Vec<BudgetCategory>,
    /// Period totals in chronological order
    #[serde(default)]
    pub trend: Vec<PeriodPoint>,
}

/// Where a dataset came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Sample,
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Sample => write!(f, "built-in sample"),
        }
    }
}

impl Dataset {
    /// Load and validate a dataset file (JSON or YAML)
    pub fn load(path: &Path) -> SocialFinResult<Self> {
        let mut dataset: Dataset = read_data_file(path)?;
        dataset.normalize_kinds();
        dataset.validate()?;
        tracing::debug!(
            path = %path.display(),
            friends = dataset.friends.len(),
            groups = dataset.groups.len(),
            categories = dataset.categories.len(),
            trend = dataset.trend.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Pick the dataset source by precedence: explicit path, settings,
    /// the default dataset file if present, then the built-in sample
    pub fn resolve_source(
        explicit: Option<&Path>,
        settings: &Settings,
        paths: &SocialFinPaths,
    ) -> DatasetSource {
        if let Some(path) = explicit {
            return DatasetSource::File(path.to_path_buf());
        }
        if let Some(path) = &settings.data_file {
            return DatasetSource::File(path.clone());
        }
        let default_file = paths.dataset_file();
        if default_file.exists() {
            return DatasetSource::File(default_file);
        }
        DatasetSource::Sample
    }

    pub fn from_source(source: &DatasetSource) -> SocialFinResult<Self> {
        match source {
            DatasetSource::File(path) => Self::load(path),
            DatasetSource::Sample => {
                tracing::debug!("using built-in sample dataset");
                Ok(sample_dataset())
            }
        }
    }

    /// Friends followed by groups
    pub fn all_counterparties(&self) -> Vec<CounterpartyBalance> {
        self.friends.iter().chain(&self.groups).cloned().collect()
    }

    /// Records listed under `groups` are groups regardless of their `kind` field
    fn normalize_kinds(&mut self) {
        for friend in &mut self.friends {
            friend.kind = CounterpartyKind::Friend;
        }
        for group in &mut self.groups {
            group.kind = CounterpartyKind::Group;
        }
    }

    /// Validate names and colors of every record and the sign of trend amounts
    pub fn validate(&self) -> SocialFinResult<()> {
        for balance in self.friends.iter().chain(&self.groups) {
            balance.validate().map_err(|e| {
                SocialFinError::Validation(format!("{} '{}': {}", balance.kind, balance.name, e))
            })?;
        }
        for category in &self.categories {
            category.validate().map_err(|e| {
                SocialFinError::Validation(format!("category '{}': {}", category.name, e))
            })?;
        }
        if let Some(point) = self.trend.iter().find(|p| p.amount.is_negative()) {
            return Err(SocialFinError::Validation(format!(
                "trend point '{}': amount cannot be negative",
                point.label
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_sample_is_valid() {
        let dataset = sample_dataset();
        assert!(dataset.validate().is_ok());
        assert_eq!(dataset.friends.len(), 4);
        assert_eq!(dataset.groups.len(), 3);
        assert_eq!(dataset.trend.len(), 6);
        assert_eq!(dataset.all_counterparties().len(), 7);
    }

    #[test]
    fn test_load_yaml_sets_kinds() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.yaml");
        std::fs::write(
            &path,
            "friends:\n  - name: Sarah\n    amount: -45.50\n\
             groups:\n  - name: Trip\n    amount: 450\n    kind: friend\n",
        )
        .unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.friends[0].amount, Money::from_cents(-4550));
        assert_eq!(dataset.groups[0].amount, Money::from_units(450));
        assert_eq!(dataset.groups[0].kind, CounterpartyKind::Group);
        assert!(dataset.categories.is_empty());
    }

    #[test]
    fn test_load_rejects_invalid_record() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{"categories": [{"name": "", "spent": 0, "limit": 0}]}"#,
        )
        .unwrap();

        let err = Dataset::load(&path).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_load_rejects_negative_trend_amount() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        std::fs::write(&path, r#"{"trend": [{"label": "Jan", "amount": -5}]}"#).unwrap();

        let err = Dataset::load(&path).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_load_rejects_out_of_range_amount() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{"friends": [{"name": "X", "amount": -9223372036854775808}]}"#,
        )
        .unwrap();

        assert!(Dataset::load(&path).is_err());
    }

    #[test]
    fn test_loads_fractional_units() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{"friends": [{"name": "Sarah Chen", "amount": -45.5}, {"name": "Mike", "amount": 45}]}"#,
        )
        .unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.friends[0].amount, Money::from_cents(-4550));
        assert_eq!(dataset.friends[1].amount, Money::from_units(45));
    }

    #[test]
    fn test_json_round_trip_of_sample() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        let sample = sample_dataset();
        std::fs::write(&path, serde_json::to_string(&sample).unwrap()).unwrap();

        assert_eq!(Dataset::load(&path).unwrap(), sample);
    }

    #[test]
    fn test_source_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SocialFinPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        assert_eq!(
            Dataset::resolve_source(None, &settings, &paths),
            DatasetSource::Sample
        );

        paths.ensure_directories().unwrap();
        std::fs::write(paths.dataset_file(), "{}").unwrap();
        assert_eq!(
            Dataset::resolve_source(None, &settings, &paths),
            DatasetSource::File(paths.dataset_file())
        );

        settings.data_file = Some(PathBuf::from("/from/settings.yaml"));
        assert_eq!(
            Dataset::resolve_source(None, &settings, &paths),
            DatasetSource::File(PathBuf::from("/from/settings.yaml"))
        );

        let explicit = PathBuf::from("/explicit.json");
        assert_eq!(
            Dataset::resolve_source(Some(&explicit), &settings, &paths),
            DatasetSource::File(explicit.clone())
        );
    }
}
