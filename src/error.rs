//! Custom error types for SocialFin
//!
//! This module defines the error hierarchy for the library using thiserror.
//! The two computation failures (`DivisionUndefined` and `EmptyInput`) are
//! deterministic input-contract violations: callers branch on them and pick a
//! display placeholder, they are never retried.

use thiserror::Error;

/// The main error type for SocialFin operations
#[derive(Error, Debug)]
pub enum SocialFinError {
    /// A ratio or percentage was requested with a zero denominator
    #[error("Cannot compute {quantity}: denominator is zero")]
    DivisionUndefined { quantity: &'static str },

    /// An extremum was requested over an empty collection
    #[error("Cannot compute {operation}: input is empty")]
    EmptyInput { operation: &'static str },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for input records
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// CSV import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SocialFinError {
    /// Create a "division undefined" error for the named quantity
    pub fn division_undefined(quantity: &'static str) -> Self {
        Self::DivisionUndefined { quantity }
    }

    /// Create an "empty input" error for the named operation
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    /// Create a "not found" error for dataset files
    pub fn dataset_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Dataset",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a zero-denominator error
    pub fn is_division_undefined(&self) -> bool {
        matches!(self, Self::DivisionUndefined { .. })
    }

    /// Check if this is an empty-input error
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SocialFinError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SocialFinError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SocialFinError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for SocialFinError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for SocialFin operations
pub type SocialFinResult<T> = Result<T, SocialFinError>;
