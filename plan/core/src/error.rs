//! Error types for plan loading and configuration

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a plan
#[derive(Debug, Error)]
pub enum PlanError {
    /// The plan file could not be read
    #[error("failed to read plan {path:?}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The plan is not valid JSON, or not an array/`todos` object
    #[error("invalid plan JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading panel configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {path:?}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML
    #[error("invalid config {path:?}: {source}")]
    Toml {
        /// File that was being parsed
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },

    /// A setting has a value outside its allowed range
    #[error("invalid value for {key}: {value}")]
    InvalidValue {
        /// Setting name
        key: &'static str,
        /// Offending value
        value: String,
    },
}
