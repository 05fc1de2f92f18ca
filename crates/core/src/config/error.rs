//! Error types for configuration loading.
//!
//! This module defines all errors that can occur while locating, reading,
//! decoding and re-emitting a release descriptor.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The descriptor file could not be opened.
    #[error("Failed to open config file at {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input stream could not be read to the end.
    #[error("Failed to read config: {source}")]
    Read { source: std::io::Error },

    /// The input is not valid YAML, or a value has the wrong type.
    #[error("Failed to parse config: {source}")]
    Parse { source: serde_yaml::Error },

    /// No descriptor was found in the searched directory.
    #[error("No config file found in {dir} (tried {tried})")]
    NotFound { dir: PathBuf, tried: String },

    /// Failed to emit a configuration as YAML.
    #[error("Failed to serialize config: {source}")]
    Serialize { source: serde_yaml::Error },
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
