//! Error types for kindling-core

use thiserror::Error;

/// Result type alias using kindling-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for kindling
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Working directory could not be resolved
    #[error("Failed to resolve working directory: {message}")]
    WorkingDir { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a working directory resolution error
    pub fn working_dir(message: impl Into<String>) -> Self {
        Self::WorkingDir {
            message: message.into(),
        }
    }
}
