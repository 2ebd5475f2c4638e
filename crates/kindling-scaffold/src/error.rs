//! Error types for kindling-scaffold

use thiserror::Error;

/// Result type alias using kindling-scaffold's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Template source directory does not exist
    #[error("Template directory not found: {path}")]
    TemplateNotFound { path: String },

    /// Template source path exists but is not a directory
    #[error("Template path is not a directory: {path}")]
    TemplateNotADirectory { path: String },

    /// Staging directory could not be created
    #[error("Failed to create staging directory: {message}")]
    Staging { message: String },

    /// Invalid exclusion glob pattern
    #[error("Invalid exclusion pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Output archive already exists
    #[error("Output archive already exists: {path}")]
    OutputExists { path: String },

    /// Copy failure with the path being processed
    #[error("Failed to copy {path}: {source}")]
    Copy {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal error
    #[error("Directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Archive writing error
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a template not found error
    pub fn template_not_found(path: impl Into<String>) -> Self {
        Self::TemplateNotFound { path: path.into() }
    }

    /// Create a template-not-a-directory error
    pub fn template_not_a_directory(path: impl Into<String>) -> Self {
        Self::TemplateNotADirectory { path: path.into() }
    }

    /// Create a staging error
    pub fn staging(message: impl Into<String>) -> Self {
        Self::Staging {
            message: message.into(),
        }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create an output exists error
    pub fn output_exists(path: impl Into<String>) -> Self {
        Self::OutputExists { path: path.into() }
    }

    /// Create a copy error for a specific path
    pub fn copy(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Copy {
            path: path.into(),
            source,
        }
    }
}
