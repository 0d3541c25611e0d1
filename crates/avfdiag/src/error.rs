//! Error types for avfdiag.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use avf_format::FormatError;

/// Result type alias for avfdiag operations.
pub type DiagResult<T> = Result<T, DiagError>;

/// Errors that can occur while loading inputs or producing a report.
#[derive(Debug, Error)]
pub enum DiagError {
    /// Failed to read a file.
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Snapshot file is not valid JSON for the snapshot schema.
    #[error("Invalid snapshot '{path}': {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file is not valid TOML for the config schema.
    #[error("Invalid config file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation error.
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfig {
        /// The field that failed validation.
        field: String,
        /// Error message.
        message: String,
    },

    /// Report lookup failed.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl DiagError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = DiagError::invalid_config("log_level", "unknown level 'loud'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for log_level: unknown level 'loud'"
        );
    }

    #[test]
    fn test_format_error_is_transparent() {
        let err: DiagError = FormatError::device_not_found(7).into();
        assert_eq!(err.to_string(), "Device 7 not found");
    }
}
