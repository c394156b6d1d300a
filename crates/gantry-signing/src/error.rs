//! Error types for signing resolution

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for signing operations
pub type Result<T> = std::result::Result<T, SigningError>;

/// Signing-related errors
#[derive(Debug, Error)]
pub enum SigningError {
    /// Properties file exists but a required key is absent
    #[error("Missing required key '{key}' in {path}")]
    MissingPropertyKey { key: String, path: PathBuf },

    /// Properties file exists but a line could not be parsed
    #[error("Malformed line {line} in {path}: {content}")]
    MalformedProperty {
        path: PathBuf,
        line: usize,
        content: String,
    },

    /// Properties file could not be read
    #[error("Failed to read properties file {path}: {source}")]
    PropertiesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
