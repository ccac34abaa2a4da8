//! Shared error types for the loading, configuration and output edges.
//!
//! The scoring core never returns errors: malformed company data degrades
//! to neutral values instead. Only reading files, parsing configuration and
//! writing reports can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jimotode operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Company data could not be decoded
    #[error("Invalid company data in {source_name}: {source}")]
    CompanyData {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Create a file system error that keeps the underlying io error
    pub fn file_system_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::FileSystem {
            message: format!("cannot access {}", path.display()),
            path: Some(path),
            source: Some(source),
        }
    }

    /// Create a company data error naming where the data came from
    pub fn company_data(source_name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::CompanyData {
            source_name: source_name.into(),
            source,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
