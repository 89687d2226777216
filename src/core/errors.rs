//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for logsleuth operations
#[derive(Debug, Error)]
pub enum Error {
    /// Missing, empty or malformed command argument
    #[error("{0}")]
    Input(String),

    /// Log or config file could not be read
    #[error("{message}: {source}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// Unexpected failure while analyzing or rendering
    #[error("Analysis failed: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(message: impl Into<String>, path: Option<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path,
            source,
        }
    }

    /// Create an analysis failure from any displayable cause
    pub fn analysis(cause: impl std::fmt::Display) -> Self {
        Self::Analysis(cause.to_string())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
