//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Message reported for every rejected subject line.
pub const INVALID_SUBJECT_MESSAGE: &str = "Subject line must be a non-empty string";

/// Main error type for subject line operations
#[derive(Debug, Error)]
pub enum Error {
    /// The subject line was missing, not a string, or empty
    #[error("{0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error in {path}: {message}")]
    ConfigFile { path: PathBuf, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create the canonical invalid subject line error
    pub fn invalid_subject() -> Self {
        Self::InvalidInput(INVALID_SUBJECT_MESSAGE.to_string())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a configuration error tied to a file
    pub fn config_file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigFile {
            path: path.into(),
            message: message.into(),
        }
    }

    /// HTTP-style status code used on the JSON error envelope.
    ///
    /// Invalid input is a client error; everything else is reported as a
    /// server-side failure.
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            _ => 500,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
