//! Navigation Error Types
//!
//! Input-format problems (non-numeric levels, malformed positions) are hard
//! failures. Missing data (absent properties, empty listings, undefined
//! template blocks) is never an error and normalizes to empty output instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a navigation listing
#[derive(Error, Debug)]
pub enum NavigationError {
    /// A level argument could not be parsed as an integer
    #[error("Invalid navigation level '{value}': expected an integer")]
    InvalidLevel { value: String },

    /// A compound argument (e.g. `level,property`) was malformed
    #[error("Invalid argument '{value}': {reason}")]
    InvalidArgument { value: String, reason: String },

    /// A navigation position property could not be parsed as a number
    #[error("Invalid navigation position '{value}' on resource {path}")]
    InvalidPosition { path: String, value: String },

    /// The resource store reported a failure; passed through untouched
    #[error("Resource store query failed: {0}")]
    Store(#[from] anyhow::Error),

    /// Configuration or template setup is invalid
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failed to read a configuration, template or snapshot file
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NavigationError {
    /// Create an invalid level error
    pub fn invalid_level(value: impl Into<String>) -> Self {
        Self::InvalidLevel {
            value: value.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid position error
    pub fn invalid_position(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidPosition {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an I/O error with the offending path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by malformed caller input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidLevel { .. } | Self::InvalidArgument { .. } | Self::InvalidPosition { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, NavigationError>;
