//! API error types

use std::string::FromUtf8Error;
use strcalc_core::{ConfigError, CoreError};
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The input could not be summed
    #[error(transparent)]
    Calculation(#[from] CoreError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Negative values that caused the failure, if any
    pub fn negatives(&self) -> Option<&[i64]> {
        match self {
            ApiError::Calculation(err) => err.negatives(),
            _ => None,
        }
    }

    /// Whether a token could not be parsed
    pub fn is_format(&self) -> bool {
        matches!(self, ApiError::Calculation(err) if err.is_format())
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
