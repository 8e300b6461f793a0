//! Core error types (deterministic only)

use std::fmt;
use thiserror::Error;

/// Negative values found in the input, in encounter order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeValues(Vec<i64>);

impl NegativeValues {
    /// Wrap the collected negative values
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    /// The offending values
    pub fn values(&self) -> &[i64] {
        &self.0
    }

    /// Consume and return the offending values
    pub fn into_values(self) -> Vec<i64> {
        self.0
    }
}

impl fmt::Display for NegativeValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Negatives not allowed: ")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Calculation errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A token could not be parsed as an integer
    #[error("invalid number '{token}' at position {index}")]
    Format {
        /// Zero-based index of the token in the body
        index: usize,
        /// The token exactly as produced by splitting
        token: String,
    },

    /// One or more negative values were present
    #[error("{0}")]
    NegativeValues(NegativeValues),
}

impl CoreError {
    /// Negative values carried by this error, if any
    pub fn negatives(&self) -> Option<&[i64]> {
        match self {
            CoreError::NegativeValues(values) => Some(values.values()),
            CoreError::Format { .. } => None,
        }
    }

    /// Whether this is a token format error
    pub fn is_format(&self) -> bool {
        matches!(self, CoreError::Format { .. })
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A value failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML could not be parsed into the schema
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
