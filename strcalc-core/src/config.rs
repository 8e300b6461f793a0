//! Configuration structures and validation
//!
//! This module defines the TOML schema for the calculator. Every section is
//! optional; missing sections and keys fall back to the built-in defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Prefix that opens a custom delimiter header
pub const DEFAULT_MARKER: &str = "//";
/// Text that closes a custom delimiter header
pub const DEFAULT_TERMINATOR: &str = "\n";
/// Opening bracket of a delimiter group
pub const DEFAULT_OPEN_BRACKET: &str = "[";
/// Closing bracket of a delimiter group
pub const DEFAULT_CLOSE_BRACKET: &str = "]";
/// Delimiters that are always active
pub const DEFAULT_DELIMITERS: [&str; 3] = ["\n", ",", ";"];
/// Smallest value included in the total
pub const DEFAULT_MIN: i64 = 0;
/// Largest value included in the total
pub const DEFAULT_MAX: i64 = 1000;

/// Root calculator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Custom delimiter header syntax
    #[serde(default)]
    pub header: HeaderSyntax,

    /// Always-active delimiters
    #[serde(default)]
    pub delimiters: DelimiterConfig,

    /// Inclusive range of values added to the total
    #[serde(default)]
    pub range: ValueRange,
}

/// Header syntax, e.g. `//[***]\n`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderSyntax {
    /// Prefix that opens the header
    pub marker: String,
    /// Text that ends the header; the body starts right after it
    pub terminator: String,
    /// Opening bracket of a delimiter group
    pub open_bracket: String,
    /// Closing bracket of a delimiter group
    pub close_bracket: String,
}

impl Default for HeaderSyntax {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            terminator: DEFAULT_TERMINATOR.to_string(),
            open_bracket: DEFAULT_OPEN_BRACKET.to_string(),
            close_bracket: DEFAULT_CLOSE_BRACKET.to_string(),
        }
    }
}

/// Default delimiter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelimiterConfig {
    /// Delimiters active for every input, in match order
    pub defaults: Vec<String>,
}

impl Default for DelimiterConfig {
    fn default() -> Self {
        Self {
            defaults: DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Inclusive value range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueRange {
    /// Smallest included value
    pub min: i64,
    /// Largest included value
    pub max: i64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl ValueRange {
    /// Create a range; callers are expected to validate `min <= max`
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within `[min, max]`
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl CalculatorConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: CalculatorConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Check that the configuration can drive a calculator
    pub fn validate(&self) -> Result<(), ConfigError> {
        let header = &self.header;
        for (name, value) in [
            ("header.marker", &header.marker),
            ("header.terminator", &header.terminator),
            ("header.open_bracket", &header.open_bracket),
            ("header.close_bracket", &header.close_bracket),
        ] {
            if value.is_empty() {
                return Err(ConfigError::InvalidConfig(format!("{name} cannot be empty")));
            }
        }

        if self.delimiters.defaults.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "at least one default delimiter is required".to_string(),
            ));
        }
        if self.delimiters.defaults.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidConfig(
                "default delimiters cannot be empty strings".to_string(),
            ));
        }

        if self.range.min > self.range.max {
            return Err(ConfigError::InvalidConfig(format!(
                "range min {} exceeds max {}",
                self.range.min, self.range.max
            )));
        }

        Ok(())
    }
}
