//! High-level configuration API

use crate::error::Result;
use std::path::Path;
use strcalc_core::{CalculatorConfig, ValueRange};

/// High-level configuration for the calculator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    inner: CalculatorConfig,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a TOML configuration
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(Self {
            inner: CalculatorConfig::from_toml_str(toml_str)?,
        })
    }

    /// Load a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            inner: CalculatorConfig::from_file(path)?,
        })
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(self.inner.to_toml_string()?)
    }

    /// The underlying core configuration
    pub fn inner(&self) -> &CalculatorConfig {
        &self.inner
    }

    /// Inclusive range of values added to the total
    pub fn range(&self) -> ValueRange {
        self.inner.range
    }
}

impl From<Config> for CalculatorConfig {
    fn from(config: Config) -> Self {
        config.inner
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: CalculatorConfig,
}

impl ConfigBuilder {
    /// Set the header marker (default `//`)
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.config.header.marker = marker.into();
        self
    }

    /// Set the header terminator (default newline)
    pub fn terminator(mut self, terminator: impl Into<String>) -> Self {
        self.config.header.terminator = terminator.into();
        self
    }

    /// Set the delimiter group brackets (default `[` and `]`)
    pub fn brackets(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.config.header.open_bracket = open.into();
        self.config.header.close_bracket = close.into();
        self
    }

    /// Replace the always-active delimiters
    pub fn default_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.delimiters.defaults = delimiters.into_iter().map(Into::into).collect();
        self
    }

    /// Add one always-active delimiter
    pub fn add_default_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.delimiters.defaults.push(delimiter.into());
        self
    }

    /// Set the inclusive range of summed values
    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.config.range = ValueRange::new(min, max);
        self
    }

    /// Set only the upper bound
    pub fn max_value(mut self, max: i64) -> Self {
        self.config.range.max = max;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(Config { inner: self.config })
    }
}
