//! Public API for the strcalc string sum calculator
//!
//! This crate provides a stable interface over `strcalc-core`: a calculator
//! facade, validated configuration, input sources and serialisable reports.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::time::Instant;
use strcalc_core::Calculator;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Report, ReportMetadata};
pub use error::{ApiError, Result};
pub use strcalc_core::{
    CoreError, DelimiterSet, DelimiterSource, FixedDelimiterSource, HeaderDelimiterSource,
};

/// Main entry point for summing delimited number strings
#[derive(Debug, Clone)]
pub struct StringCalculator<S = HeaderDelimiterSource> {
    inner: Calculator<S>,
    config: Config,
}

impl StringCalculator {
    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self {
            inner: Calculator::new(),
            config: Config::default(),
        }
    }

    /// Create a calculator with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = Calculator::from_config(config.inner())?;
        Ok(Self { inner, config })
    }
}

impl Default for StringCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DelimiterSource> StringCalculator<S> {
    /// Create a calculator that takes its delimiters from `source`
    pub fn with_source(config: Config, source: S) -> Result<Self> {
        let inner = Calculator::with_source(config.inner(), source)?;
        Ok(Self { inner, config })
    }

    /// Sum `input`; `None` and `""` sum to 0
    pub fn sum<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<i128> {
        Ok(self.inner.sum(input.into())?)
    }

    /// Sum `input` and report every parsed and ignored value
    pub fn evaluate(&self, input: Input) -> Result<Report> {
        let start = Instant::now();
        let text = input.read_text()?;

        let evaluation = self.inner.evaluate(Some(text.as_str()))?;
        let metadata = ReportMetadata {
            total_bytes: text.len(),
            value_count: evaluation.numbers.len(),
            processing_time_us: start.elapsed().as_micros() as u64,
        };
        tracing::debug!(total = evaluation.total, ?metadata, "evaluated input");

        Ok(Report::from_evaluation(evaluation, metadata))
    }

    /// Evaluate text directly (convenience method)
    pub fn evaluate_text(&self, text: &str) -> Result<Report> {
        self.evaluate(Input::from_text(text))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Convenience functions

/// Sum text with the default configuration
pub fn sum_text(text: &str) -> Result<i128> {
    StringCalculator::new().sum(text)
}

/// Sum the contents of a file with the default configuration
pub fn sum_file<P: AsRef<std::path::Path>>(path: P) -> Result<i128> {
    let text = Input::from_file(path.as_ref().to_path_buf()).read_text()?;
    StringCalculator::new().sum(text.as_str())
}
