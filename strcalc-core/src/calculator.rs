//! String sum calculator
//!
//! Composes header detection, delimiter discovery, parsing, negative-value
//! validation and range-limited summation into a single pure operation.

use crate::config::{CalculatorConfig, HeaderSyntax, ValueRange};
use crate::delimiters::DelimiterSet;
use crate::error::{ConfigError, Result};
use crate::header::strip_header;
use crate::parser::parse_numbers;
use crate::source::{DelimiterSource, HeaderDelimiterSource};
use crate::summation::{ensure_no_negatives, Tally};

/// Detailed outcome of a calculation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Sum of the values inside the range
    pub total: i128,
    /// Every parsed value, in input order
    pub numbers: Vec<i64>,
    /// Parsed values left out of the total
    pub ignored: Vec<i64>,
    /// Delimiters the input was split with
    pub delimiters: DelimiterSet,
    /// Raw header declaration, if the input had a non-empty one
    pub declaration: Option<String>,
}

/// Sums delimited number strings
#[derive(Debug, Clone)]
pub struct Calculator<S = HeaderDelimiterSource> {
    syntax: HeaderSyntax,
    range: ValueRange,
    source: S,
}

impl Default for Calculator {
    fn default() -> Self {
        let config = CalculatorConfig::default();
        Self {
            source: HeaderDelimiterSource::new(&config),
            syntax: config.header,
            range: config.range,
        }
    }
}

impl Calculator {
    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator from a validated configuration
    pub fn from_config(config: &CalculatorConfig) -> std::result::Result<Self, ConfigError> {
        Self::with_source(config, HeaderDelimiterSource::new(config))
    }
}

impl<S: DelimiterSource> Calculator<S> {
    /// Create a calculator that asks `source` for delimiters
    ///
    /// The header is still stripped according to `config.header`.
    pub fn with_source(
        config: &CalculatorConfig,
        source: S,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            syntax: config.header.clone(),
            range: config.range,
            source,
        })
    }

    /// Sum `input`; absent and empty input sum to 0
    pub fn sum(&self, input: Option<&str>) -> Result<i128> {
        self.evaluate(input).map(|evaluation| evaluation.total)
    }

    /// Sum `input` and report how each value was treated
    pub fn evaluate(&self, input: Option<&str>) -> Result<Evaluation> {
        let Some(text) = input.filter(|text| !text.is_empty()) else {
            tracing::trace!("empty input");
            return Ok(Evaluation::default());
        };

        let delimiters = self.source.delimiters(text);
        let declaration = self.source.declaration(text);
        let body = strip_header(text, &self.syntax);
        tracing::debug!(
            declaration,
            delimiters = ?delimiters,
            header_len = text.len() - body.len(),
            "splitting input"
        );

        let numbers = parse_numbers(body, &delimiters)?;
        ensure_no_negatives(&numbers)?;
        let tally = Tally::from_numbers(&numbers, &self.range);

        Ok(Evaluation {
            total: tally.total,
            numbers,
            ignored: tally.ignored,
            delimiters,
            declaration: (!declaration.is_empty()).then(|| declaration.to_string()),
        })
    }

    /// The delimiter source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Inclusive range of values added to the total
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Header syntax used to strip the header
    pub fn syntax(&self) -> &HeaderSyntax {
        &self.syntax
    }
}
