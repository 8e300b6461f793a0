//! Delimited number string calculator
//!
//! Parses strings such as `"1,2\n3"` or `"//[***]\n1***2***3"`, rejects
//! negative numbers (reporting every one of them) and sums the values that
//! fall inside an inclusive range, `[0, 1000]` by default.
//!
//! # Example
//!
//! ```
//! assert_eq!(strcalc_core::sum("//[*][%]\n1*2%3").unwrap(), 6);
//! assert_eq!(strcalc_core::sum("1;2;1001").unwrap(), 3);
//!
//! let err = strcalc_core::sum("1;-2;3;-9").unwrap_err();
//! assert_eq!(err.to_string(), "Negatives not allowed: -2, -9");
//! ```

#![warn(missing_docs)]

pub mod calculator;
pub mod config;
pub mod delimiters;
pub mod error;
pub mod header;
pub mod parser;
pub mod source;
pub mod summation;

// Re-export key types
pub use calculator::{Calculator, Evaluation};
pub use config::{CalculatorConfig, DelimiterConfig, HeaderSyntax, ValueRange};
pub use delimiters::{default_delimiters, DelimiterSet, Split};
pub use error::{ConfigError, CoreError, NegativeValues, Result};
pub use header::Header;
pub use source::{DelimiterSource, FixedDelimiterSource, HeaderDelimiterSource};
pub use summation::Tally;

/// Sum `input` with the default configuration
pub fn sum(input: &str) -> Result<i128> {
    Calculator::new().sum(Some(input))
}
