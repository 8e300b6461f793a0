//! Delimiter discovery
//!
//! [`DelimiterSource`] is the seam between the calculator and the logic that
//! decides which delimiters apply to an input. The default implementation
//! reads the custom delimiter header; [`FixedDelimiterSource`] ignores it.

use crate::config::{CalculatorConfig, HeaderSyntax};
use crate::delimiters::DelimiterSet;
use crate::header::{parse_declaration, Header};

/// Decides which delimiters apply to an input
pub trait DelimiterSource {
    /// Raw delimiter declaration of `input`, or `""` when there is none
    fn declaration<'a>(&self, input: &'a str) -> &'a str;

    /// The full set of delimiters to split `input` with
    fn delimiters(&self, input: &str) -> DelimiterSet;
}

/// Reads delimiters from the custom delimiter header
#[derive(Debug, Clone)]
pub struct HeaderDelimiterSource {
    syntax: HeaderSyntax,
    defaults: DelimiterSet,
}

impl HeaderDelimiterSource {
    /// Create a source from a calculator configuration
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            syntax: config.header.clone(),
            defaults: DelimiterSet::with_defaults(config.delimiters.defaults.iter().cloned()),
        }
    }

    /// Header syntax this source recognises
    pub fn syntax(&self) -> &HeaderSyntax {
        &self.syntax
    }
}

impl Default for HeaderDelimiterSource {
    fn default() -> Self {
        Self::new(&CalculatorConfig::default())
    }
}

impl DelimiterSource for HeaderDelimiterSource {
    fn declaration<'a>(&self, input: &'a str) -> &'a str {
        Header::parse(input, &self.syntax).map_or("", |header| header.declaration())
    }

    fn delimiters(&self, input: &str) -> DelimiterSet {
        let mut set = self.defaults.clone();
        let declaration = self.declaration(input);
        if !declaration.is_empty() {
            set.extend(parse_declaration(declaration, &self.syntax));
        }
        set
    }
}

/// Always returns the same delimiters, regardless of any header
#[derive(Debug, Clone)]
pub struct FixedDelimiterSource {
    delimiters: DelimiterSet,
}

impl FixedDelimiterSource {
    /// Create a source that always yields `delimiters`
    pub fn new(delimiters: DelimiterSet) -> Self {
        Self { delimiters }
    }
}

impl DelimiterSource for FixedDelimiterSource {
    fn declaration<'a>(&self, _input: &'a str) -> &'a str {
        ""
    }

    fn delimiters(&self, _input: &str) -> DelimiterSet {
        self.delimiters.clone()
    }
}

impl<T: DelimiterSource + ?Sized> DelimiterSource for &T {
    fn declaration<'a>(&self, input: &'a str) -> &'a str {
        (**self).declaration(input)
    }

    fn delimiters(&self, input: &str) -> DelimiterSet {
        (**self).delimiters(input)
    }
}
