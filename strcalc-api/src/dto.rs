//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use strcalc_core::Evaluation;

/// Where a numbers string is taken from
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Numbers string held in memory
    Text(String),
    /// File whose whole content is the numbers string
    File(PathBuf),
    /// UTF-8 encoded numbers string
    Bytes(Vec<u8>),
    /// Stream read to the end before summing; skipped by serde
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => write!(f, "Text({text:?})"),
            Input::File(path) => write!(f, "File({})", path.display()),
            Input::Bytes(bytes) => write!(f, "Bytes(<{} bytes>)", bytes.len()),
            Input::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl Input {
    /// Numbers string given directly
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Numbers string stored in the file at `path`
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Numbers string as raw UTF-8
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Numbers string produced by `reader`
    pub fn from_reader(reader: impl Read + 'static) -> Self {
        Self::Reader(Box::new(reader))
    }

    /// Load the numbers string
    ///
    /// Missing files and failed reads surface as [`ApiError::Io`], invalid
    /// UTF-8 as [`ApiError::Utf8`].
    pub fn read_text(self) -> Result<String> {
        let text = match self {
            Self::Text(text) => text,
            Self::File(path) => fs::read_to_string(path)?,
            Self::Bytes(bytes) => String::from_utf8(bytes)?,
            Self::Reader(mut reader) => {
                let mut text = String::new();
                reader.read_to_string(&mut text)?;
                text
            }
        };
        Ok(text)
    }
}

/// Calculation metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportMetadata {
    /// Total bytes of input
    pub total_bytes: usize,
    /// Number of parsed values
    pub value_count: usize,
    /// Processing time in microseconds
    pub processing_time_us: u64,
}

/// Complete result of a calculation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// Sum of the values inside the range
    pub total: i128,
    /// Every parsed value, in input order
    pub values: Vec<i64>,
    /// Values left out of the total
    pub ignored: Vec<i64>,
    /// Delimiters the input was split with
    pub delimiters: Vec<String>,
    /// Custom delimiter declaration, if any
    pub declaration: Option<String>,
    /// Processing metadata
    pub metadata: ReportMetadata,
}

impl Report {
    /// Build a report from a core evaluation
    pub fn from_evaluation(evaluation: Evaluation, metadata: ReportMetadata) -> Self {
        Self {
            total: evaluation.total,
            delimiters: evaluation.delimiters.to_vec(),
            values: evaluation.numbers,
            ignored: evaluation.ignored,
            declaration: evaluation.declaration,
            metadata,
        }
    }

    /// Serialize the report as JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
