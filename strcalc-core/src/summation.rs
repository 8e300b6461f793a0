//! Negative-value validation and range-limited summation

use crate::config::ValueRange;
use crate::error::{CoreError, NegativeValues, Result};

/// Every negative value, in encounter order
pub fn collect_negatives(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|n| *n < 0).collect()
}

/// Fail with all negative values if any are present
pub fn ensure_no_negatives(numbers: &[i64]) -> Result<()> {
    let negatives = collect_negatives(numbers);
    if negatives.is_empty() {
        return Ok(());
    }

    tracing::debug!(?negatives, "rejecting negative values");
    Err(CoreError::NegativeValues(NegativeValues::new(negatives)))
}

/// Result of summing a list of numbers over a range
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    /// Sum of the included values
    ///
    /// Widened to `i128`: a slice of `i64` cannot hold enough elements to
    /// overflow it.
    pub total: i128,
    /// Values inside the range, in order
    pub included: Vec<i64>,
    /// Values outside the range, in order
    pub ignored: Vec<i64>,
}

impl Tally {
    /// Sum the values of `numbers` that fall inside `range`
    pub fn from_numbers(numbers: &[i64], range: &ValueRange) -> Self {
        let (included, ignored): (Vec<i64>, Vec<i64>) =
            numbers.iter().partition(|n| range.contains(**n));
        let total = included.iter().map(|n| i128::from(*n)).sum();

        if !ignored.is_empty() {
            tracing::debug!(
                ?ignored,
                min = range.min,
                max = range.max,
                "ignoring out-of-range values"
            );
        }

        Self {
            total,
            included,
            ignored,
        }
    }
}
