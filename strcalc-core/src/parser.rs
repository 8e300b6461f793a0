//! Token splitting and integer parsing

use crate::delimiters::{DelimiterSet, Split};
use crate::error::{CoreError, Result};

/// Split a header-free body into raw tokens
pub fn split_tokens<'s, 't>(body: &'t str, delimiters: &'s DelimiterSet) -> Split<'s, 't> {
    delimiters.split(body)
}

/// Parse one token as an integer
///
/// Surrounding ASCII whitespace and a leading `+` are accepted. Empty and
/// non-numeric tokens are errors, never zero.
pub fn parse_token(index: usize, token: &str) -> Result<i64> {
    token
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .parse::<i64>()
        .map_err(|_| CoreError::Format {
            index,
            token: token.to_string(),
        })
}

/// Split `body` and parse every token, failing on the first bad one
pub fn parse_numbers(body: &str, delimiters: &DelimiterSet) -> Result<Vec<i64>> {
    let numbers = split_tokens(body, delimiters)
        .enumerate()
        .map(|(index, token)| parse_token(index, token))
        .collect::<Result<Vec<_>>>()?;

    tracing::trace!(count = numbers.len(), "parsed tokens");
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimiters::default_delimiters;

    #[test]
    fn test_parse_simple_list() {
        let numbers = parse_numbers("1,2,3\n4", &default_delimiters()).unwrap();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_keeps_negatives() {
        let numbers = parse_numbers("1;-2;3;-9", &default_delimiters()).unwrap();
        assert_eq!(numbers, vec![1, -2, 3, -9]);
    }

    #[test]
    fn test_non_numeric_token_is_error() {
        let err = parse_numbers("1,2,qwe", &default_delimiters()).unwrap_err();
        assert_eq!(
            err,
            CoreError::Format {
                index: 2,
                token: "qwe".to_string()
            }
        );
    }

    #[test]
    fn test_empty_token_is_error() {
        let err = parse_numbers("1,,2", &default_delimiters()).unwrap_err();
        assert!(matches!(err, CoreError::Format { index: 1, .. }));
    }

    #[test]
    fn test_trailing_delimiter_is_error() {
        assert!(parse_numbers("1,2,", &default_delimiters()).is_err());
    }

    #[test]
    fn test_whitespace_and_plus_sign() {
        assert_eq!(parse_token(0, " 7 ").unwrap(), 7);
        assert_eq!(parse_token(0, "+7").unwrap(), 7);
        assert!(parse_token(0, "   ").is_err());
        assert!(parse_token(0, "--7").is_err());
    }

    #[test]
    fn test_out_of_range_integer_is_error() {
        assert!(parse_token(0, "99999999999999999999").is_err());
    }

    #[test]
    fn test_error_keeps_original_token() {
        let err = parse_token(3, " x ").unwrap_err();
        assert_eq!(
            err,
            CoreError::Format {
                index: 3,
                token: " x ".to_string()
            }
        );
    }
}
