//! Ordered delimiter set and multi-delimiter splitting

use crate::config::DEFAULT_DELIMITERS;
use std::fmt;

/// Ordered, duplicate-free collection of delimiter strings
///
/// Order matters when splitting: at each position the delimiters are tried
/// in insertion order and the first match wins.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct DelimiterSet {
    items: Vec<String>,
}

impl DelimiterSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set seeded with the given default delimiters
    pub fn with_defaults<I, S>(defaults: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        set.extend(defaults);
        set
    }

    /// Add a delimiter; returns `false` if it is empty or already present
    pub fn insert(&mut self, delimiter: impl Into<String>) -> bool {
        let delimiter = delimiter.into();
        if delimiter.is_empty() || self.contains(&delimiter) {
            return false;
        }
        self.items.push(delimiter);
        true
    }

    /// Whether the set contains `delimiter`
    pub fn contains(&self, delimiter: &str) -> bool {
        self.items.iter().any(|d| d == delimiter)
    }

    /// Number of delimiters
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Delimiters in match order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Owned copy of the delimiters in match order
    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }

    /// Split `text` on every delimiter in the set
    ///
    /// Empty tokens are kept, so `"1,,2"` yields three tokens and `""`
    /// yields one empty token.
    pub fn split<'s, 't>(&'s self, text: &'t str) -> Split<'s, 't> {
        Split {
            delimiters: self,
            text,
            position: 0,
            finished: false,
        }
    }

    /// Byte length of the first delimiter that prefixes `text`
    fn match_len(&self, text: &str) -> Option<usize> {
        self.items
            .iter()
            .find(|d| text.starts_with(d.as_str()))
            .map(String::len)
    }
}

/// The default newline, comma and semicolon set
pub fn default_delimiters() -> DelimiterSet {
    DelimiterSet::with_defaults(DEFAULT_DELIMITERS)
}

impl<S: Into<String>> Extend<S> for DelimiterSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for delimiter in iter {
            self.insert(delimiter);
        }
    }
}

impl fmt::Debug for DelimiterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

/// Iterator over the tokens of a string split by a [`DelimiterSet`]
#[derive(Debug, Clone)]
pub struct Split<'s, 't> {
    delimiters: &'s DelimiterSet,
    text: &'t str,
    position: usize,
    finished: bool,
}

impl<'s, 't> Iterator for Split<'s, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        if self.finished {
            return None;
        }

        let text = self.text;
        let start = self.position;
        for (offset, _) in text[start..].char_indices() {
            let cursor = start + offset;
            if let Some(len) = self.delimiters.match_len(&text[cursor..]) {
                self.position = cursor + len;
                return Some(&text[start..cursor]);
            }
        }

        self.finished = true;
        Some(&text[start..])
    }
}
