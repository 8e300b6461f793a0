//! Custom delimiter header scanning
//!
//! A header is `<marker><declaration><terminator>` at the very start of the
//! input, for example `//;\n` or `//[***][%]\n`. Detection is a prefix check
//! followed by a search for the terminator; bracket groups are read by a
//! small left-to-right scanner.

use crate::config::HeaderSyntax;

/// A detected header split into its declaration and the remaining body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    declaration: &'a str,
    body: &'a str,
}

impl<'a> Header<'a> {
    /// Detect a header at the start of `input`
    ///
    /// Returns `None` when the input does not start with the marker or when
    /// the marker is never terminated.
    pub fn parse(input: &'a str, syntax: &HeaderSyntax) -> Option<Self> {
        let rest = input.strip_prefix(syntax.marker.as_str())?;
        let end = rest.find(syntax.terminator.as_str())?;
        Some(Self {
            declaration: &rest[..end],
            body: &rest[end + syntax.terminator.len()..],
        })
    }

    /// Text between the marker and the terminator
    pub fn declaration(&self) -> &'a str {
        self.declaration
    }

    /// Everything after the terminator
    pub fn body(&self) -> &'a str {
        self.body
    }
}

/// Body of `input` with any header removed
pub fn strip_header<'a>(input: &'a str, syntax: &HeaderSyntax) -> &'a str {
    Header::parse(input, syntax).map_or(input, |header| header.body())
}

/// Custom delimiters named by a declaration
///
/// Bracketed declarations yield one delimiter per non-empty group; anything
/// else is taken literally as a single delimiter.
pub fn parse_declaration(declaration: &str, syntax: &HeaderSyntax) -> Vec<String> {
    if declaration.is_empty() {
        return Vec::new();
    }

    let groups = bracket_groups(declaration, syntax);
    if groups.is_empty() {
        return vec![declaration.to_string()];
    }

    groups
        .into_iter()
        .filter(|group| !group.is_empty())
        .map(str::to_string)
        .collect()
}

/// Interior of every `[...]` group, closing at the first close bracket
fn bracket_groups<'a>(declaration: &'a str, syntax: &HeaderSyntax) -> Vec<&'a str> {
    let open = syntax.open_bracket.as_str();
    let close = syntax.close_bracket.as_str();

    let mut groups = Vec::new();
    let mut rest = declaration;
    while let Some(start) = rest.find(open) {
        let interior = &rest[start + open.len()..];
        let Some(end) = interior.find(close) else {
            break;
        };
        groups.push(&interior[..end]);
        rest = &interior[end + close.len()..];
    }
    groups
}
