//! Whitespace tokenization that can be reversed exactly.

use crate::normalize::is_separator;

/// One whitespace-delimited piece of a description, in its original form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayToken<'a> {
    /// Token text exactly as it appears in the description. May be empty
    /// when two separators are adjacent.
    pub text: &'a str,
    /// The single separator char that followed the token, if any.
    pub separator: Option<&'a str>,
}

/// Splits `description` on every separator char.
///
/// Consecutive separators produce empty tokens, so joining each token's
/// `text` and `separator` in order reproduces the input byte for byte.
pub fn tokenize(description: &str) -> Vec<DisplayToken<'_>> {
    let mut tokens = Vec::new();
    let mut token_start = 0;

    for (offset, ch) in description.char_indices() {
        if is_separator(ch) {
            let sep_end = offset + ch.len_utf8();
            tokens.push(DisplayToken {
                text: &description[token_start..offset],
                separator: Some(&description[offset..sep_end]),
            });
            token_start = sep_end;
        }
    }

    tokens.push(DisplayToken {
        text: &description[token_start..],
        separator: None,
    });
    tokens
}

/// Non-empty whitespace-delimited segments of `s`.
pub fn split_segments(s: &str) -> impl Iterator<Item = &str> {
    s.split(is_separator).filter(|segment| !segment.is_empty())
}
