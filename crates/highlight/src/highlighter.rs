//! Deciding which parts of a description to bold for a query.

use crate::normalize::{has_case, is_separator, normalize_string, FoldedText, HYPHENS};
use crate::query_tokens::generate_query_tokens;
use crate::tokenize::tokenize;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Range;
use tracing::{debug, trace};

/// Optional run of hyphen-class characters, inserted between query chars.
static HYPHEN_RUN: Lazy<String> = Lazy::new(|| {
    let class: String = HYPHENS
        .iter()
        .map(|&c| format!("\\x{{{:X}}}", u32::from(c)))
        .collect();
    format!("[{class}]*")
});

/// A piece of the description and whether it should be emphasized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    /// Text exactly as it appears in the description
    pub text: String,
    /// Whether the text matched the query
    pub bold: bool,
}

impl HighlightSpan {
    /// Creates a span.
    pub fn new(text: impl Into<String>, bold: bool) -> Self {
        Self { text: text.into(), bold }
    }

    /// Creates an unemphasized span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    /// Creates an emphasized span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }
}

/// Splits `description` into plain and bold spans for `query`.
///
/// Never fails. Concatenating the returned spans' text reproduces
/// `description` exactly; adjacent spans always differ in `bold`.
///
/// # Example
///
/// ```
/// use querymark_highlight::{highlight, HighlightSpan};
///
/// let spans = highlight("Turn on Wi-Fi", "wif on");
/// assert_eq!(spans, vec![
///     HighlightSpan::plain("Turn "),
///     HighlightSpan::bold("on"),
///     HighlightSpan::plain(" "),
///     HighlightSpan::bold("Wi-F"),
///     HighlightSpan::plain("i"),
/// ]);
/// ```
pub fn highlight(description: &str, query: &str) -> Vec<HighlightSpan> {
    if query.is_empty() {
        return vec![HighlightSpan::plain(description)];
    }

    let mut spans = SpanBuilder::default();
    if uses_token_strategy(description) {
        let normalized_query = normalize_string(query);
        // Blank after normalization (only spaces or hyphens): nothing to match.
        if normalized_query.chars().all(is_separator) {
            return vec![HighlightSpan::plain(description)];
        }
        debug!("highlighting by token");
        highlight_tokens(description, query, &normalized_query, &mut spans);
    } else {
        debug!("highlighting by character");
        highlight_chars(description, query, &mut spans);
    }
    spans.finish()
}

/// Token matching applies to text with word separators or letter case.
/// Anything else (e.g. unspaced CJK) is matched char by char.
fn uses_token_strategy(description: &str) -> bool {
    description.chars().any(|c| is_separator(c) || has_case(c))
}

/// Bolds every char of `description` that occurs anywhere in `query`.
fn highlight_chars(description: &str, query: &str, spans: &mut SpanBuilder) {
    let wanted: HashSet<char> = query.chars().collect();
    for (offset, ch) in description.char_indices() {
        let end = offset + ch.len_utf8();
        spans.push(&description[offset..end], wanted.contains(&ch));
    }
}

fn highlight_tokens(
    description: &str,
    query: &str,
    normalized_query: &str,
    spans: &mut SpanBuilder,
) {
    let patterns: Vec<QueryPattern> = generate_query_tokens(description, query)
        .into_iter()
        .filter_map(QueryPattern::new)
        .collect();
    trace!(count = patterns.len(), "query patterns");

    for token in tokenize(description) {
        mark_token(token.text, normalized_query, &patterns, spans);
        if let Some(separator) = token.separator {
            spans.push(separator, false);
        }
    }
}

/// Emits the spans for one display token.
fn mark_token(text: &str, normalized_query: &str, patterns: &[QueryPattern], spans: &mut SpanBuilder) {
    let normalized = normalize_string(text);
    // Hyphen- or mark-only tokens have nothing to compare.
    if normalized.is_empty() {
        spans.push(text, false);
        return;
    }
    if normalized_query.contains(&normalized) {
        spans.push(text, true);
        return;
    }

    let folded = FoldedText::new(text);
    let mut found: Vec<(Range<usize>, usize)> = Vec::new();
    for pattern in patterns.iter().filter(|p| normalized.contains(p.token.as_str())) {
        found.extend(
            pattern
                .regex
                .find_iter(folded.as_str())
                .filter_map(|m| folded.source_range(m.range())),
        );
    }

    let Some(longest) = found.iter().map(|(_, len)| *len).max() else {
        spans.push(text, false);
        return;
    };

    let mut ranges: Vec<Range<usize>> = found
        .into_iter()
        .filter(|(_, len)| *len == longest)
        .map(|(range, _)| range)
        .collect();
    ranges.sort_by_key(|r| r.start);

    // Overlapping ranges are unioned rather than marked twice.
    let mut cursor = 0;
    for range in ranges {
        let start = range.start.max(cursor);
        if range.end <= start {
            continue;
        }
        spans.push(&text[cursor..start], false);
        spans.push(&text[start..range.end], true);
        cursor = range.end;
    }
    spans.push(&text[cursor..], false);
}

/// A query token and the hyphen-tolerant pattern that finds it.
struct QueryPattern {
    token: String,
    regex: Regex,
}

impl QueryPattern {
    fn new(token: String) -> Option<Self> {
        let mut pattern = String::new();
        for (i, ch) in token.chars().enumerate() {
            if i > 0 {
                pattern.push_str(&HYPHEN_RUN);
            }
            pattern.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4])));
        }

        match Regex::new(&pattern) {
            Ok(regex) => Some(Self { token, regex }),
            Err(e) => {
                debug!(%token, error = %e, "skipping query token");
                None
            }
        }
    }
}

/// Accumulates spans, dropping empty text and joining neighbours that share
/// the same emphasis.
#[derive(Default)]
struct SpanBuilder {
    spans: Vec<HighlightSpan>,
}

impl SpanBuilder {
    fn push(&mut self, text: &str, bold: bool) {
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.spans.last_mut() {
            if last.bold == bold {
                last.text.push_str(text);
                return;
            }
        }
        self.spans.push(HighlightSpan::new(text, bold));
    }

    fn finish(self) -> Vec<HighlightSpan> {
        if self.spans.is_empty() {
            vec![HighlightSpan::plain("")]
        } else {
            self.spans
        }
    }
}
