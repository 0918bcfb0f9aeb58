//! Comparison forms of text: case folding, accent stripping, hyphen handling.
//!
//! Every view produced here is used for comparison only. Display always goes
//! back to the original text through [`FoldedText`]'s byte mapping.

use std::ops::Range;
use unicode_normalization::char::decompose_canonical;

/// Characters treated as interchangeable hyphen-like separators.
pub const HYPHENS: &[char] = &[
    '-',        // Hyphen-minus
    '~',        // Tilde
    '\u{058A}', // Armenian hyphen
    '\u{05BE}', // Hebrew maqaf
    '\u{1400}', // Canadian syllabics hyphen
    '\u{1806}', // Mongolian todo soft hyphen
    '\u{2010}', // Hyphen
    '\u{2011}', // Non-breaking hyphen
    '\u{2012}', // Figure dash
    '\u{2013}', // En dash
    '\u{2014}', // Em dash
    '\u{2015}', // Horizontal bar
    '\u{2053}', // Swung dash
    '\u{207B}', // Superscript minus
    '\u{208B}', // Subscript minus
    '\u{2212}', // Minus sign
    '\u{2E17}', // Double oblique hyphen
    '\u{2E3A}', // Two-em dash
    '\u{2E3B}', // Three-em dash
    '\u{301C}', // Wave dash
    '\u{3030}', // Wavy dash
    '\u{30A0}', // Katakana-hiragana double hyphen
    '\u{FE31}', // Vertical em dash
    '\u{FE32}', // Vertical en dash
    '\u{FE58}', // Small em dash
    '\u{FE63}', // Small hyphen-minus
    '\u{FF0D}', // Fullwidth hyphen-minus
];

/// Joiner that every hyphen run collapses to in the delocalized form.
pub const DELOCALIZED_HYPHEN: char = '-';

/// Combining diacritical marks removed after canonical decomposition.
const COMBINING_MARKS: Range<char> = '\u{0300}'..'\u{0370}';

/// Returns true if `c` belongs to the hyphen class.
#[inline]
pub fn is_hyphen(c: char) -> bool {
    HYPHENS.contains(&c)
}

/// Returns true if `c` separates tokens (any Unicode whitespace, plus BOM).
#[inline]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Returns true if `c` has distinct lowercase and uppercase forms.
#[inline]
pub fn has_case(c: char) -> bool {
    !c.to_lowercase().eq(c.to_uppercase())
}

/// Lowercase, accent-stripped form of `s`. Hyphens and whitespace are kept.
pub fn remove_accents(s: &str) -> String {
    FoldedText::new(s).text
}

/// [`remove_accents`] with every hyphen-class character removed.
pub fn normalize_string(s: &str) -> String {
    remove_accents(s).chars().filter(|&c| !is_hyphen(c)).collect()
}

/// [`remove_accents`] with each run of hyphen-class characters replaced by
/// [`DELOCALIZED_HYPHEN`].
pub fn delocalize_hyphens(s: &str) -> String {
    let folded = remove_accents(s);
    let mut out = String::with_capacity(folded.len());
    let mut in_run = false;
    for c in folded.chars() {
        if is_hyphen(c) {
            if !in_run {
                out.push(DELOCALIZED_HYPHEN);
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Accent-stripped, lowercased text that remembers where each of its chars
/// came from in the source string.
#[derive(Debug, Clone)]
pub struct FoldedText {
    text: String,
    /// Byte offset in `text` of each folded char.
    starts: Vec<usize>,
    /// Byte range in the source of the char that produced each folded char.
    origins: Vec<Range<usize>>,
    source_len: usize,
}

impl FoldedText {
    /// Folds `source` char by char.
    ///
    /// Decomposition is per char, so marks outside U+0300..U+036F keep their
    /// source order instead of canonical order.
    pub fn new(source: &str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut starts = Vec::with_capacity(source.len());
        let mut origins = Vec::with_capacity(source.len());

        for (offset, ch) in source.char_indices() {
            let origin = offset..offset + ch.len_utf8();
            decompose_canonical(ch, |part| {
                if COMBINING_MARKS.contains(&part) {
                    return;
                }
                for lower in part.to_lowercase() {
                    starts.push(text.len());
                    origins.push(origin.clone());
                    text.push(lower);
                }
            });
        }

        Self {
            text,
            starts,
            origins,
            source_len: source.len(),
        }
    }

    /// The folded text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of chars in the folded text.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.starts.len()
    }

    /// Maps a byte range of the folded text to the source byte range it was
    /// derived from, together with the folded char count of the range.
    ///
    /// The source range runs up to the next char that produced folded text,
    /// so stripped combining marks stay with their base letter.
    ///
    /// Returns `None` for empty ranges or ranges that do not start on a char
    /// boundary of the folded text.
    pub fn source_range(&self, folded: Range<usize>) -> Option<(Range<usize>, usize)> {
        if folded.start >= folded.end {
            return None;
        }
        let first = self.starts.binary_search(&folded.start).ok()?;
        // `first` is a valid index, so at least one start is < folded.end.
        let last = self.starts.partition_point(|&s| s < folded.end) - 1;
        let start = self.origins.get(first)?.start;
        let last_end = self.origins.get(last)?.end;
        let end = self
            .origins
            .get(last + 1)
            .map_or(self.source_len, |next| next.start)
            .max(last_end);
        Some((start..end, last + 1 - first))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_accents_folds_case() {
        assert_eq!(remove_accents("BRÛLÉE"), "brulee");
        assert_eq!(remove_accents("Ça Va"), "ca va");
    }

    #[test]
    fn test_remove_accents_decomposed_input() {
        // "e" followed by a combining acute accent
        assert_eq!(remove_accents("Cafe\u{0301}"), "cafe");
    }

    #[test]
    fn test_remove_accents_keeps_hyphens() {
        assert_eq!(remove_accents("Wi-Fi"), "wi-fi");
    }

    #[test]
    fn test_remove_accents_non_latin_case() {
        assert_eq!(remove_accents("ΑΒΓ"), "αβγ");
        assert_eq!(remove_accents("ПРИВЕТ"), "привет");
    }

    #[test]
    fn test_normalize_string_strips_hyphens() {
        assert_eq!(normalize_string("Wi-Fi"), "wifi");
        assert_eq!(normalize_string("a\u{2014}b~c\u{FF0D}d"), "abcd");
    }

    #[test]
    fn test_normalize_string_only_marks() {
        assert_eq!(normalize_string("\u{0301}\u{0302}"), "");
    }

    #[test]
    fn test_delocalize_hyphens_collapses_runs() {
        assert_eq!(delocalize_hyphens("Wi\u{2013}\u{2013}Fi"), "wi-fi");
        assert_eq!(delocalize_hyphens("x~y"), "x-y");
        assert_eq!(delocalize_hyphens("plain"), "plain");
    }

    #[test]
    fn test_has_case() {
        assert!(has_case('a'));
        assert!(has_case('Ж'));
        assert!(!has_case('一'));
        assert!(!has_case('3'));
    }

    #[test]
    fn test_is_separator() {
        assert!(is_separator(' '));
        assert!(is_separator('\u{00A0}'));
        assert!(is_separator('\n'));
        assert!(is_separator('\u{FEFF}'));
        assert!(!is_separator('-'));
    }

    #[test]
    fn test_folded_source_range_maps_accents() {
        let source = "Brûlée";
        let folded = FoldedText::new(source);
        assert_eq!(folded.as_str(), "brulee");
        // "ule" in the folded text
        let (range, len) = folded.source_range(2..5).unwrap();
        assert_eq!(&source[range], "ûlé");
        assert_eq!(len, 3);
    }

    #[test]
    fn test_folded_source_range_rejects_empty() {
        let folded = FoldedText::new("abc");
        assert!(folded.source_range(1..1).is_none());
    }

    #[test]
    fn test_folded_source_range_includes_trailing_marks() {
        let source = "Cafe\u{0301}s";
        let folded = FoldedText::new(source);
        let (range, len) = folded.source_range(0..4).unwrap();
        assert_eq!(&source[range], "Cafe\u{0301}");
        assert_eq!(len, 4);

        let source = "Cafe\u{0301}\u{0302}";
        let folded = FoldedText::new(source);
        let (range, _) = folded.source_range(3..4).unwrap();
        assert_eq!(&source[range], "e\u{0301}\u{0302}");
    }

    #[test]
    fn test_folded_char_len_skips_marks() {
        let folded = FoldedText::new("e\u{0301}a");
        assert_eq!(folded.char_len(), 2);
        let (range, _) = folded.source_range(1..2).unwrap();
        assert_eq!(range, 3..4);
    }
}
