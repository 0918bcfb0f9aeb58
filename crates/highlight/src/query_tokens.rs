//! Query tokens: the parts of each query segment found in the description.

use crate::lcs::longest_common_substrings;
use crate::merge::merge_compound_tokens;
use crate::normalize::normalize_string;
use crate::tokenize::split_segments;
use tracing::trace;

/// Builds the ordered, deduplicated list of normalized query tokens for
/// `query` against the whole of `description`, with adjacent tokens merged
/// across hyphenated compounds.
///
/// A segment longer than one char whose best matches are single chars
/// contributes nothing.
pub fn generate_query_tokens(description: &str, query: &str) -> Vec<String> {
    let normalized_description = normalize_string(description);
    let normalized_query = normalize_string(query);

    let mut tokens: Vec<String> = Vec::new();
    for segment in split_segments(&normalized_query) {
        let candidates = longest_common_substrings(segment, &normalized_description);
        let longest = candidates
            .iter()
            .map(|c| c.chars().count())
            .max()
            .unwrap_or(0);

        if longest == 1 && segment.chars().count() > 1 {
            trace!(segment, "dropping single-char matches");
            continue;
        }

        for candidate in candidates {
            if candidate.chars().count() == longest && !tokens.contains(&candidate) {
                tokens.push(candidate);
            }
        }
    }

    trace!(?tokens, "query tokens before merge");
    merge_compound_tokens(&tokens, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_per_segment() {
        assert_eq!(
            generate_query_tokens("Turn on Wi-Fi", "wif on"),
            vec!["wif", "on"]
        );
    }

    #[test]
    fn test_single_char_matches_dropped() {
        assert!(generate_query_tokens("search and assistant", "hi goog").is_empty());
    }

    #[test]
    fn test_single_char_segment_kept() {
        assert_eq!(generate_query_tokens("search and assistant", "a"), vec!["a"]);
    }

    #[test]
    fn test_duplicates_removed_in_first_seen_order() {
        assert_eq!(
            generate_query_tokens("network settings", "set net set"),
            vec!["set", "net"]
        );
    }

    #[test]
    fn test_segment_crossing_whitespace_splits() {
        assert_eq!(generate_query_tokens("Turn on Wi-Fi", "onwifi"), vec!["wifi"]);
    }

    #[test]
    fn test_adjacent_segments_merge_across_hyphen() {
        assert_eq!(generate_query_tokens("Turn on Wi-Fi", "wi fi"), vec!["wifi"]);
    }

    #[test]
    fn test_accented_query() {
        assert_eq!(generate_query_tokens("Crème brûlée", "BRULEE"), vec!["brulee"]);
    }

    #[test]
    fn test_empty_query() {
        assert!(generate_query_tokens("anything", "").is_empty());
    }
}
