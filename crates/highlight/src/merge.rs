//! Recombining query tokens into hyphenated compounds.

use crate::normalize::{delocalize_hyphens, normalize_string, DELOCALIZED_HYPHEN};
use tracing::trace;

/// Greedily joins adjacent `tokens` with the hyphen joiner while the joined
/// form occurs in the hyphen-delocalized `description`.
///
/// The merge runs left to right and never backtracks: once an extension
/// fails, the current compound is emitted and merging restarts at the token
/// that failed to attach. Emitted tokens are hyphen-stripped again.
pub fn merge_compound_tokens(tokens: &[String], description: &str) -> Vec<String> {
    let haystack = delocalize_hyphens(description);
    let mut merged: Vec<String> = Vec::with_capacity(tokens.len());

    let mut i = 0;
    while let Some(first) = tokens.get(i) {
        let mut prefix = first.clone();
        while let Some(next) = tokens.get(i + 1) {
            let candidate = format!("{prefix}{DELOCALIZED_HYPHEN}{next}");
            if !haystack.contains(&candidate) {
                break;
            }
            trace!(%candidate, "merged compound token");
            prefix = candidate;
            i += 1;
        }

        let token = normalize_string(&prefix);
        if !token.is_empty() && !merged.contains(&token) {
            merged.push(token);
        }
        i += 1;
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_merge_two_tokens() {
        assert_eq!(
            merge_compound_tokens(&owned(&["wi", "fi"]), "Turn on Wi-Fi"),
            vec!["wifi"]
        );
    }

    #[test]
    fn test_merge_with_other_dash() {
        assert_eq!(
            merge_compound_tokens(&owned(&["wi", "fi"]), "Turn on Wi\u{2013}Fi"),
            vec!["wifi"]
        );
    }

    #[test]
    fn test_merge_chain() {
        assert_eq!(
            merge_compound_tokens(&owned(&["x", "ray", "scan", "now"]), "X-Ray-Scan now"),
            vec!["xrayscan", "now"]
        );
    }

    #[test]
    fn test_no_merge_without_hyphen() {
        assert_eq!(
            merge_compound_tokens(&owned(&["wi", "fi"]), "wi fi"),
            vec!["wi", "fi"]
        );
    }

    #[test]
    fn test_merge_is_greedy_without_backtracking() {
        // "a-b" matches, "a-b-c" does not, so "c" starts fresh and then
        // "c-d" merges.
        assert_eq!(
            merge_compound_tokens(&owned(&["a", "b", "c", "d"]), "a-b b-c c-d"),
            vec!["ab", "cd"]
        );
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge_compound_tokens(&[], "anything").is_empty());
    }
}
