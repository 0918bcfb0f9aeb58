//! Query-to-text highlighting for search results.
//!
//! Given a result description and the free-text query that found it, this
//! crate decides which parts of the description to emphasize:
//! - Case- and accent-insensitive matching
//! - Query words matched in any order, anywhere in the description
//! - Hyphen-tolerant matching, including hyphenated compounds
//! - Per-character matching for unspaced, caseless scripts (e.g. CJK)
//! - Memoization and batch helpers
//!
//! # Example
//!
//! ```
//! use querymark_highlight::{highlight, HighlightSpan};
//!
//! let spans = highlight("Turn on Wi-Fi", "onwifi");
//! assert_eq!(spans, vec![
//!     HighlightSpan::plain("Turn "),
//!     HighlightSpan::bold("on"),
//!     HighlightSpan::plain(" "),
//!     HighlightSpan::bold("Wi-Fi"),
//! ]);
//! ```

mod error;
mod highlighter;
mod lcs;
mod merge;
mod query_tokens;

pub mod batch;
pub mod cache;
pub mod config;
pub mod markup;
pub mod normalize;
pub mod tokenize;

#[cfg(feature = "wasm")]
mod wasm;

pub use batch::highlight_all;
pub use cache::{CacheConfig, HighlightCache};
pub use config::HighlightConfig;
pub use error::{HighlightError, Result};
pub use highlighter::{highlight, HighlightSpan};
pub use lcs::longest_common_substrings;
pub use markup::{render, MarkupStyle};
pub use merge::merge_compound_tokens;
pub use query_tokens::generate_query_tokens;

/// Encodes spans as a JSON array of `{"text": ..., "bold": ...}` objects.
pub fn spans_to_json(spans: &[HighlightSpan]) -> Result<String> {
    Ok(serde_json::to_string(spans)?)
}
