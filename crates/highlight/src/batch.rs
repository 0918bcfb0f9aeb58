//! Highlighting many descriptions against one query.

use crate::highlighter::{highlight, HighlightSpan};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Highlights every description for `query`, preserving input order.
///
/// With the `parallel` feature enabled the descriptions are processed on the
/// rayon thread pool.
pub fn highlight_all<S>(descriptions: &[S], query: &str) -> Vec<Vec<HighlightSpan>>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        descriptions
            .par_iter()
            .map(|d| highlight(d.as_ref(), query))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        descriptions
            .iter()
            .map(|d| highlight(d.as_ref(), query))
            .collect()
    }
}
