//! Memoization of highlight results.
//!
//! [`highlight`](crate::highlight) is a pure function of its two inputs, so
//! results can be reused whenever the same description is rendered again for
//! the same query (e.g. re-rendering a result list while the user pauses).
//!
//! # Example
//!
//! ```
//! use querymark_highlight::cache::{CacheConfig, HighlightCache};
//!
//! let cache = HighlightCache::new(CacheConfig::default());
//! let first = cache.highlight("Turn on Wi-Fi", "wifi");
//! let second = cache.highlight("Turn on Wi-Fi", "wifi");
//! assert_eq!(first, second);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::highlighter::{highlight, HighlightSpan};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::trace;

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether results are memoized at all
    pub enabled: bool,
    /// Maximum number of cached entries (0 = unlimited)
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: 4096,
        }
    }
}

/// Hit and miss counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that ran the highlighter
    pub misses: u64,
    /// Entries currently held
    pub entries: usize,
}

type Key = (String, String);

/// Thread-safe memo of `(description, query)` → spans.
///
/// When the entry limit is reached the whole map is flushed; highlight
/// results are cheap to recompute and the working set is usually one query.
pub struct HighlightCache {
    config: CacheConfig,
    entries: RwLock<HashMap<Key, Arc<Vec<HighlightSpan>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl HighlightCache {
    /// Create a new cache instance
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Highlight through the cache.
    pub fn highlight(&self, description: &str, query: &str) -> Arc<Vec<HighlightSpan>> {
        if !self.config.enabled {
            self.misses.fetch_add(1, Ordering::Relaxed);
            return Arc::new(highlight(description, query));
        }

        let key = (description.to_string(), query.to_string());

        if let Ok(guard) = self.entries.read() {
            if let Some(spans) = guard.get(&key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                trace!(description, query, "highlight cache hit");
                return Arc::clone(spans);
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let spans = Arc::new(highlight(description, query));

        // Poisoned lock: return the result unmemoized.
        if let Ok(mut guard) = self.entries.write() {
            if self.config.max_entries > 0 && guard.len() >= self.config.max_entries {
                trace!(entries = guard.len(), "highlight cache flushed");
                guard.clear();
            }
            guard.insert(key, Arc::clone(&spans));
        }

        spans
    }

    /// Drop all cached entries
    pub fn clear(&self) {
        if let Ok(mut guard) = self.entries.write() {
            guard.clear();
        }
    }

    /// Current hit/miss counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.read().map(|g| g.len()).unwrap_or(0),
        }
    }
}

impl Default for HighlightCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_hit() {
        let cache = HighlightCache::default();
        let first = cache.highlight("Turn on Wi-Fi", "wif on");
        let second = cache.highlight("Turn on Wi-Fi", "wif on");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(
            cache.stats(),
            CacheStats { hits: 1, misses: 1, entries: 1 }
        );
    }

    #[test]
    fn test_cache_matches_direct_call() {
        let cache = HighlightCache::default();
        let cached = cache.highlight("Crème brûlée", "brulee");
        assert_eq!(*cached, highlight("Crème brûlée", "brulee"));
    }

    #[test]
    fn test_cache_distinguishes_queries() {
        let cache = HighlightCache::default();
        cache.highlight("Bluetooth", "blue");
        cache.highlight("Bluetooth", "tooth");
        assert_eq!(cache.stats().misses, 2);
        assert_eq!(cache.stats().entries, 2);
    }

    #[test]
    fn test_cache_flushes_at_limit() {
        let cache = HighlightCache::new(CacheConfig {
            enabled: true,
            max_entries: 2,
        });
        cache.highlight("a", "a");
        cache.highlight("b", "b");
        cache.highlight("c", "c");
        assert_eq!(cache.stats().entries, 1);
    }

    #[test]
    fn test_cache_disabled() {
        let cache = HighlightCache::new(CacheConfig {
            enabled: false,
            max_entries: 0,
        });
        cache.highlight("a", "a");
        cache.highlight("a", "a");
        let stats = cache.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.entries, 0);
    }

    #[test]
    fn test_cache_clear() {
        let cache = HighlightCache::default();
        cache.highlight("Display", "disp");
        cache.clear();
        assert_eq!(cache.stats().entries, 0);
    }
}
