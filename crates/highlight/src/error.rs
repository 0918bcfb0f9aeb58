//! Error types for the highlight crate.
//!
//! Highlighting itself never fails; these cover the configuration and
//! serialization helpers around it.

use thiserror::Error;

/// Result type alias for fallible highlight helpers.
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Errors that can occur outside the highlighting engine proper.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON encoding error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
