//! Configuration loading
//!
//! TOML file with `[markup]`, `[cache]` and `[logging]` sections. Every field
//! has a default, so an empty or partial file is valid.

use crate::cache::CacheConfig;
use crate::error::{HighlightError, Result};
use crate::markup::MarkupStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File names searched, in order, when no explicit path is given.
const CONFIG_CANDIDATES: &[&str] = &[
    ".querymark.toml",
    "querymark.toml",
    ".config/querymark.toml",
];

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HighlightConfig {
    /// How bold spans are rendered
    #[serde(default)]
    pub markup: MarkupStyle,

    /// Result memoization
    #[serde(default)]
    pub cache: CacheConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Where the configuration was read from, if anywhere
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl HighlightConfig {
    /// Load configuration from `path`, or from the first standard location
    /// that exists, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let Some(config_path) = config_path else {
            debug!("no config file found, using defaults");
            return Ok(Self::default());
        };

        let mut config = Self::from_file(&config_path)?;
        config.path = Some(config_path);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| HighlightError::Config(format!("Failed to parse config: {e}")))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HighlightError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "loading config");
        Self::from_toml(&content)
    }
}

fn find_config_file() -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}
