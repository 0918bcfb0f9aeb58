//! Logging setup for querymark tools
//!
//! - Structured logging with tracing
//! - `RUST_LOG` overrides the configured level
//! - Compact text or JSON lines on stderr
//! - Operation timing

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Set once the global subscriber is installed
static INITIALIZED: OnceCell<LogConfig> = OnceCell::new();

/// Initialize logging with defaults
pub fn init() -> anyhow::Result<()> {
    init_with_config(LogConfig::default())
}

/// Initialize with custom configuration
///
/// Calling this more than once is a no-op; the first configuration wins.
pub fn init_with_config(config: LogConfig) -> anyhow::Result<()> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", config.level, e))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target)
                    .compact(),
            )
            .try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!(
        level = %config.level,
        json = config.json,
        version = env!("CARGO_PKG_VERSION"),
        "Logging initialized"
    );
    let _ = INITIALIZED.set(config);

    Ok(())
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
    pub show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            show_target: false,
        }
    }
}

impl LogConfig {
    /// Config at the given level, text output
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Self::default()
        }
    }
}

/// Timer for measuring operation duration
pub struct Timer {
    name: String,
    start: Instant,
}

impl Timer {
    /// Start a new timer
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }

    /// Stop the timer and log the duration
    pub fn stop(self) -> Duration {
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = %self.name,
            duration_ms = duration.as_millis(),
            "Timer completed"
        );
        duration
    }
}
