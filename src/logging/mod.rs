// Logging module for structured logging using the tracing crate

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_LEVEL;
use crate::error::{PressError, Result};

/// Log output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `htmlpress=debug` (default: info)
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format (default: text)
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl LoggingConfig {
    /// Build the event filter; `RUST_LOG` wins over the configured level
    pub fn env_filter(&self) -> Result<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.level)
            .map_err(|e| PressError::Config(format!("invalid log level '{}': {}", self.level, e)))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Initialize the tracing subscriber for structured logging
///
/// Events go to stderr so stdout stays free for compressed output.
///
/// # Errors
///
/// Returns an error if the level directive is invalid or a global subscriber
/// is already installed.
pub fn init_subscriber(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| PressError::Logging(e.to_string()))
}
