//! Structured logging infrastructure for Polyglot

use crate::error::{PolyglotError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "polyglot_i18n=trace")
    pub level: String,
    /// Whether to emit one JSON object per event
    pub json_format: bool,
    /// Whether to enable pretty formatting with colors
    pub pretty_format: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
            pretty_format: false,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Build the environment filter, preferring `RUST_LOG` when it is set
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Events are written to stderr so that translated output on stdout stays
/// clean. Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let result = if config.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(config.include_targets)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else if config.pretty_format {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(config.include_targets)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(config.include_targets)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| PolyglotError::with_source("Failed to install tracing subscriber", e))
}
