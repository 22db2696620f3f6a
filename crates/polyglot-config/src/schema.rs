//! Configuration schema definitions using serde.

use indexmap::IndexMap;
use polyglot_common::LoggingConfig;
use polyglot_i18n::{MemoryLocaleAttribute, MessageTree, TranslatorBuilder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Main configuration structure for Polyglot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale selection.
    pub locale: LocaleConfig,
    /// Remote catalog source.
    pub remote: RemoteConfig,
    /// Logging configuration.
    pub logging: LoggingSettings,
    /// Catalogs available without fetching, keyed by locale code.
    pub messages: IndexMap<String, MessageTree>,
}

/// Locale selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Locale active at startup.
    pub default_locale: String,
    /// Locale consulted when the active one has no catalog.
    pub fallback_locale: String,
}

/// Remote catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Endpoint serving catalogs as JSON. Remote loading is disabled when unset.
    pub translation_url: Option<String>,
    /// Query parameter carrying the locale code.
    pub lang_query_param: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level filter directive.
    pub level: String,
    /// Whether to emit JSON lines.
    pub json_format: bool,
}

impl LoggingSettings {
    /// Convert into the logging setup used by `polyglot-common`.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            json_format: self.json_format,
            ..LoggingConfig::default()
        }
    }
}

impl Config {
    /// Translator builder seeded from this configuration.
    ///
    /// The active locale starts at `locale.default_locale`.
    pub fn translator_builder(&self) -> TranslatorBuilder {
        let mut builder = TranslatorBuilder::new()
            .messages(self.messages.clone())
            .fallback_locale(self.locale.fallback_locale.clone())
            .lang_query_param(self.remote.lang_query_param.clone())
            .timeout(Duration::from_secs(self.remote.timeout_secs))
            .locale_attribute(Arc::new(MemoryLocaleAttribute::with_locale(
                self.locale.default_locale.clone(),
            )));

        if let Some(url) = &self.remote.translation_url {
            builder = builder.translation_url(url.clone());
        }
        builder
    }
}
