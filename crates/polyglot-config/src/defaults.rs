//! Default configuration values.

use crate::schema::*;
use indexmap::IndexMap;
use polyglot_i18n::{DEFAULT_LANG_QUERY_PARAM, DEFAULT_LOCALE, DEFAULT_TIMEOUT};

/// Default remote request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = DEFAULT_TIMEOUT.as_secs();

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: LocaleConfig::default(),
            remote: RemoteConfig::default(),
            logging: LoggingSettings::default(),
            messages: IndexMap::new(),
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            fallback_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            translation_url: None,
            lang_query_param: DEFAULT_LANG_QUERY_PARAM.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
        }
    }
}
