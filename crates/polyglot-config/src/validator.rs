//! Runtime validation of configuration values.

use crate::schema::Config;
use polyglot_common::{PolyglotError, Result};
use unic_langid::LanguageIdentifier;
use url::Url;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        Self::validate_locale(&config.locale.default_locale, "locale.default_locale")?;
        Self::validate_locale(&config.locale.fallback_locale, "locale.fallback_locale")?;
        for locale in config.messages.keys() {
            Self::validate_locale(locale, &format!("messages.{locale}"))?;
        }

        if config.remote.lang_query_param.trim().is_empty() {
            return Err(PolyglotError::validation_field(
                "Query parameter name cannot be empty",
                "remote.lang_query_param",
            ));
        }

        if config.remote.timeout_secs == 0 {
            return Err(PolyglotError::validation_field(
                "Timeout must be greater than 0",
                "remote.timeout_secs",
            ));
        }

        if let Some(url) = &config.remote.translation_url {
            Url::parse(url).map_err(|e| {
                PolyglotError::validation_field(
                    format!("Invalid translation URL '{url}': {e}"),
                    "remote.translation_url",
                )
            })?;
        }

        Ok(())
    }

    /// Check that `code` is a well-formed language identifier.
    pub fn validate_locale(code: &str, field: &str) -> Result<()> {
        code.parse::<LanguageIdentifier>().map(|_| ()).map_err(|e| {
            PolyglotError::validation_field(format!("Invalid locale code '{code}': {e}"), field)
        })
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyglot_i18n::MessageTree;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_bad_locale_code() {
        let mut config = Config::default();
        config.locale.fallback_locale = "not a locale!".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), Some("locale.fallback_locale"));
    }

    #[test]
    fn test_bad_catalog_locale() {
        let mut config = Config::default();
        config.messages.insert("en_US!".to_string(), MessageTree::node());
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), Some("messages.en_US!"));
    }

    #[test]
    fn test_empty_query_param() {
        let mut config = Config::default();
        config.remote.lang_query_param = "  ".to_string();
        assert_eq!(config.validate().unwrap_err().field(), Some("remote.lang_query_param"));
    }

    #[test]
    fn test_zero_timeout() {
        let mut config = Config::default();
        config.remote.timeout_secs = 0;
        assert_eq!(config.validate().unwrap_err().field(), Some("remote.timeout_secs"));
    }

    #[test]
    fn test_bad_url() {
        let mut config = Config::default();
        config.remote.translation_url = Some("::nope".to_string());
        assert_eq!(config.validate().unwrap_err().field(), Some("remote.translation_url"));

        config.remote.translation_url = Some("https://example.com/t".to_string());
        assert!(config.validate().is_ok());
    }
}
