//! Error types for catalog loading and locale switching

use polyglot_common::PolyglotError;
use thiserror::Error;

/// Errors that can occur while loading catalogs or switching locales.
///
/// Lookup misses are not errors: a missing key or an unmatched plural bucket
/// always degrades to a displayable fallback string.
#[derive(Error, Debug)]
pub enum I18nError {
    /// The requested locale has no catalog in the store
    #[error(
        "Translations for language {locale} are not loaded yet. Load them with `load_translations(\"{locale}\")` first."
    )]
    LocaleNotLoaded {
        /// Locale code that was requested
        locale: String,
    },

    /// The catalog source answered with a non-success status
    #[error("Error {status}: {reason}")]
    CatalogFetchFailed {
        /// HTTP status code
        status: u16,
        /// Status reason phrase
        reason: String,
    },

    /// The catalog source could not be reached
    #[error("Network error: {message}")]
    Network {
        /// Human readable description
        message: String,
        /// Underlying transport error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The fetched document is not a valid message tree
    #[error("Invalid catalog document: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// The configured catalog URL is malformed
    #[error("Invalid catalog URL '{url}': {source}")]
    InvalidUrl {
        /// URL as configured
        url: String,
        /// Parser failure
        #[source]
        source: url::ParseError,
    },
}

impl I18nError {
    /// Create a locale-not-loaded error
    pub fn locale_not_loaded(locale: impl Into<String>) -> Self {
        Self::LocaleNotLoaded {
            locale: locale.into(),
        }
    }

    /// Create a network error wrapping its transport cause
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<I18nError> for PolyglotError {
    fn from(err: I18nError) -> Self {
        let locale = match &err {
            I18nError::LocaleNotLoaded { locale } => Some(locale.clone()),
            _ => None,
        };
        Self::Localization {
            message: err.to_string(),
            locale,
            source: Some(Box::new(err)),
        }
    }
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
