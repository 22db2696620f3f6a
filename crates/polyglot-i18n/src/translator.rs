//! Translator context object
//!
//! Owns the loaded catalogs together with the active and fallback locale,
//! and exposes the two lookup operations used by rendering code:
//! [`Translator::translate`] and [`Translator::translate_countable`].
//! Lookups never fail; misses degrade to the key itself and are reported
//! through `tracing`.

use crate::args::TranslationArgs;
use crate::choice;
use crate::error::{I18nError, I18nResult};
use crate::fetch::{
    CatalogFetcher, CatalogRequest, HttpCatalogFetcher, DEFAULT_LANG_QUERY_PARAM, DEFAULT_TIMEOUT,
};
use crate::interpolation::substitute;
use crate::locale::{LocaleAttribute, MemoryLocaleAttribute, DEFAULT_LOCALE};
use crate::message::MessageTree;
use crate::resolver::{resolve, Resolution};
use crate::store::CatalogStore;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Remote catalog endpoint and the fetcher used to reach it
struct RemoteSource {
    translation_url: String,
    lang_query_param: String,
    fetcher: Arc<dyn CatalogFetcher>,
}

impl RemoteSource {
    fn request(&self, locale: &str) -> I18nResult<CatalogRequest> {
        CatalogRequest::new(&self.translation_url, &self.lang_query_param, locale)
    }
}

/// Resolves keys into display strings against the loaded catalogs
pub struct Translator {
    store: CatalogStore,
    locale: String,
    fallback_locale: String,
    remote: Option<RemoteSource>,
    attribute: Arc<dyn LocaleAttribute>,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale)
            .field("fallback_locale", &self.fallback_locale)
            .field("loaded_locales", &self.store.locales())
            .field(
                "translation_url",
                &self.remote.as_ref().map(|r| r.translation_url.as_str()),
            )
            .finish_non_exhaustive()
    }
}

impl Translator {
    /// Start building a translator
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::new()
    }

    /// Resolve `key` and substitute its `{name}` placeholders.
    ///
    /// Multi-word keys without a catalog entry, and path keys that do not
    /// resolve, yield the key itself (still substituted).
    pub fn translate(&self, key: &str, args: &TranslationArgs) -> String {
        substitute(self.lookup(key), args)
    }

    /// Resolve `key`, substitute placeholders, then pick the phrase variant
    /// for `count`.
    ///
    /// Substitution runs on the whole string before it is split into
    /// variants. When no variant matches, the whole substituted string is
    /// returned.
    pub fn translate_countable(&self, key: &str, count: i64, args: &TranslationArgs) -> String {
        let translation = self.translate(key, args);
        trace!("Choosing variant for count {} in '{}'", count, translation);
        choice::choose(&translation, count)
    }

    /// Raw catalog text for `key`, or the key itself
    fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        let Some((locale, catalog)) = self.lookup_catalog() else {
            warn!("Translation for {} not found", key);
            return key;
        };

        match resolve(key, catalog) {
            Resolution::Found(text) => text,
            Resolution::KeyAsText => {
                debug!("Phrase '{}' has no entry in locale {}, using it as text", key, locale);
                key
            }
            Resolution::NotFound => {
                warn!("Translation for {} not found in locale {}", key, locale);
                key
            }
        }
    }

    /// Catalog used for lookups: the active locale's, or else the fallback's
    fn lookup_catalog(&self) -> Option<(&str, &MessageTree)> {
        [self.locale.as_str(), self.fallback_locale.as_str()]
            .into_iter()
            .find_map(|locale| self.store.catalog(locale).map(|catalog| (locale, catalog)))
    }

    /// Store `tree` as the complete catalog for `locale`, replacing any
    /// previous one. The active locale is not changed.
    pub fn set_catalog(
        &mut self,
        locale: impl Into<String>,
        tree: MessageTree,
    ) -> Option<MessageTree> {
        self.store.set_catalog(locale, tree)
    }

    /// Whether a catalog is loaded for `locale`
    pub fn has_catalog(&self, locale: &str) -> bool {
        self.store.has_catalog(locale)
    }

    /// Make `locale` the active locale and persist the choice.
    ///
    /// Fails with [`I18nError::LocaleNotLoaded`] when no catalog is loaded
    /// for it, leaving the active locale unchanged.
    pub fn set_active_locale(&mut self, locale: &str) -> I18nResult<()> {
        if !self.store.has_catalog(locale) {
            warn!("Refusing to switch to locale {} without a loaded catalog", locale);
            return Err(I18nError::locale_not_loaded(locale));
        }

        self.locale = locale.to_string();
        self.attribute.set(locale);
        info!("Active locale set to {}", locale);
        Ok(())
    }

    /// Change the fallback locale. No catalog needs to exist for it.
    pub fn set_fallback_locale(&mut self, locale: impl Into<String>) {
        self.fallback_locale = locale.into();
    }

    /// Active locale code
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Fallback locale code
    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Loaded locale codes, sorted
    pub fn loaded_locales(&self) -> Vec<&str> {
        self.store.locales()
    }

    /// Whether catalogs for `locale` need fetching
    fn needs_fetch(&self, locale: &str, force: bool) -> Option<&RemoteSource> {
        let Some(remote) = self.remote.as_ref() else {
            debug!("No translation URL configured, skipping load of {}", locale);
            return None;
        };
        if self.store.has_catalog(locale) && !force {
            debug!("Locale {} already loaded", locale);
            return None;
        }
        Some(remote)
    }

    fn store_and_activate(&mut self, locale: &str, tree: MessageTree) -> I18nResult<()> {
        self.store.set_catalog(locale, tree);
        self.set_active_locale(locale)
    }

    /// Fetch the catalog for `locale` without blocking and make it active.
    ///
    /// Does nothing when no translation URL is configured, or when the
    /// locale is already loaded and `force` is false.
    pub async fn load_translations(&mut self, locale: &str, force: bool) -> I18nResult<()> {
        let Some(remote) = self.needs_fetch(locale, force) else {
            return Ok(());
        };

        let request = remote.request(locale)?;
        let tree = remote.fetcher.fetch(&request).await?;
        self.store_and_activate(locale, tree)
    }

    /// Blocking counterpart of [`Translator::load_translations`]
    pub fn load_translations_blocking(&mut self, locale: &str, force: bool) -> I18nResult<()> {
        let Some(remote) = self.needs_fetch(locale, force) else {
            return Ok(());
        };

        let request = remote.request(locale)?;
        let tree = remote.fetcher.fetch_blocking(&request)?;
        self.store_and_activate(locale, tree)
    }

    /// Switch to `locale`, fetching its catalog first if needed
    pub async fn set_locale(&mut self, locale: &str) -> I18nResult<()> {
        self.load_translations(locale, false).await?;
        self.set_active_locale(locale)
    }

    /// Switch to `locale`, blocking on a catalog fetch if needed
    pub fn set_locale_immediate(&mut self, locale: &str) -> I18nResult<()> {
        self.load_translations_blocking(locale, false)?;
        self.set_active_locale(locale)
    }
}

/// Builder for [`Translator`]
pub struct TranslatorBuilder {
    catalogs: CatalogStore,
    fallback_locale: String,
    translation_url: Option<String>,
    lang_query_param: String,
    timeout: Duration,
    fetcher: Option<Arc<dyn CatalogFetcher>>,
    attribute: Option<Arc<dyn LocaleAttribute>>,
}

impl Default for TranslatorBuilder {
    fn default() -> Self {
        Self {
            catalogs: CatalogStore::new(),
            fallback_locale: DEFAULT_LOCALE.to_string(),
            translation_url: None,
            lang_query_param: DEFAULT_LANG_QUERY_PARAM.to_string(),
            timeout: DEFAULT_TIMEOUT,
            fetcher: None,
            attribute: None,
        }
    }
}

impl TranslatorBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a catalog
    #[must_use]
    pub fn catalog(mut self, locale: impl Into<String>, tree: MessageTree) -> Self {
        self.catalogs.set_catalog(locale, tree);
        self
    }

    /// Preload several catalogs
    #[must_use]
    pub fn messages<I, K>(mut self, catalogs: I) -> Self
    where
        I: IntoIterator<Item = (K, MessageTree)>,
        K: Into<String>,
    {
        self.catalogs.extend(catalogs);
        self
    }

    /// Locale consulted when the active one has no catalog
    #[must_use]
    pub fn fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = locale.into();
        self
    }

    /// Remote endpoint serving catalogs as JSON
    #[must_use]
    pub fn translation_url(mut self, url: impl Into<String>) -> Self {
        self.translation_url = Some(url.into());
        self
    }

    /// Query parameter carrying the locale code
    #[must_use]
    pub fn lang_query_param(mut self, name: impl Into<String>) -> Self {
        self.lang_query_param = name.into();
        self
    }

    /// Request timeout for the default HTTP fetcher
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom catalog fetcher instead of HTTP
    #[must_use]
    pub fn fetcher(mut self, fetcher: Arc<dyn CatalogFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Where the active locale is mirrored
    #[must_use]
    pub fn locale_attribute(mut self, attribute: Arc<dyn LocaleAttribute>) -> Self {
        self.attribute = Some(attribute);
        self
    }

    /// Build the translator. The initial active locale is read from the
    /// locale attribute, defaulting to `en`.
    pub fn build(self) -> I18nResult<Translator> {
        let remote = match self.translation_url {
            Some(translation_url) => {
                let fetcher = match self.fetcher {
                    Some(fetcher) => fetcher,
                    None => Arc::new(HttpCatalogFetcher::new(self.timeout)?),
                };
                Some(RemoteSource {
                    translation_url,
                    lang_query_param: self.lang_query_param,
                    fetcher,
                })
            }
            None => None,
        };

        let attribute = self
            .attribute
            .unwrap_or_else(|| Arc::new(MemoryLocaleAttribute::new()));
        let locale = attribute.current();

        debug!(
            "Building translator: locale {}, fallback {}, {} preloaded catalogs",
            locale,
            self.fallback_locale,
            self.catalogs.len()
        );

        Ok(Translator {
            store: self.catalogs,
            locale,
            fallback_locale: self.fallback_locale,
            remote,
            attribute,
        })
    }

    /// Build the translator and fetch the catalog for its initial locale
    pub async fn install(self) -> I18nResult<Translator> {
        let mut translator = self.build()?;
        let locale = translator.locale.clone();
        translator.load_translations(&locale, false).await?;
        Ok(translator)
    }

    /// Blocking counterpart of [`TranslatorBuilder::install`]
    pub fn install_blocking(self) -> I18nResult<Translator> {
        let mut translator = self.build()?;
        let locale = translator.locale.clone();
        translator.load_translations_blocking(&locale, false)?;
        Ok(translator)
    }
}
