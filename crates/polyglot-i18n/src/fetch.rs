//! Catalog acquisition from a remote source

use crate::error::{I18nError, I18nResult};
use crate::message::MessageTree;
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use url::Url;

/// Query parameter carrying the locale code when none is configured
pub const DEFAULT_LANG_QUERY_PARAM: &str = "lang";

/// Request timeout when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A single catalog request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    /// Locale being requested
    pub locale: String,
    /// Fully built request URL
    pub url: Url,
}

impl CatalogRequest {
    /// Build the request for `locale` by setting `query_param` on `base_url`.
    ///
    /// An existing value for the same parameter is replaced; other query
    /// parameters are kept.
    pub fn new(base_url: &str, query_param: &str, locale: &str) -> I18nResult<Self> {
        let mut url = Url::parse(base_url).map_err(|source| I18nError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;

        let retained: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .filter(|(k, _)| k != query_param)
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(retained)
            .append_pair(query_param, locale);

        Ok(Self {
            locale: locale.to_string(),
            url,
        })
    }
}

/// Source of message catalogs, offering both a non-blocking and a blocking
/// acquisition path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// Fetch a catalog without blocking the calling task
    async fn fetch(&self, request: &CatalogRequest) -> I18nResult<MessageTree>;

    /// Fetch a catalog, blocking the current thread until it arrives
    fn fetch_blocking(&self, request: &CatalogRequest) -> I18nResult<MessageTree>;
}

/// HTTP catalog source expecting a JSON object in the response body
#[derive(Debug, Clone)]
pub struct HttpCatalogFetcher {
    client: reqwest::Client,
    // Built on first blocking fetch; constructing it inside a runtime panics
    blocking: OnceCell<reqwest::blocking::Client>,
    timeout: Duration,
}

impl HttpCatalogFetcher {
    /// Create a fetcher with the given request timeout
    pub fn new(timeout: Duration) -> I18nResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| I18nError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            client,
            blocking: OnceCell::new(),
            timeout,
        })
    }

    fn blocking_client(&self) -> I18nResult<&reqwest::blocking::Client> {
        self.blocking.get_or_try_init(|| {
            debug!("Creating blocking HTTP client");
            reqwest::blocking::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| I18nError::network_with_source("Failed to create HTTP client", e))
        })
    }

    fn check_status(status: StatusCode) -> I18nResult<()> {
        if status.is_success() {
            return Ok(());
        }
        error!("Catalog request failed with status {}", status);
        Err(I18nError::CatalogFetchFailed {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        })
    }
}

#[async_trait]
impl CatalogFetcher for HttpCatalogFetcher {
    #[instrument(skip(self, request), fields(locale = %request.locale))]
    async fn fetch(&self, request: &CatalogRequest) -> I18nResult<MessageTree> {
        debug!("Fetching catalog from {}", request.url);

        let response = self
            .client
            .get(request.url.clone())
            .send()
            .await
            .map_err(|e| I18nError::network_with_source("Catalog request failed", e))?;
        Self::check_status(response.status())?;

        let body = response
            .text()
            .await
            .map_err(|e| I18nError::network_with_source("Failed to read catalog body", e))?;
        let tree = MessageTree::from_json_str(&body)?;

        info!("Fetched catalog for locale {}", request.locale);
        Ok(tree)
    }

    /// Must not be called from inside an async runtime: the blocking client
    /// runs its own.
    fn fetch_blocking(&self, request: &CatalogRequest) -> I18nResult<MessageTree> {
        debug!("Fetching catalog (blocking) from {}", request.url);

        let response = self
            .blocking_client()?
            .get(request.url.clone())
            .send()
            .map_err(|e| I18nError::network_with_source("Catalog request failed", e))?;
        Self::check_status(response.status())?;

        let body = response
            .text()
            .map_err(|e| I18nError::network_with_source("Failed to read catalog body", e))?;
        let tree = MessageTree::from_json_str(&body)?;

        info!("Fetched catalog for locale {}", request.locale);
        Ok(tree)
    }
}
