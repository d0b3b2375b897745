//! Builder for configuring [`FlickrPhotos`] instances

use std::sync::Arc;
use std::time::Duration;

use super::FlickrPhotos;
use crate::Result;
use crate::cache::{CacheConfig, RecordCache};
use crate::config::Config;
use crate::fetch::{DEFAULT_REQUEST_TIMEOUT, FetchGroup};
use crate::render::Renderer;
use crate::transport::{DEFAULT_BASE_URL, HttpTransport, PhotoTransport};
use crate::types::{MarkupStyle, MissingSizePolicy};

/// Builder for configuring [`FlickrPhotos`] instances.
pub struct FlickrPhotosBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    request_timeout: Duration,
    cache_config: CacheConfig,
    record_cache: Option<Arc<RecordCache>>,
    transport: Option<Arc<dyn PhotoTransport>>,
    markup: MarkupStyle,
    missing_size: MissingSizePolicy,
}

impl FlickrPhotosBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            cache_config: CacheConfig::default(),
            record_cache: None,
            transport: None,
            markup: MarkupStyle::default(),
            missing_size: MissingSizePolicy::default(),
        }
    }

    /// Start from site configuration (API key, endpoint, timeout, markup,
    /// missing-size policy, cache bounds).
    pub fn from_config(config: &Config) -> Self {
        let flickr = &config.flickr;
        Self {
            api_key: flickr.api_key(),
            base_url: Some(flickr.base_url.clone()),
            request_timeout: flickr.request_timeout(),
            cache_config: CacheConfig::from(&config.cache),
            markup: flickr.markup,
            missing_size: flickr.missing_size,
            ..Self::new()
        }
    }

    /// Set the Flickr API key.
    ///
    /// Building without a key succeeds; every render then fails with
    /// [`FlickrError::MissingApiKey`](crate::FlickrError::MissingApiKey).
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Send requests to a different REST endpoint (e.g. a wiremock server).
    ///
    /// Ignored when a custom [`transport`](Self::transport) is set.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Upper bound on each of the three API calls (default: 30s).
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Configure the record cache created at build time.
    ///
    /// Ignored when a shared cache is supplied via [`record_cache`](Self::record_cache).
    pub fn cache(mut self, config: CacheConfig) -> Self {
        self.cache_config = config;
        self
    }

    /// Use an existing (possibly shared or pre-seeded) record cache.
    pub fn record_cache(mut self, cache: Arc<RecordCache>) -> Self {
        self.record_cache = Some(cache);
        self
    }

    /// Use a custom transport instead of HTTP.
    pub fn transport(mut self, transport: Arc<dyn PhotoTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the markup style (default: [`MarkupStyle::Holder`]).
    pub fn markup(mut self, style: MarkupStyle) -> Self {
        self.markup = style;
        self
    }

    /// Set the policy for sizes missing from a cached record
    /// (default: [`MissingSizePolicy::Error`]).
    pub fn missing_size(mut self, policy: MissingSizePolicy) -> Self {
        self.missing_size = policy;
        self
    }

    /// Build the gateway.
    pub fn build(self) -> Result<FlickrPhotos> {
        let transport: Arc<dyn PhotoTransport> = match self.transport {
            Some(transport) => transport,
            None => {
                let base_url = self
                    .base_url
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
                Arc::new(HttpTransport::with_base_url(base_url, self.request_timeout)?)
            }
        };

        let cache = self
            .record_cache
            .unwrap_or_else(|| Arc::new(RecordCache::new(&self.cache_config)));

        Ok(FlickrPhotos::new(
            FetchGroup::new(transport).request_timeout(self.request_timeout),
            cache,
            Renderer::new(self.markup, self.missing_size),
            self.api_key,
        ))
    }
}

impl Default for FlickrPhotosBuilder {
    fn default() -> Self {
        Self::new()
    }
}
