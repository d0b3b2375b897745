//! reqwest-backed transport for the Flickr REST endpoint.
//!
//! See: <https://www.flickr.com/services/api/request.rest.html>

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{ApiMethod, PhotoTransport};
use crate::{FlickrError, Result, telemetry};

/// Default Flickr REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.flickr.com/services/rest/";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport for the Flickr REST API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport against the public Flickr endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a transport with a custom base URL (for testing with wiremock)
    /// and per-request timeout.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FlickrError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, method: ApiMethod, api_key: &str, photo_id: &str) -> Result<String> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&method.params(api_key, photo_id))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

#[async_trait]
impl PhotoTransport for HttpTransport {
    fn name(&self) -> &str {
        "http"
    }

    async fn call(&self, method: ApiMethod, api_key: &str, photo_id: &str) -> Result<String> {
        debug!(%method, photo_id, "dispatching Flickr request");
        let start = Instant::now();

        let result = self.send(method, api_key, photo_id).await;

        let status = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!(telemetry::REQUESTS_TOTAL,
            "method" => method.as_str(), "status" => status)
        .increment(1);
        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS, "method" => method.as_str())
            .record(start.elapsed().as_secs_f64());

        result
    }
}
