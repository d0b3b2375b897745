//! Transport layer for Flickr REST calls.
//!
//! The fetch group only needs one primitive: call an API method for a photo
//! and hand back the raw response body. [`PhotoTransport`] is that seam.
//! [`HttpTransport`] talks to the real API over reqwest; tests substitute
//! in-memory transports that record dispatch order or inject failures.
//!
//! Transports report network problems only. A body carrying
//! `<rsp stat="fail">` is a successful transport call; interpreting the
//! upstream status is the parsers' job.

mod http;

pub use http::{DEFAULT_BASE_URL, HttpTransport};

use async_trait::async_trait;

use crate::Result;

/// The three read-only API methods the tag needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    /// `flickr.photos.getSizes`: available size variants.
    Sizes,
    /// `flickr.photos.getInfo`: title, description, page URL.
    Info,
    /// `flickr.photos.getExif`: EXIF tags.
    Exif,
}

impl ApiMethod {
    /// All methods, in dispatch order.
    pub const ALL: [ApiMethod; 3] = [ApiMethod::Sizes, ApiMethod::Info, ApiMethod::Exif];

    /// Flickr method name, as sent in the `method` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            ApiMethod::Sizes => "flickr.photos.getSizes",
            ApiMethod::Info => "flickr.photos.getInfo",
            ApiMethod::Exif => "flickr.photos.getExif",
        }
    }

    /// Query parameters for this method, in wire order.
    pub fn params<'a>(self, api_key: &'a str, photo_id: &'a str) -> [(&'static str, &'a str); 3] {
        [
            ("method", self.as_str()),
            ("api_key", api_key),
            ("photo_id", photo_id),
        ]
    }

    /// Query string for this method: `method=...&api_key=...&photo_id=...`.
    pub fn query(self, api_key: &str, photo_id: &str) -> String {
        self.params(api_key, photo_id)
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl std::fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Performs a single Flickr API call.
///
/// Implementations must be safe to call concurrently: the fetch group
/// issues all three methods for a photo at once.
#[async_trait]
pub trait PhotoTransport: Send + Sync {
    /// Transport name for logging/debugging.
    fn name(&self) -> &str;

    /// Call `method` for `photo_id` and return the response body.
    ///
    /// Errors are transport failures only (connection, timeout, non-2xx).
    async fn call(&self, method: ApiMethod, api_key: &str, photo_id: &str) -> Result<String>;
}
