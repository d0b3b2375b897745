//! Concurrent fetch group.
//!
//! One uncached photo costs three API calls. They are independent, so the
//! group fans them out together and joins on all three:
//!
//! ```text
//!            ┌─ getSizes ─ parse_sizes ─┐
//! fetch() ───┼─ getInfo  ─ parse_info  ─┼── assemble ─→ PhotoRecord
//!            └─ getExif  ─ parse_exif  ─┘
//! ```
//!
//! Each branch parses its own body as soon as it arrives; branches never
//! wait on each other. A failed branch (transport error or timeout) feeds
//! `None` to its parser, which substitutes the fallback for that slice of
//! the record only. The group always completes with a storable record.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join3;
use tracing::{debug, warn};

use crate::FlickrError;
use crate::assemble::assemble;
use crate::parse::{parse_exif, parse_info, parse_sizes};
use crate::transport::{ApiMethod, PhotoTransport};
use crate::types::PhotoRecord;

/// Default upper bound on a single API call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues the three photo API calls concurrently and assembles the result.
#[derive(Clone)]
pub struct FetchGroup {
    transport: Arc<dyn PhotoTransport>,
    request_timeout: Duration,
}

impl FetchGroup {
    /// Create a fetch group over `transport`.
    pub fn new(transport: Arc<dyn PhotoTransport>) -> Self {
        Self {
            transport,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Set the per-request timeout. A request that exceeds it is treated
    /// as a transport failure.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Fetch and assemble the record for `photo_id`.
    ///
    /// Returns once all three calls have finished or failed.
    pub async fn fetch(&self, api_key: &str, photo_id: &str, requested_size: &str) -> PhotoRecord {
        debug!(
            photo_id,
            requested_size,
            transport = self.transport.name(),
            "fetching photo"
        );

        let sizes = async {
            let body = self.body(ApiMethod::Sizes, api_key, photo_id).await;
            parse_sizes(body.as_deref(), photo_id, requested_size)
        };
        let info = async {
            let body = self.body(ApiMethod::Info, api_key, photo_id).await;
            parse_info(body.as_deref(), photo_id)
        };
        let exif = async {
            let body = self.body(ApiMethod::Exif, api_key, photo_id).await;
            parse_exif(body.as_deref(), photo_id)
        };

        let (sizes, info, exif) = join3(sizes, info, exif).await;

        assemble(PhotoRecord::new(photo_id, requested_size), sizes, info, exif)
    }

    /// Run one call under the timeout; `None` on any transport failure.
    async fn body(&self, method: ApiMethod, api_key: &str, photo_id: &str) -> Option<String> {
        let call = self.transport.call(method, api_key, photo_id);
        let result = match tokio::time::timeout(self.request_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(FlickrError::Timeout(self.request_timeout)),
        };

        match result {
            Ok(body) => Some(body),
            Err(error) => {
                warn!(photo_id, %method, %error, transient = error.is_transient(), "Flickr request failed");
                None
            }
        }
    }
}
