//! Telemetry metric name constants.
//!
//! Centralised metric names for flickr-tag operations. Hosts install their
//! own `metrics` recorder (e.g. prometheus, statsd); without a recorder
//! installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `flickr_tag_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `method`: Flickr API method (e.g. "flickr.photos.getSizes")
//! - `status`: transport outcome: "ok" or "error"

/// Total upstream API requests dispatched.
///
/// Labels: `method`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "flickr_tag_requests_total";

/// Upstream request duration in seconds.
///
/// Labels: `method`.
pub const REQUEST_DURATION_SECONDS: &str = "flickr_tag_request_duration_seconds";

/// Responses that were replaced by fallback values (failure status,
/// transport error, or unparseable body).
///
/// Labels: `method`.
pub const FALLBACKS_TOTAL: &str = "flickr_tag_fallbacks_total";

/// Total record cache hits.
pub const CACHE_HITS_TOTAL: &str = "flickr_tag_cache_hits_total";

/// Total record cache misses.
pub const CACHE_MISSES_TOTAL: &str = "flickr_tag_cache_misses_total";
