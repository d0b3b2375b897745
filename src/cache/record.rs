//! Per-photo record cache.
//!
//! [`RecordCache`] maps a photo ID to its fully assembled
//! [`PhotoRecord`]. It is owned by the [`FlickrPhotos`](crate::FlickrPhotos)
//! gateway and injected through the builder, so tests and hosts can use a
//! fresh, shared, or pre-seeded cache.
//!
//! Records are stored and returned whole (moka clones the value), so a
//! reader never observes a half-populated record. `insert` is last write
//! wins. [`RecordCache::get_or_fetch`] additionally coalesces concurrent
//! misses for the same ID into a single in-flight fetch.
//!
//! By default entries never expire; capacity is bounded so a long-running
//! host (e.g. `jekyll serve`) does not grow without limit.

use std::future::Future;
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use crate::telemetry;
use crate::types::PhotoRecord;

/// Configuration for the record cache.
///
/// ```rust
/// # use flickr_tag::CacheConfig;
/// # use std::time::Duration;
/// let config = CacheConfig::new()
///     .max_entries(500)
///     .ttl(Duration::from_secs(3600));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of cached records. Default: 10,000.
    pub max_entries: u64,
    /// Time-to-live for cached records. Default: none (live for the process).
    pub ttl: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
            ttl: None,
        }
    }
}

impl CacheConfig {
    /// Create a new config with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of cached records.
    pub fn max_entries(mut self, n: u64) -> Self {
        self.max_entries = n;
        self
    }

    /// Set the time-to-live for cached records.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

/// In-memory cache of assembled photo records, keyed on photo ID.
pub struct RecordCache {
    entries: Cache<String, PhotoRecord>,
}

impl RecordCache {
    /// Create an empty cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let mut builder = Cache::builder().max_capacity(config.max_entries);
        if let Some(ttl) = config.ttl {
            builder = builder.time_to_live(ttl);
        }
        Self {
            entries: builder.build(),
        }
    }

    /// Look up the record for `id`.
    ///
    /// Returns `None` on cache miss. Emits cache hit/miss metrics.
    pub async fn get(&self, id: &str) -> Option<PhotoRecord> {
        match self.entries.get(id).await {
            Some(record) => {
                metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
                debug!(photo_id = id, "record cache hit");
                Some(record)
            }
            None => {
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
                debug!(photo_id = id, "record cache miss");
                None
            }
        }
    }

    /// Insert (or overwrite) the record for `id`.
    pub async fn insert(&self, id: impl Into<String>, record: PhotoRecord) {
        self.entries.insert(id.into(), record).await;
    }

    /// Return the cached record for `id`, or run `fetch` and cache its result.
    ///
    /// Concurrent callers missing on the same `id` share one `fetch`; the
    /// others wait for it and receive its record.
    pub async fn get_or_fetch<F>(&self, id: &str, fetch: F) -> PhotoRecord
    where
        F: Future<Output = PhotoRecord>,
    {
        let entry = self.entries.entry_by_ref(id).or_insert_with(fetch).await;
        if entry.is_fresh() {
            metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
            debug!(photo_id = id, "record cache miss, fetched");
        } else {
            metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
            debug!(photo_id = id, "record cache hit");
        }
        entry.into_value()
    }

    /// Number of records currently in the cache.
    ///
    /// Moka applies writes lazily; call [`sync`](Self::sync) first when an
    /// exact count matters.
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flush pending maintenance so [`len`](Self::len) is accurate.
    pub async fn sync(&self) {
        self.entries.run_pending_tasks().await;
    }

    /// Evict all records.
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }
}

impl Default for RecordCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
