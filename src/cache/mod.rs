//! Caching subsystem.
//!
//! [`RecordCache`] holds one assembled [`PhotoRecord`](crate::PhotoRecord)
//! per photo ID so each photo is fetched from Flickr at most once per
//! cache lifetime. See [`record`] module docs for the concurrency contract.

pub mod record;

pub use record::{CacheConfig, RecordCache};
