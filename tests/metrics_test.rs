//! Tests for metrics integration.
//!
//! Uses `metrics_util::debugging::DebuggingRecorder` to capture and assert
//! on emitted metrics without needing a real exporter.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use metrics_util::MetricKind;
use metrics_util::debugging::{DebugValue, DebuggingRecorder};

use flickr_tag::{ApiMethod, FlickrError, FlickrPhotos, PhotoTransport, Result, telemetry};

// ============================================================================
// Mock transport
// ============================================================================

/// Info and EXIF succeed; sizes always fails at the transport.
struct SizesDownTransport {
    calls: AtomicUsize,
}

#[async_trait]
impl PhotoTransport for SizesDownTransport {
    fn name(&self) -> &str {
        "sizes-down"
    }

    async fn call(&self, method: ApiMethod, _api_key: &str, _photo_id: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match method {
            ApiMethod::Sizes => Err(FlickrError::Http("connection reset".into())),
            ApiMethod::Info => Ok(r#"<rsp stat="ok"><photo><title>T</title></photo></rsp>"#.into()),
            ApiMethod::Exif => Ok(r#"<rsp stat="ok"><photo/></rsp>"#.into()),
        }
    }
}

// ============================================================================
// Snapshot type alias for readability
// ============================================================================

type SnapshotVec = Vec<(
    metrics_util::CompositeKey,
    Option<metrics::Unit>,
    Option<metrics::SharedString>,
    DebugValue,
)>;

// ============================================================================
// Helpers
// ============================================================================

/// Sum all counter values matching a given metric name.
fn counter_total(snapshot: &SnapshotVec, name: &str) -> u64 {
    snapshot
        .iter()
        .filter(|(key, _, _, _)| key.kind() == MetricKind::Counter && key.key().name() == name)
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(v) => *v,
            _ => 0,
        })
        .sum()
}

/// Sum counter values for `name` whose `method` label equals `method`.
fn counter_for_method(snapshot: &SnapshotVec, name: &str, method: &str) -> u64 {
    snapshot
        .iter()
        .filter(|(key, _, _, _)| {
            key.kind() == MetricKind::Counter
                && key.key().name() == name
                && key
                    .key()
                    .labels()
                    .any(|l| l.key() == "method" && l.value() == method)
        })
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(v) => *v,
            _ => 0,
        })
        .sum()
}

// ============================================================================
// Tests
// ============================================================================

/// Runs async code within a local recorder scope on the multi-thread runtime.
///
/// `block_in_place` ensures the sync `with_local_recorder` closure stays
/// on the current thread while `block_on` drives the inner async work.
#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn cache_miss_then_hit_is_counted() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    let transport = Arc::new(SizesDownTransport {
        calls: AtomicUsize::new(0),
    });

    let photos = FlickrPhotos::builder()
        .api_key("k")
        .transport(transport.clone())
        .build()
        .unwrap();

    metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                photos.render("5", "Medium").await.unwrap();
                photos.render("5", "Medium").await.unwrap();
            })
        })
    });

    let snapshot = snapshotter.snapshot().into_vec();
    assert_eq!(counter_total(&snapshot, telemetry::CACHE_MISSES_TOTAL), 1);
    assert_eq!(counter_total(&snapshot, telemetry::CACHE_HITS_TOTAL), 1);
    assert_eq!(transport.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn transport_failure_records_fallback() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let photos = FlickrPhotos::builder()
        .api_key("k")
        .transport(Arc::new(SizesDownTransport {
            calls: AtomicUsize::new(0),
        }))
        .build()
        .unwrap();

    metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                photos.render("5", "Medium").await.unwrap();
            })
        })
    });

    let snapshot = snapshotter.snapshot().into_vec();
    assert_eq!(
        counter_for_method(
            &snapshot,
            telemetry::FALLBACKS_TOTAL,
            ApiMethod::Sizes.as_str()
        ),
        1
    );
    assert_eq!(
        counter_for_method(
            &snapshot,
            telemetry::FALLBACKS_TOTAL,
            ApiMethod::Info.as_str()
        ),
        0
    );
}
