//! Tests for [`RecordCache`]: per-photo record storage.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use flickr_tag::cache::{CacheConfig, RecordCache};
use flickr_tag::{PhotoRecord, SizeVariant};

fn make_record(id: &str) -> PhotoRecord {
    let mut record = PhotoRecord::new(id, "Medium");
    record.sizes.insert(
        "Medium".into(),
        SizeVariant::new("Medium", "500", "333", format!("https://example.com/{id}.jpg"), ""),
    );
    record.title = format!("photo {id}");
    record
}

#[tokio::test]
async fn cache_miss_returns_none() {
    let cache = RecordCache::default();
    assert!(cache.get("nonexistent").await.is_none());
}

#[tokio::test]
async fn independent_keys() {
    let cache = RecordCache::default();
    cache.insert("alpha", make_record("alpha")).await;
    cache.insert("beta", make_record("beta")).await;

    assert!(cache.get("alpha").await.is_some());
    assert!(cache.get("beta").await.is_some());
    assert!(cache.get("gamma").await.is_none());
}

#[tokio::test]
async fn records_are_returned_whole() {
    let cache = RecordCache::default();
    let record = make_record("1");
    cache.insert("1", record.clone()).await;

    assert_eq!(cache.get("1").await, Some(record));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writers_and_readers() {
    let cache = Arc::new(RecordCache::default());
    let mut handles = Vec::new();

    // Spawn writers
    for i in 0..10 {
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move {
            cache.insert(i.to_string(), make_record(&i.to_string())).await;
        }));
    }

    // Spawn concurrent readers; a hit must always be a complete record
    for i in 0..10 {
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move {
            if let Some(record) = cache.get(&i.to_string()).await {
                assert_eq!(record, make_record(&i.to_string()));
            }
        }));
    }

    for h in handles {
        h.await.expect("task panicked");
    }

    // After all writers finish, all entries should be present
    for i in 0..10 {
        assert!(cache.get(&i.to_string()).await.is_some());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_misses_share_one_fetch() {
    let cache = Arc::new(RecordCache::default());
    let fetches = Arc::new(AtomicUsize::new(0));
    let mut handles = Vec::new();

    for _ in 0..16 {
        let cache = Arc::clone(&cache);
        let fetches = Arc::clone(&fetches);
        handles.push(tokio::spawn(async move {
            cache
                .get_or_fetch("shared", async {
                    fetches.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    make_record("shared")
                })
                .await
        }));
    }

    for h in handles {
        let record = h.await.expect("task panicked");
        assert_eq!(record.title, "photo shared");
    }
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn ttl_expiry() {
    let cache = RecordCache::new(&CacheConfig::new().ttl(Duration::from_millis(1)));
    cache.insert("1", make_record("1")).await;

    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(cache.get("1").await.is_none());
}
