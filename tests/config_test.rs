//! Tests for loading [`Config`] from disk and building a gateway from it.

use std::time::Duration;

use flickr_tag::cache::CacheConfig;
use flickr_tag::{Config, FlickrError, FlickrPhotos, MarkupStyle, MissingSizePolicy};

#[test]
fn load_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
            [flickr]
            api_key = "from-file"
            markup = "figure"

            [cache]
            ttl_secs = 120
        "#,
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.flickr.api_key(), Some("from-file".to_string()));
    assert_eq!(config.flickr.markup, MarkupStyle::Figure);
    assert_eq!(config.flickr.missing_size, MissingSizePolicy::Error);
    assert_eq!(
        CacheConfig::from(&config.cache),
        CacheConfig::new().ttl(Duration::from_secs(120))
    );
}

#[test]
fn corrupt_file_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[flickr\nnot toml").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(matches!(err, FlickrError::Configuration(ref msg) if msg.contains("config.toml")));
}

#[test]
fn missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(Some(&dir.path().join("absent.toml")));
    assert!(matches!(result, Err(FlickrError::Configuration(_))));
}

#[tokio::test]
async fn gateway_from_config_renders_with_configured_options() {
    let config = Config::from_toml_str(
        r#"
            [flickr]
            api_key = "k"
            base_url = "http://127.0.0.1:9/services/rest/"
            request_timeout_secs = 1
            markup = "figure"
        "#,
    )
    .unwrap();

    // Nothing listens on port 9: every call fails and the placeholder renders.
    let photos = FlickrPhotos::from_config(&config).unwrap();
    assert_eq!(photos.renderer().style(), MarkupStyle::Figure);

    let html = photos.render_tag("1").await.unwrap();
    assert!(html.starts_with("<figure"));
    assert!(html.contains("photo_unavailable.gif"));
}
