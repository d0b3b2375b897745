//! The render path: tag → cache → fetch group → renderer.

use std::sync::Arc;

use tracing::instrument;

use super::FlickrPhotosBuilder;
use crate::cache::RecordCache;
use crate::config::Config;
use crate::fetch::FetchGroup;
use crate::render::Renderer;
use crate::tag::Tag;
use crate::types::PhotoRecord;
use crate::{FlickrError, Result};

/// Renders `flickr_photo` tags.
///
/// Owns the transport (through its [`FetchGroup`]), the [`RecordCache`],
/// the [`Renderer`], and the API key. `Send + Sync`; share it across page
/// renders with an `Arc`.
pub struct FlickrPhotos {
    fetch: FetchGroup,
    cache: Arc<RecordCache>,
    renderer: Renderer,
    api_key: Option<String>,
}

impl FlickrPhotos {
    /// Create a new builder.
    pub fn builder() -> FlickrPhotosBuilder {
        FlickrPhotosBuilder::new()
    }

    /// Build from site configuration using the HTTP transport.
    pub fn from_config(config: &Config) -> Result<Self> {
        FlickrPhotosBuilder::from_config(config).build()
    }

    pub(crate) fn new(
        fetch: FetchGroup,
        cache: Arc<RecordCache>,
        renderer: Renderer,
        api_key: Option<String>,
    ) -> Self {
        Self {
            fetch,
            cache,
            renderer,
            api_key,
        }
    }

    /// The record cache backing this instance.
    pub fn cache(&self) -> &Arc<RecordCache> {
        &self.cache
    }

    pub fn renderer(&self) -> Renderer {
        self.renderer
    }

    /// The record for `id`, set to render at `size`.
    ///
    /// Fetches on a cache miss; a hit never refetches, even when `size`
    /// differs from the size the record was first fetched for.
    #[instrument(skip(self), fields(operation = "photo"))]
    pub async fn photo(&self, id: &str, size: &str) -> Result<PhotoRecord> {
        let api_key = self.api_key.as_deref().ok_or(FlickrError::MissingApiKey)?;

        let record = self
            .cache
            .get_or_fetch(id, self.fetch.fetch(api_key, id, size))
            .await;

        Ok(record.with_requested_size(size))
    }

    /// Render `id` at `size` as HTML.
    pub async fn render(&self, id: &str, size: &str) -> Result<String> {
        let record = self.photo(id, size).await?;
        self.renderer.render(&record)
    }

    /// Render raw tag markup, e.g. `1234567890 "Large Square"`.
    pub async fn render_tag(&self, markup: &str) -> Result<String> {
        let tag = Tag::parse(markup)?;
        self.render(&tag.id, &tag.size).await
    }
}
