//! flickr-tag - Flickr photo embedding for static site templates
//!
//! Renders a `{% flickr_photo <id> ["Size Label"] %}` tag as an HTML
//! fragment. For each photo, three Flickr API calls (`getSizes`, `getInfo`,
//! `getExif`) run concurrently. Their results are merged into one
//! [`PhotoRecord`], cached per photo ID, and rendered at the requested size.
//!
//! Photos that are missing or private still render, as Flickr's
//! "unavailable" placeholder linking to flickr.com. A single bad photo
//! reference never fails a site build. A missing API key does.
//!
//! # Example
//!
//! ```rust,no_run
//! use flickr_tag::FlickrPhotos;
//!
//! #[tokio::main]
//! async fn main() -> flickr_tag::Result<()> {
//!     let photos = FlickrPhotos::builder()
//!         .api_key("21u3gj12kg34jh12gk3j4hg1k2j3h4g")
//!         .build()?;
//!
//!     let html = photos.render_tag(r#"1234567890 "Large Square""#).await?;
//!     println!("{html}");
//!     Ok(())
//! }
//! ```

pub mod assemble;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod gateway;
pub mod parse;
pub mod render;
pub mod tag;
pub mod telemetry;
pub mod transport;
pub mod types;

// Re-export main types at crate root
pub use cache::{CacheConfig, RecordCache};
pub use config::Config;
pub use error::{FlickrError, Result};
pub use fetch::FetchGroup;
pub use gateway::{FlickrPhotos, FlickrPhotosBuilder};
pub use render::Renderer;
pub use tag::Tag;
pub use transport::{ApiMethod, HttpTransport, PhotoTransport};
pub use types::{DEFAULT_SIZE, MarkupStyle, MissingSizePolicy, PhotoRecord, SizeVariant};
