//! Rendering options.

use serde::{Deserialize, Serialize};

/// Which HTML shape the renderer emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupStyle {
    /// Linked image inside a `photo-holder` div.
    #[default]
    Holder,

    /// `<figure>` with the caption (or title) as `<figcaption>`.
    Figure,
}

/// What to do when the requested size is not in the record.
///
/// Typically a cache hit: the record was fetched for one size and a later
/// tag asks for a label Flickr never returned. It also happens when Flickr
/// answers successfully but does not offer the label (e.g. "Large 2048" on
/// a small upload). A failed sizes call always carries the requested label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingSizePolicy {
    /// Return [`FlickrError::SizeNotFound`](crate::FlickrError::SizeNotFound).
    ///
    /// The cached record is not topped up; the host decides what to do.
    #[default]
    Error,

    /// Render the 400x300 "photo unavailable" image instead.
    Placeholder,
}
