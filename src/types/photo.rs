//! Photo record types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::parse::{UNAVAILABLE_HEIGHT, UNAVAILABLE_IMAGE_URL, UNAVAILABLE_WIDTH};

/// Size label used when the tag does not name one (~500px wide).
pub const DEFAULT_SIZE: &str = "Medium";

/// One resolution/crop option for a photo.
///
/// Width and height are kept as the strings Flickr returns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeVariant {
    /// Flickr size label (e.g. "Medium", "Large Square").
    pub label: String,
    pub width: String,
    pub height: String,
    /// Direct image URL.
    pub source: String,
    /// Flickr page for this size.
    pub url: String,
}

impl SizeVariant {
    /// Create a variant.
    pub fn new(
        label: impl Into<String>,
        width: impl Into<String>,
        height: impl Into<String>,
        source: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            width: width.into(),
            height: height.into(),
            source: source.into(),
            url: url.into(),
        }
    }

    /// Flickr's 400x300 "photo unavailable" image, under `label`.
    pub fn unavailable(label: impl Into<String>) -> Self {
        Self::new(
            label,
            UNAVAILABLE_WIDTH,
            UNAVAILABLE_HEIGHT,
            UNAVAILABLE_IMAGE_URL,
            UNAVAILABLE_IMAGE_URL,
        )
    }
}

/// Everything known about one photo: its sizes, descriptive text, and EXIF.
///
/// A record starts empty with only `id` and `requested_size` set (see
/// [`PhotoRecord::new`]) and is filled in once by the fetch group. After it
/// is cached it is never modified; renders for a different size go through
/// [`PhotoRecord::with_requested_size`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: String,
    pub requested_size: String,
    pub sizes: BTreeMap<String, SizeVariant>,
    pub title: String,
    pub caption: String,
    /// Canonical photo page URL.
    pub url: String,
    pub exif: BTreeMap<String, String>,
}

impl PhotoRecord {
    /// Create an empty record for `id`, to be rendered at `requested_size`.
    pub fn new(id: impl Into<String>, requested_size: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            requested_size: requested_size.into(),
            sizes: BTreeMap::new(),
            title: String::new(),
            caption: String::new(),
            url: String::new(),
            exif: BTreeMap::new(),
        }
    }

    /// Same record, rendered at a different size.
    pub fn with_requested_size(mut self, size: impl Into<String>) -> Self {
        self.requested_size = size.into();
        self
    }

    /// The variant for `requested_size`, if the record has one.
    pub fn selected_size(&self) -> Option<&SizeVariant> {
        self.sizes.get(&self.requested_size)
    }

    /// Pretty-printed JSON, for inspection and debugging.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
