//! `flickr.photos.getInfo` parsing.
//!
//! Only three fields are used: `<title>`, `<description>`, and the photo
//! page from `<urls><url type="photopage">`.

use tracing::warn;

use super::{
    UNAVAILABLE_LINK_URL, UNAVAILABLE_TEXT, child, descendant, inner_text, record_fallback,
    successful,
};
use crate::transport::ApiMethod;

/// Descriptive text and canonical link for a photo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoPart {
    pub title: String,
    /// The photo's description.
    pub caption: String,
    /// Canonical photo page URL.
    pub url: String,
}

impl InfoPart {
    /// Values used when info is unavailable. The caption is left empty.
    pub fn unavailable() -> Self {
        Self {
            title: UNAVAILABLE_TEXT.to_string(),
            caption: String::new(),
            url: UNAVAILABLE_LINK_URL.to_string(),
        }
    }
}

/// Parse a getInfo body, falling back to [`InfoPart::unavailable`].
pub fn parse_info(body: Option<&str>, photo_id: &str) -> InfoPart {
    let doc = match successful(body) {
        Ok(doc) => doc,
        Err(failure) => {
            warn!(photo_id, method = %ApiMethod::Info, %failure, "info unavailable, using placeholder");
            record_fallback(ApiMethod::Info);
            return InfoPart::unavailable();
        }
    };
    let root = doc.root_element();

    let text_of = |name: &str| descendant(root, name).map(inner_text).unwrap_or_default();

    // Prefer the typed photopage link; older responses only carry one untyped <url>.
    let url = descendant(root, "urls")
        .and_then(|urls| {
            urls.children()
                .filter(|n| n.has_tag_name("url"))
                .find(|n| n.attribute("type") == Some("photopage"))
                .or_else(|| child(urls, "url"))
        })
        .map(inner_text)
        .unwrap_or_default();

    InfoPart {
        title: text_of("title"),
        caption: text_of("description"),
        url: url.trim().to_string(),
    }
}
