//! `flickr.photos.getSizes` parsing.
//!
//! ```xml
//! <rsp stat="ok">
//!   <sizes canblog="0" canprint="0" candownload="1">
//!     <size label="Square" width="75" height="75"
//!           source="https://live.staticflickr.com/..._s.jpg"
//!           url="https://www.flickr.com/photos/.../sizes/sq/" media="photo"/>
//!     ...
//!   </sizes>
//! </rsp>
//! ```

use std::collections::BTreeMap;

use tracing::warn;

use super::{record_fallback, successful};
use crate::transport::ApiMethod;
use crate::types::SizeVariant;

/// Size variants keyed on label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizesPart(pub BTreeMap<String, SizeVariant>);

impl SizesPart {
    /// The single-entry result used when sizes are unavailable: the
    /// placeholder image, keyed on the label that was asked for.
    pub fn unavailable(requested_size: &str) -> Self {
        Self(BTreeMap::from([(
            requested_size.to_string(),
            SizeVariant::unavailable(requested_size),
        )]))
    }
}

/// Parse a getSizes body.
///
/// On any failure the result is [`SizesPart::unavailable`], so the
/// requested label always resolves for a freshly fetched photo.
pub fn parse_sizes(body: Option<&str>, photo_id: &str, requested_size: &str) -> SizesPart {
    let doc = match successful(body) {
        Ok(doc) => doc,
        Err(failure) => {
            warn!(photo_id, method = %ApiMethod::Sizes, %failure, "sizes unavailable, using placeholder");
            record_fallback(ApiMethod::Sizes);
            return SizesPart::unavailable(requested_size);
        }
    };

    let sizes = doc
        .descendants()
        .filter(|n| n.has_tag_name("size"))
        .filter_map(|el| {
            let label = el.attribute("label")?;
            let attr = |name: &str| el.attribute(name).unwrap_or_default();
            Some((
                label.to_string(),
                SizeVariant::new(
                    label,
                    attr("width"),
                    attr("height"),
                    attr("source"),
                    attr("url"),
                ),
            ))
        })
        .collect();

    SizesPart(sizes)
}
