//! `flickr.photos.getExif` parsing.
//!
//! ```xml
//! <rsp stat="ok">
//!   <photo id="..." secret="..." server="..." farm="..." camera="Canon EOS 5D">
//!     <exif tagspace="IFD0" tagspaceid="0" tag="Make" label="Make">
//!       <raw>Canon</raw>
//!     </exif>
//!     <exif tagspace="ExifIFD" tagspaceid="0" tag="ExposureTime" label="Exposure">
//!       <raw>1/250</raw>
//!       <clean>0.004 sec (1/250)</clean>
//!     </exif>
//!   </photo>
//! </rsp>
//! ```
//!
//! EXIF is best effort: the status is not consulted, and every `<exif>`
//! element found contributes `label → text of its first child element`
//! (the `<raw>` value).

use std::collections::BTreeMap;

use tracing::debug;

use super::{document, inner_text};
use crate::transport::ApiMethod;

/// EXIF values keyed on label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExifPart(pub BTreeMap<String, String>);

/// Parse a getExif body. Never fails; no usable elements means an empty map.
pub fn parse_exif(body: Option<&str>, photo_id: &str) -> ExifPart {
    let doc = match document(body) {
        Ok(doc) => doc,
        Err(failure) => {
            debug!(photo_id, method = %ApiMethod::Exif, %failure, "no EXIF data");
            return ExifPart::default();
        }
    };

    let exif = doc
        .descendants()
        .filter(|n| n.has_tag_name("exif"))
        .filter_map(|el| {
            let label = el.attribute("label")?;
            let value = el.children().find(|n| n.is_element())?;
            Some((label.to_string(), inner_text(value)))
        })
        .collect();

    ExifPart(exif)
}
