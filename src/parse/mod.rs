//! Flickr XML response parsing.
//!
//! Every Flickr REST response is wrapped in `<rsp stat="...">`. `stat="ok"`
//! carries the payload; anything else (usually `stat="fail"` with an
//! `<err code=".." msg=".."/>` child) means the photo is missing, private,
//! or the call was rejected. This upstream status is independent of the
//! HTTP status.
//!
//! Each parser turns one body into a disjoint partial of the
//! [`PhotoRecord`](crate::PhotoRecord):
//!
//! | parser | method | partial |
//! |---|---|---|
//! | [`sizes::parse_sizes`] | `flickr.photos.getSizes` | [`SizesPart`] |
//! | [`info::parse_info`] | `flickr.photos.getInfo` | [`InfoPart`] |
//! | [`exif::parse_exif`] | `flickr.photos.getExif` | [`ExifPart`] |
//!
//! Parsers never fail. A transport error (`None` body), empty body,
//! malformed XML, or a non-ok status all take the same fallback path.

pub mod exif;
pub mod info;
pub mod sizes;

pub use exif::{ExifPart, parse_exif};
pub use info::{InfoPart, parse_info};
pub use sizes::{SizesPart, parse_sizes};

use roxmltree::{Document, Node};

use crate::telemetry;
use crate::transport::ApiMethod;

/// Placeholder image Flickr serves for unavailable photos.
pub const UNAVAILABLE_IMAGE_URL: &str = "https://s.yimg.com/pw/images/photo_unavailable.gif";

/// Where unavailable photos link to.
pub const UNAVAILABLE_LINK_URL: &str = "http://flickr.com";

/// Title used for unavailable photos.
pub const UNAVAILABLE_TEXT: &str = "This photo or video is not available.";

/// Placeholder dimensions, matching [`UNAVAILABLE_IMAGE_URL`].
pub const UNAVAILABLE_WIDTH: &str = "400";
pub const UNAVAILABLE_HEIGHT: &str = "300";

/// Why a response could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    #[error("no response (transport failure)")]
    Transport,

    #[error("empty response body")]
    Empty,

    #[error("malformed XML: {0}")]
    Malformed(String),

    #[error("missing <rsp> envelope")]
    NoEnvelope,

    #[error("upstream status '{stat}' (code {code}): {message}")]
    Status {
        stat: String,
        code: String,
        message: String,
    },
}

/// Parse `body` and check its `<rsp>` status.
///
/// Returns the document only when the envelope says `stat="ok"`.
pub fn successful(body: Option<&str>) -> Result<Document<'_>, Failure> {
    let doc = document(body)?;
    let rsp = doc.root_element();
    if !rsp.has_tag_name("rsp") {
        return Err(Failure::NoEnvelope);
    }

    match rsp.attribute("stat") {
        Some("ok") => Ok(doc),
        stat => {
            let err = child(rsp, "err");
            Err(Failure::Status {
                stat: stat.unwrap_or_default().to_string(),
                code: err
                    .and_then(|e| e.attribute("code"))
                    .unwrap_or_default()
                    .to_string(),
                message: err
                    .and_then(|e| e.attribute("msg"))
                    .unwrap_or_default()
                    .to_string(),
            })
        }
    }
}

/// Parse `body` without looking at the status.
pub fn document(body: Option<&str>) -> Result<Document<'_>, Failure> {
    let body = body.ok_or(Failure::Transport)?;
    if body.trim().is_empty() {
        return Err(Failure::Empty);
    }
    Document::parse(body).map_err(|e| Failure::Malformed(e.to_string()))
}

/// First child element of `node` named `name`.
pub(crate) fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

/// First descendant element of `node` named `name`.
pub(crate) fn descendant<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants().find(|n| n.has_tag_name(name))
}

/// Concatenated text of every text node under `node`.
pub(crate) fn inner_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

pub(crate) fn record_fallback(method: ApiMethod) {
    metrics::counter!(telemetry::FALLBACKS_TOTAL, "method" => method.as_str()).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_returns_document() {
        let doc = successful(Some(r#"<rsp stat="ok"><photo id="1"/></rsp>"#)).unwrap();
        assert!(descendant(doc.root_element(), "photo").is_some());
    }

    #[test]
    fn fail_status_carries_err_details() {
        let body = r#"<rsp stat="fail"><err code="1" msg="Photo not found"/></rsp>"#;
        assert_eq!(
            successful(Some(body)).unwrap_err(),
            Failure::Status {
                stat: "fail".into(),
                code: "1".into(),
                message: "Photo not found".into(),
            }
        );
    }

    #[test]
    fn missing_stat_is_failure() {
        assert!(matches!(
            successful(Some("<rsp/>")),
            Err(Failure::Status { .. })
        ));
    }

    #[test]
    fn transport_empty_and_malformed_are_failures() {
        assert_eq!(successful(None).unwrap_err(), Failure::Transport);
        assert_eq!(successful(Some("  \n")).unwrap_err(), Failure::Empty);
        assert!(matches!(
            successful(Some("<rsp stat=\"ok\">")),
            Err(Failure::Malformed(_))
        ));
    }

    #[test]
    fn wrong_root_is_failure() {
        assert_eq!(
            successful(Some("<html><body>502</body></html>")).unwrap_err(),
            Failure::NoEnvelope
        );
    }

    #[test]
    fn inner_text_concatenates() {
        let doc = Document::parse("<a>one <b>two</b> three</a>").unwrap();
        assert_eq!(inner_text(doc.root_element()), "one two three");
    }
}
