//! HTML rendering of an assembled [`PhotoRecord`].

use std::fmt::Write as _;

use tracing::warn;

use crate::types::{MarkupStyle, MissingSizePolicy, PhotoRecord, SizeVariant};
use crate::{FlickrError, Result};

/// Turns a record into an embeddable HTML fragment.
///
/// Every style links to the record's canonical URL, shows the selected
/// variant's image, and carries the title as accessible text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
    style: MarkupStyle,
    missing_size: MissingSizePolicy,
}

impl Renderer {
    pub fn new(style: MarkupStyle, missing_size: MissingSizePolicy) -> Self {
        Self {
            style,
            missing_size,
        }
    }

    pub fn style(&self) -> MarkupStyle {
        self.style
    }

    pub fn missing_size(&self) -> MissingSizePolicy {
        self.missing_size
    }

    /// Render `record` at its `requested_size`.
    ///
    /// Fails with [`FlickrError::SizeNotFound`] when the size is absent and
    /// the policy is [`MissingSizePolicy::Error`].
    pub fn render(&self, record: &PhotoRecord) -> Result<String> {
        let placeholder;
        let variant = match (record.selected_size(), self.missing_size) {
            (Some(variant), _) => variant,
            (None, MissingSizePolicy::Error) => {
                return Err(FlickrError::SizeNotFound {
                    id: record.id.clone(),
                    label: record.requested_size.clone(),
                });
            }
            (None, MissingSizePolicy::Placeholder) => {
                warn!(
                    photo_id = %record.id,
                    size = %record.requested_size,
                    "size not available, rendering placeholder"
                );
                placeholder = SizeVariant::unavailable(record.requested_size.as_str());
                &placeholder
            }
        };

        Ok(match self.style {
            MarkupStyle::Holder => holder(record, variant),
            MarkupStyle::Figure => figure(record, variant),
        })
    }
}

fn holder(record: &PhotoRecord, variant: &SizeVariant) -> String {
    format!(
        r#"<div class="photo-holder" style="max-width:62.5em;"><a href="{}"><img class="photo pure-img" src="{}" title="{}"></a></div>"#,
        escape(&record.url),
        escape(&variant.source),
        escape(&record.title),
    )
}

fn figure(record: &PhotoRecord, variant: &SizeVariant) -> String {
    let title = escape(&record.title);
    let mut out = format!(
        r#"<figure class="flickr-photo"><a href="{}"><img src="{}" width="{}" height="{}" alt="{title}" title="{title}"></a>"#,
        escape(&record.url),
        escape(&variant.source),
        escape(&variant.width),
        escape(&variant.height),
    );
    let caption = if record.caption.trim().is_empty() {
        title
    } else {
        escape(&record.caption)
    };
    let _ = write!(out, "<figcaption>{caption}</figcaption></figure>");
    out
}

/// Escape text for use inside an HTML attribute or element body.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
