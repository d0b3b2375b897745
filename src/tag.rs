//! Tag argument parsing.
//!
//! A template tag looks like:
//!
//! ```text
//! {% flickr_photo 1234567890 %}
//! {% flickr_photo 1234567890 "Large Square" %}
//! ```
//!
//! The host hands us the markup after the tag name. Arguments are split
//! shell-style: whitespace separates, single and double quotes group, and a
//! backslash escapes the next character (except inside single quotes).

use tracing::debug;

use crate::types::DEFAULT_SIZE;
use crate::{FlickrError, Result};

/// Parsed `flickr_photo` tag arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Flickr photo ID.
    pub id: String,
    /// Size label; [`DEFAULT_SIZE`] when omitted.
    pub size: String,
}

impl Tag {
    /// Create a tag, defaulting the size to "Medium".
    pub fn new(id: impl Into<String>, size: Option<String>) -> Self {
        Self {
            id: id.into(),
            size: size.unwrap_or_else(|| DEFAULT_SIZE.to_string()),
        }
    }

    /// Parse tag markup such as `1234567890 "Large Square"`.
    pub fn parse(markup: &str) -> Result<Self> {
        let mut words = split(markup)?.into_iter();
        let id = words
            .next()
            .ok_or_else(|| FlickrError::InvalidInput("flickr_photo requires a photo ID".into()))?;
        let size = words.next();

        let extra: Vec<String> = words.collect();
        if !extra.is_empty() {
            debug!(photo_id = %id, ?extra, "ignoring extra tag arguments");
        }

        Ok(Self::new(id, size))
    }
}

impl std::str::FromStr for Tag {
    type Err = FlickrError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Split `input` into shell-style words.
fn split(input: &str) -> Result<Vec<String>> {
    #[derive(Clone, Copy, PartialEq)]
    enum Quote {
        None,
        Single,
        Double,
    }

    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut quote = Quote::None;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Quote::Single, '\'') | (Quote::Double, '"') => quote = Quote::None,
            (Quote::Single, c) => word.push(c),
            (Quote::Double | Quote::None, '\\') => {
                let escaped = chars
                    .next()
                    .ok_or_else(|| FlickrError::InvalidInput("trailing backslash".into()))?;
                word.push(escaped);
                in_word = true;
            }
            (Quote::Double, c) => word.push(c),
            (Quote::None, '\'') => {
                quote = Quote::Single;
                in_word = true;
            }
            (Quote::None, '"') => {
                quote = Quote::Double;
                in_word = true;
            }
            (Quote::None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            (Quote::None, c) => {
                word.push(c);
                in_word = true;
            }
        }
    }

    if quote != Quote::None {
        return Err(FlickrError::InvalidInput(format!(
            "unterminated quote in tag markup: {input}"
        )));
    }
    if in_word {
        words.push(word);
    }
    Ok(words)
}
