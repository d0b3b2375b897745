//! Public types for the flickr-tag API.

mod options;
mod photo;

pub use options::{MarkupStyle, MissingSizePolicy};
pub use photo::{DEFAULT_SIZE, PhotoRecord, SizeVariant};
