//! Gateway: the public entry point hosts render tags through.

mod builder;
mod photos;

pub use builder::FlickrPhotosBuilder;
pub use photos::FlickrPhotos;
