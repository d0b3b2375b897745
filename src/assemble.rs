//! Merge parser partials into a [`PhotoRecord`].

use crate::parse::{ExifPart, InfoPart, SizesPart};
use crate::types::PhotoRecord;

/// Fill `seed` from the three partials.
///
/// Each partial owns a disjoint group of fields, so there are no conflicts:
/// sizes → `sizes`; info → `title`, `caption`, `url`; exif → `exif`.
/// `id` and `requested_size` come from the seed.
pub fn assemble(
    mut seed: PhotoRecord,
    sizes: SizesPart,
    info: InfoPart,
    exif: ExifPart,
) -> PhotoRecord {
    let SizesPart(sizes) = sizes;
    let InfoPart {
        title,
        caption,
        url,
    } = info;
    let ExifPart(exif) = exif;

    seed.sizes = sizes;
    seed.title = title;
    seed.caption = caption;
    seed.url = url;
    seed.exif = exif;
    seed
}
