// SPDX-License-Identifier: MPL-2.0
//! File-level helpers around the extraction pipeline.
//!
//! Reading image files from disk and formatting extracted values for display.

pub mod metadata;

use std::path::Path;

pub use metadata::{
    format_capture_date, format_gps_coordinates, parse_exif_datetime, read_image_bytes,
};

pub mod extensions {
    /// Extensions of image formats whose EXIF block can be decoded.
    pub const EXIF_READ_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "tiff", "tif"];
}

/// Returns `true` if the file extension names a format with readable EXIF.
///
/// The check is case-insensitive. Files without an extension return `false`;
/// the decoder still sniffs content, so this is only a hint.
#[must_use]
pub fn has_exif_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| extensions::EXIF_READ_EXTENSIONS.contains(&ext.as_str()))
}
