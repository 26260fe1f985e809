// SPDX-License-Identifier: MPL-2.0
//! Reading image bytes and formatting extracted metadata for display.

use crate::config::MAX_IMAGE_BYTES;
use crate::domain::metadata::{GpsCoordinates, NOT_AVAILABLE};
use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;

/// EXIF datetime layout: "YYYY:MM:DD HH:MM:SS".
const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

const DISPLAY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reads an image file fully into memory.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read or is larger than
/// [`MAX_IMAGE_BYTES`].
pub fn read_image_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let size = fs::metadata(path)?.len();
    if size > MAX_IMAGE_BYTES {
        return Err(Error::Io(format!(
            "{} is {size} bytes, larger than the {MAX_IMAGE_BYTES} byte limit",
            path.display()
        )));
    }
    Ok(fs::read(path)?)
}

/// Parses an EXIF datetime string.
#[must_use]
pub fn parse_exif_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), EXIF_DATETIME_FORMAT).ok()
}

/// Formats a capture date for display.
///
/// EXIF datetimes become "YYYY-MM-DD HH:MM:SS"; anything else, including
/// `"N/A"`, is returned unchanged.
#[must_use]
pub fn format_capture_date(value: &str) -> String {
    match parse_exif_datetime(value) {
        Some(dt) => dt.format(DISPLAY_DATETIME_FORMAT).to_string(),
        None => value.to_string(),
    }
}

/// Formats optional coordinates, or `"N/A"` when absent.
#[must_use]
pub fn format_gps_coordinates(coordinates: Option<&GpsCoordinates>) -> String {
    coordinates.map_or_else(|| NOT_AVAILABLE.to_string(), GpsCoordinates::format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use tempfile::tempdir;

    #[test]
    fn parses_exif_datetime() {
        let dt = parse_exif_datetime("2021:06:15 14:30:05").expect("valid datetime");
        assert_eq!((dt.year(), dt.month(), dt.day()), (2021, 6, 15));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (14, 30, 5));
    }

    #[test]
    fn rejects_non_exif_datetime() {
        assert!(parse_exif_datetime("2021-06-15 14:30:05").is_none());
        assert!(parse_exif_datetime("    :  :     :  :  ").is_none());
        assert!(parse_exif_datetime(NOT_AVAILABLE).is_none());
    }

    #[test]
    fn formats_capture_date_for_display() {
        assert_eq!(
            format_capture_date("2021:06:15 14:30:05"),
            "2021-06-15 14:30:05"
        );
        assert_eq!(format_capture_date(NOT_AVAILABLE), NOT_AVAILABLE);
        assert_eq!(format_capture_date("sometime"), "sometime");
    }

    #[test]
    fn formats_present_and_absent_coordinates() {
        let coords = GpsCoordinates::new(48.8566, -2.3522);
        assert_eq!(
            format_gps_coordinates(Some(&coords)),
            "48.856600° N, 2.352200° W"
        );
        assert_eq!(format_gps_coordinates(None), NOT_AVAILABLE);
    }

    #[test]
    fn reads_image_bytes_from_disk() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("photo.jpg");
        fs::write(&path, [0xFF, 0xD8, 0xFF, 0xD9]).expect("write");

        let bytes = read_image_bytes(&path).expect("read");
        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xD9]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("temp dir");
        let result = read_image_bytes(dir.path().join("missing.jpg"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
