// SPDX-License-Identifier: MPL-2.0
//! `kamadak-exif` adapter implementing the [`TagDecoder`] port.
//!
//! Reads the EXIF container from JPEG, PNG, WebP, TIFF and HEIF bytes and
//! converts every primary-image field into an owned [`TagValue`]. Fields of
//! the GPS IFD are collected into the nested GPS block; IFD pointer fields are
//! dropped since they only carry offsets.
//!
//! [`TagDecoder`]: crate::application::port::TagDecoder

use crate::application::port::{MetadataError, TagDecoder};
use crate::domain::metadata::{Ratio, RawMetadataMap, TagKey, TagValue};
use image_rs::ImageFormat;
use std::io::Cursor;

/// Tag decoder backed by `kamadak-exif`.
#[derive(Debug, Clone, Copy)]
pub struct ExifTagDecoder {
    continue_on_error: bool,
}

impl Default for ExifTagDecoder {
    fn default() -> Self {
        Self {
            continue_on_error: true,
        }
    }
}

impl ExifTagDecoder {
    /// Creates a decoder that keeps whatever fields could be read from a
    /// partially corrupted container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decoder that rejects a container as soon as one IFD entry
    /// is malformed.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            continue_on_error: false,
        }
    }

    fn read_exif(&self, image: &[u8]) -> Result<exif::Exif, exif::Error> {
        let mut reader = exif::Reader::new();
        reader.continue_on_error(self.continue_on_error);
        let mut cursor = Cursor::new(image);
        reader
            .read_from_container(&mut cursor)
            .or_else(|err| {
                err.distill_partial_result(|errors| {
                    for error in errors {
                        tracing::debug!(error = %error, "skipping malformed EXIF entry");
                    }
                })
            })
    }
}

impl TagDecoder for ExifTagDecoder {
    fn try_decode(&self, image: &[u8]) -> Result<RawMetadataMap, MetadataError> {
        if image.is_empty() {
            return Err(MetadataError::EmptyInput);
        }

        let format = image_rs::guess_format(image).ok();
        if let Some(format) = format {
            if !carries_exif(format) {
                tracing::debug!(?format, "image format has no EXIF container");
                return Err(MetadataError::UnsupportedFormat);
            }
        }

        let exif = self
            .read_exif(image)
            .map_err(|err| classify_error(err, format))?;

        let mut raw = RawMetadataMap::new();
        for field in exif.fields().filter(|f| f.ifd_num == exif::In::PRIMARY) {
            if field.tag == exif::Tag::GPSInfoIFDPointer {
                // The GPS block exists even if none of its entries are readable.
                raw.gps_mut();
                continue;
            }
            if is_ifd_pointer(field.tag) {
                continue;
            }

            let key = tag_key(field.tag);
            let value = tag_value(&field.value);
            if field.tag.context() == exif::Context::Gps {
                raw.gps_mut().insert(key, value);
            } else {
                raw.insert(key, value);
            }
        }

        if raw.is_empty() {
            return Err(MetadataError::NotFound);
        }

        tracing::debug!(
            tags = raw.len(),
            gps_tags = raw.gps().map_or(0, |gps| gps.len()),
            "decoded EXIF container"
        );
        Ok(raw)
    }
}

/// Formats `kamadak-exif` can locate an EXIF container in.
fn carries_exif(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Tiff | ImageFormat::WebP
    )
}

fn classify_error(err: exif::Error, format: Option<ImageFormat>) -> MetadataError {
    match err {
        exif::Error::NotFound(_) | exif::Error::BlankValue(_) => MetadataError::NotFound,
        exif::Error::InvalidFormat(msg) if format.is_none() => {
            tracing::debug!(reason = msg, "unrecognized image container");
            MetadataError::UnsupportedFormat
        }
        exif::Error::NotSupported(_) => MetadataError::UnsupportedFormat,
        exif::Error::Io(io) => MetadataError::ReadFailed(io.to_string()),
        other => MetadataError::CorruptedMetadata(other.to_string()),
    }
}

fn is_ifd_pointer(tag: exif::Tag) -> bool {
    tag == exif::Tag::ExifIFDPointer || tag == exif::Tag::InteropIFDPointer
}

/// Symbolic name when the tag table knows the tag, numeric id otherwise.
fn tag_key(tag: exif::Tag) -> TagKey {
    if tag.description().is_some() {
        TagKey::Named(tag.to_string())
    } else {
        TagKey::Numeric(tag.number())
    }
}

fn tag_value(value: &exif::Value) -> TagValue {
    use exif::Value;

    match value {
        Value::Ascii(parts) => TagValue::Text(
            parts
                .iter()
                .map(|part| String::from_utf8_lossy(part).trim_end_matches('\0').to_string())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Byte(v) => TagValue::Unsigned(v.iter().map(|n| u32::from(*n)).collect()),
        Value::Short(v) => TagValue::Unsigned(v.iter().map(|n| u32::from(*n)).collect()),
        Value::Long(v) => TagValue::Unsigned(v.clone()),
        Value::SByte(v) => TagValue::Signed(v.iter().map(|n| i32::from(*n)).collect()),
        Value::SShort(v) => TagValue::Signed(v.iter().map(|n| i32::from(*n)).collect()),
        Value::SLong(v) => TagValue::Signed(v.clone()),
        Value::Rational(v) => TagValue::Rational(
            v.iter()
                .map(|r| Ratio::new(i64::from(r.num), i64::from(r.denom)))
                .collect(),
        ),
        Value::SRational(v) => TagValue::Rational(
            v.iter()
                .map(|r| Ratio::new(i64::from(r.num), i64::from(r.denom)))
                .collect(),
        ),
        Value::Float(v) => TagValue::Float(v.iter().map(|n| f64::from(*n)).collect()),
        Value::Double(v) => TagValue::Float(v.clone()),
        Value::Undefined(bytes, _) => TagValue::Bytes(bytes.clone()),
        #[allow(unreachable_patterns)]
        _ => TagValue::Bytes(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metadata::GPS_INFO;
    use exif::{Field, In, Rational, Tag, Value};

    fn ascii(text: &str) -> Value {
        Value::Ascii(vec![text.as_bytes().to_vec()])
    }

    fn dms(d: u32, m: u32, s: u32) -> Value {
        Value::Rational(vec![
            Rational { num: d, denom: 1 },
            Rational { num: m, denom: 1 },
            Rational { num: s, denom: 1 },
        ])
    }

    fn field(tag: Tag, value: Value) -> Field {
        Field {
            tag,
            ifd_num: In::PRIMARY,
            value,
        }
    }

    fn tiff(fields: &[Field]) -> Vec<u8> {
        let mut writer = exif::experimental::Writer::new();
        for f in fields {
            writer.push_field(f);
        }
        let mut buf = Cursor::new(Vec::new());
        writer.write(&mut buf, false).expect("write TIFF");
        buf.into_inner()
    }

    #[test]
    fn decodes_flat_and_gps_tags() {
        let fields = vec![
            field(Tag::Make, ascii("Canon")),
            field(Tag::Model, ascii("EOS R6")),
            field(Tag::DateTimeOriginal, ascii("2024:03:15 14:30:00")),
            field(Tag::GPSLatitudeRef, ascii("S")),
            field(Tag::GPSLatitude, dms(33, 52, 8)),
            field(Tag::GPSLongitudeRef, ascii("E")),
            field(Tag::GPSLongitude, dms(151, 12, 33)),
        ];
        let raw = ExifTagDecoder::new()
            .try_decode(&tiff(&fields))
            .expect("decoded");

        assert_eq!(raw.get("Make").and_then(TagValue::as_text), Some("Canon"));
        assert_eq!(raw.get("Model").and_then(TagValue::as_text), Some("EOS R6"));
        assert_eq!(
            raw.get("DateTimeOriginal").and_then(TagValue::as_text),
            Some("2024:03:15 14:30:00")
        );
        assert!(raw.get("GPSLatitude").is_none());
        assert!(raw.get(GPS_INFO).is_none());

        let gps = raw.gps().expect("gps block");
        assert_eq!(gps.get("GPSLatitudeRef").and_then(TagValue::as_text), Some("S"));
        assert_eq!(
            gps.get("GPSLongitude"),
            Some(&TagValue::rationals([(151, 1), (12, 1), (33, 1)]))
        );
    }

    #[test]
    fn pointer_tags_are_not_exposed() {
        let fields = vec![
            field(Tag::Make, ascii("Sony")),
            field(Tag::ExposureTime, Value::Rational(vec![Rational { num: 1, denom: 250 }])),
        ];
        let raw = ExifTagDecoder::new()
            .try_decode(&tiff(&fields))
            .expect("decoded");

        assert!(raw.get("ExifIFDPointer").is_none());
        assert!(raw.get("ExposureTime").is_some());
        assert!(raw.gps().is_none());
    }

    #[test]
    fn empty_input_is_reported() {
        assert_eq!(
            ExifTagDecoder::new().try_decode(&[]),
            Err(MetadataError::EmptyInput)
        );
    }

    #[test]
    fn garbage_is_not_a_container() {
        let result = ExifTagDecoder::new().try_decode(b"definitely not an image");
        assert_eq!(result, Err(MetadataError::UnsupportedFormat));
        assert!(ExifTagDecoder::new()
            .decode(b"definitely not an image")
            .is_none());
    }

    #[test]
    fn formats_without_exif_are_rejected_early() {
        let gif = b"GIF89a\x01\x00\x01\x00\x00\x00\x00;";
        assert_eq!(
            ExifTagDecoder::new().try_decode(gif),
            Err(MetadataError::UnsupportedFormat)
        );
    }

    #[test]
    fn jpeg_without_app1_has_no_metadata() {
        // SOI, EOI
        let jpeg = [0xFF, 0xD8, 0xFF, 0xD9];
        assert!(ExifTagDecoder::new().decode(&jpeg).is_none());
    }

    /// Little-endian TIFF header followed by IFD0 at offset 8.
    fn tiff_with_ifd0(entries: &[[u8; 12]]) -> Vec<u8> {
        let mut bytes = vec![0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
        let count = u16::try_from(entries.len()).expect("entry count");
        bytes.extend_from_slice(&count.to_le_bytes());
        for entry in entries {
            bytes.extend_from_slice(entry);
        }
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        bytes
    }

    #[test]
    fn container_without_primary_tags_has_no_metadata() {
        let image = tiff_with_ifd0(&[]);
        assert_eq!(
            ExifTagDecoder::new().try_decode(&image),
            Err(MetadataError::NotFound)
        );
        assert!(ExifTagDecoder::new().decode(&image).is_none());
    }

    #[test]
    fn strict_decoder_rejects_truncated_entry_that_lenient_skips() {
        let image = tiff_with_ifd0(&[
            // Make, ASCII x6, value offset 0x1000 past the end of the data
            [0x0F, 0x01, 0x02, 0x00, 0x06, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00],
            // Model, ASCII x4, inline "X10\0"
            [0x10, 0x01, 0x02, 0x00, 0x04, 0x00, 0x00, 0x00, b'X', b'1', b'0', 0x00],
        ]);

        let partial = ExifTagDecoder::new().try_decode(&image).expect("partial");
        assert!(partial.get("Make").is_none());
        assert_eq!(partial.get("Model").and_then(TagValue::as_text), Some("X10"));

        assert!(matches!(
            ExifTagDecoder::strict().try_decode(&image),
            Err(MetadataError::CorruptedMetadata(_))
        ));
    }

    #[test]
    fn tag_value_conversions() {
        assert_eq!(
            tag_value(&Value::Short(vec![1, 2])),
            TagValue::Unsigned(vec![1, 2])
        );
        assert_eq!(
            tag_value(&Value::SRational(vec![exif::SRational { num: -1, denom: 3 }])),
            TagValue::Rational(vec![Ratio::new(-1, 3)])
        );
        assert_eq!(
            tag_value(&Value::Ascii(vec![b"a\0".to_vec(), b"b".to_vec()])),
            TagValue::text("a, b")
        );
        assert_eq!(
            tag_value(&Value::Undefined(vec![0x30, 0x32], 0)),
            TagValue::Bytes(vec![0x30, 0x32])
        );
    }

    #[test]
    fn unknown_tags_fall_back_to_numeric_keys() {
        assert_eq!(
            tag_key(Tag(exif::Context::Tiff, 0xfeed)),
            TagKey::Numeric(0xfeed)
        );
        assert_eq!(tag_key(Tag::Make), TagKey::named("Make"));
    }
}
