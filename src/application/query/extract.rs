// SPDX-License-Identifier: MPL-2.0
//! Metadata extraction service.
//!
//! [`MetadataExtractor`] turns a decoded [`RawMetadataMap`] into a
//! [`NormalizedMetadata`] record and resolves the GPS position to an address
//! through an injected [`GeocodeClient`].
//!
//! Every failure is caught at the smallest scope and replaced by a default:
//! a malformed GPS block drops the coordinates but keeps the other fields,
//! and a failed lookup leaves the address at [`NOT_AVAILABLE`].

use crate::application::port::{GeocodeClient, TagDecoder};
use crate::domain::metadata::{
    try_axis_to_decimal_degrees, Axis, CoordinateError, GpsCoordinates, GpsMap,
    NormalizedMetadata, RawMetadataMap, TagValue, NOT_AVAILABLE,
};

/// Tag holding the original capture time.
pub const TAG_DATE_TIME_ORIGINAL: &str = "DateTimeOriginal";
/// Tag holding the camera manufacturer.
pub const TAG_MAKE: &str = "Make";
/// Tag holding the camera model.
pub const TAG_MODEL: &str = "Model";

pub const GPS_LATITUDE: &str = "GPSLatitude";
pub const GPS_LATITUDE_REF: &str = "GPSLatitudeRef";
pub const GPS_LONGITUDE: &str = "GPSLongitude";
pub const GPS_LONGITUDE_REF: &str = "GPSLongitudeRef";

/// Builds [`NormalizedMetadata`] records.
#[derive(Debug, Clone)]
pub struct MetadataExtractor<G> {
    geocoder: G,
}

impl<G: GeocodeClient> MetadataExtractor<G> {
    /// Creates an extractor that resolves addresses with `geocoder`.
    #[must_use]
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    /// Returns the injected geocoder.
    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Normalizes decoded tags.
    ///
    /// Returns `None` when `raw` is `None` or holds no tags at all; otherwise
    /// a record is always produced, with [`NOT_AVAILABLE`] for anything that
    /// could not be read.
    #[must_use]
    pub fn extract(&self, raw: Option<&RawMetadataMap>) -> Option<NormalizedMetadata> {
        let raw = raw?;
        if raw.is_empty() {
            tracing::debug!("tag map is empty, no record");
            return None;
        }

        let mut metadata = NormalizedMetadata {
            capture_date: text_or_default(raw.get(TAG_DATE_TIME_ORIGINAL)),
            camera_make: text_or_default(raw.get(TAG_MAKE)),
            camera_model: text_or_default(raw.get(TAG_MODEL)),
            ..NormalizedMetadata::default()
        };

        if let Some(gps) = raw.gps() {
            match read_coordinates(gps) {
                Ok(coords) => metadata.coordinates = Some(coords),
                Err(err) => tracing::warn!(error = %err, "ignoring malformed GPS block"),
            }
        }

        if let Some(coords) = metadata.coordinates {
            if let Some(address) = self.lookup_address(coords) {
                metadata.address = address;
            }
        }

        Some(metadata)
    }

    /// Decodes `image` with `decoder` and normalizes the result.
    #[must_use]
    pub fn extract_from_bytes(
        &self,
        decoder: &impl TagDecoder,
        image: &[u8],
    ) -> Option<NormalizedMetadata> {
        let raw = decoder.decode(image);
        self.extract(raw.as_ref())
    }

    fn lookup_address(&self, coords: GpsCoordinates) -> Option<String> {
        match self
            .geocoder
            .reverse_geocode(coords.latitude(), coords.longitude())
        {
            Ok(address) if !address.trim().is_empty() => Some(address),
            Ok(_) => {
                tracing::debug!("geocoder returned an empty address");
                None
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    latitude = coords.latitude(),
                    longitude = coords.longitude(),
                    "reverse geocoding failed"
                );
                None
            }
        }
    }
}

/// Reads both axes from the GPS block. A failure on either axis discards both.
fn read_coordinates(gps: &GpsMap) -> Result<GpsCoordinates, CoordinateError> {
    let latitude = read_axis(gps, GPS_LATITUDE, GPS_LATITUDE_REF, Axis::Latitude)?;
    let longitude = read_axis(gps, GPS_LONGITUDE, GPS_LONGITUDE_REF, Axis::Longitude)?;
    Ok(GpsCoordinates::new(latitude, longitude))
}

fn read_axis(
    gps: &GpsMap,
    value_tag: &'static str,
    ref_tag: &'static str,
    axis: Axis,
) -> Result<f64, CoordinateError> {
    let value = gps
        .get(value_tag)
        .ok_or(CoordinateError::MissingTag(value_tag))?;
    let reference = gps
        .get(ref_tag)
        .ok_or(CoordinateError::MissingTag(ref_tag))?;
    let reference = match reference {
        TagValue::Text(text) => text.as_str(),
        other => return Err(CoordinateError::InvalidReference(other.to_string())),
    };
    try_axis_to_decimal_degrees(value, reference, axis)
}

fn text_or_default(value: Option<&TagValue>) -> String {
    match value {
        Some(text @ TagValue::Text(_)) => text.as_text().unwrap_or(NOT_AVAILABLE).to_string(),
        Some(other) if !other.is_empty() => other.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
