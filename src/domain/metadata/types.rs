// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! Pure domain types for extracted image metadata with no external dependencies.

/// Placeholder rendered for any field that could not be extracted.
pub const NOT_AVAILABLE: &str = "N/A";

// =============================================================================
// GpsCoordinates
// =============================================================================

/// GPS coordinates in decimal degrees.
///
/// This type represents geographic coordinates using the WGS84 coordinate
/// system (latitude and longitude in decimal degrees).
///
/// # Example
///
/// ```
/// use exif_lens::domain::metadata::GpsCoordinates;
///
/// let coords = GpsCoordinates::new(48.8566, 2.3522); // Paris
/// assert_eq!(coords.latitude(), 48.8566);
/// assert_eq!(coords.format(), "48.856600° N, 2.352200° E");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsCoordinates {
    /// Latitude in decimal degrees (-90.0 to 90.0)
    latitude: f64,
    /// Longitude in decimal degrees (-180.0 to 180.0)
    longitude: f64,
}

impl GpsCoordinates {
    /// Creates new GPS coordinates.
    ///
    /// Values outside valid ranges will be clamped:
    /// - Latitude: -90.0 to 90.0
    /// - Longitude: -180.0 to 180.0
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude: longitude.clamp(-180.0, 180.0),
        }
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Formats the coordinates as a human-readable string.
    ///
    /// Format: "48.856600° N, 2.352200° E"
    #[must_use]
    pub fn format(&self) -> String {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        format!(
            "{:.6}° {}, {:.6}° {}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir
        )
    }

    /// Generates an OpenStreetMap URL centred on these coordinates.
    #[must_use]
    pub fn map_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={}&mlon={}",
            self.latitude, self.longitude
        )
    }
}

// =============================================================================
// NormalizedMetadata
// =============================================================================

/// How much of the record could be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    /// Coordinates or address are missing.
    Partial,
    /// Coordinates were decoded and resolved to an address.
    Complete,
}

/// Normalized metadata returned to the presentation layer.
///
/// Coordinates are stored as a pair so that latitude and longitude are
/// always both present or both absent.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMetadata {
    /// Decoded GPS position, if the GPS block was complete and well formed.
    pub coordinates: Option<GpsCoordinates>,
    /// Reverse-geocoded address, or [`NOT_AVAILABLE`].
    pub address: String,
    /// Raw `DateTimeOriginal` text, or [`NOT_AVAILABLE`].
    pub capture_date: String,
    /// Camera manufacturer, or [`NOT_AVAILABLE`].
    pub camera_make: String,
    /// Camera model, or [`NOT_AVAILABLE`].
    pub camera_model: String,
}

impl Default for NormalizedMetadata {
    fn default() -> Self {
        Self {
            coordinates: None,
            address: NOT_AVAILABLE.to_string(),
            capture_date: NOT_AVAILABLE.to_string(),
            camera_make: NOT_AVAILABLE.to_string(),
            camera_model: NOT_AVAILABLE.to_string(),
        }
    }
}

impl NormalizedMetadata {
    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.latitude())
    }

    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.longitude())
    }

    /// Returns `true` when the address was resolved.
    #[must_use]
    pub fn has_address(&self) -> bool {
        self.address != NOT_AVAILABLE
    }

    #[must_use]
    pub fn completeness(&self) -> Completeness {
        if self.coordinates.is_some() && self.has_address() {
            Completeness::Complete
        } else {
            Completeness::Partial
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
