// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Geocoder**: Reverse geocoding endpoint, identity and timeout
//! - **Input**: Limits on image input size

// ==========================================================================
// Geocoder Defaults
// ==========================================================================

/// Public Nominatim instance.
pub const DEFAULT_GEOCODER_ENDPOINT: &str = "https://nominatim.openstreetmap.org";

/// User agent sent with every lookup. Nominatim's usage policy requires one
/// that identifies the application.
pub const DEFAULT_GEOCODER_USER_AGENT: &str = "exif_lens/0.1.0";

/// Language requested for addresses.
pub const DEFAULT_GEOCODER_LANGUAGE: &str = "en";

/// Default request timeout (in seconds).
pub const DEFAULT_GEOCODER_TIMEOUT_SECS: u64 = 10;

/// Minimum request timeout (in seconds).
pub const MIN_GEOCODER_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_GEOCODER_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Largest image file read from disk, in bytes (64 MB).
pub const MAX_IMAGE_BYTES: u64 = 64 * 1024 * 1024;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_GEOCODER_TIMEOUT_SECS > 0);
    assert!(MAX_GEOCODER_TIMEOUT_SECS >= MIN_GEOCODER_TIMEOUT_SECS);
    assert!(DEFAULT_GEOCODER_TIMEOUT_SECS >= MIN_GEOCODER_TIMEOUT_SECS);
    assert!(DEFAULT_GEOCODER_TIMEOUT_SECS <= MAX_GEOCODER_TIMEOUT_SECS);
    assert!(MAX_IMAGE_BYTES > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoder_timeout_defaults_are_valid() {
        assert_eq!(DEFAULT_GEOCODER_TIMEOUT_SECS, 10);
        assert!(DEFAULT_GEOCODER_TIMEOUT_SECS >= MIN_GEOCODER_TIMEOUT_SECS);
        assert!(DEFAULT_GEOCODER_TIMEOUT_SECS <= MAX_GEOCODER_TIMEOUT_SECS);
    }

    #[test]
    fn geocoder_language_defaults_to_english() {
        assert_eq!(DEFAULT_GEOCODER_LANGUAGE, "en");
    }
}
