// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies.
//!
//! # Available Adapters
//!
//! - [`kamadak`]: EXIF tag decoding via `kamadak-exif` (implements [`TagDecoder`])
//! - [`nominatim`]: Reverse geocoding via a Nominatim HTTP endpoint
//!   (implements [`GeocodeClient`])
//!
//! [`TagDecoder`]: crate::application::port::TagDecoder
//! [`GeocodeClient`]: crate::application::port::GeocodeClient

pub mod kamadak;
pub mod nominatim;

// Re-export main types for convenience
pub use kamadak::ExifTagDecoder;
pub use nominatim::{DisabledGeocoder, NominatimGeocoder};
