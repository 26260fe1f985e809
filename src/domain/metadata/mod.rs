// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! This module provides pure domain types for image metadata:
//! - [`tags`]: raw decoded tag maps ([`RawMetadataMap`], [`GpsMap`])
//! - [`coordinates`]: DMS to decimal-degree conversion
//! - [`GpsCoordinates`] and [`NormalizedMetadata`]: the extracted record

pub mod coordinates;
pub mod tags;
mod types;

pub use coordinates::{
    to_decimal_degrees, try_axis_to_decimal_degrees, try_to_decimal_degrees, Axis,
    CoordinateError, Dms, Hemisphere,
};
pub use tags::{GpsMap, Ratio, RawMetadataMap, TagKey, TagValue, GPS_INFO};
pub use types::{Completeness, GpsCoordinates, NormalizedMetadata, NOT_AVAILABLE};
