// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (CQRS read-side)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The binary wires adapters into application services
//!
//! # Example
//!
//! ```
//! use exif_lens::application::port::{GeocodeClient, GeocodeError};
//! use exif_lens::application::query::MetadataExtractor;
//! use exif_lens::domain::metadata::{RawMetadataMap, TagValue};
//!
//! struct Offline;
//!
//! impl GeocodeClient for Offline {
//!     fn reverse_geocode(&self, _lat: f64, _lng: f64) -> Result<String, GeocodeError> {
//!         Err(GeocodeError::Disabled)
//!     }
//! }
//!
//! let mut raw = RawMetadataMap::new();
//! raw.insert("Make", TagValue::text("Canon"));
//!
//! let meta = MetadataExtractor::new(Offline).extract(Some(&raw)).unwrap();
//! assert_eq!(meta.camera_make, "Canon");
//! assert_eq!(meta.camera_model, "N/A");
//! ```

pub mod port;
pub mod query;
