// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`metadata`]: Tag decoding from raw image bytes
//! - [`geocode`]: Reverse geocoding of decimal coordinates
//!
//! # Design Notes
//!
//! - All traits use domain types only (no `exif` or `reqwest` types)
//! - Traits are `Send + Sync` for thread-safe usage
//! - Methods return `Result` with port-level error types
//! - No `async fn`: each extraction performs at most one blocking lookup

pub mod geocode;
pub mod metadata;

// Re-export main types for convenience
pub use geocode::{GeocodeClient, GeocodeError};
pub use metadata::{MetadataError, TagDecoder};
