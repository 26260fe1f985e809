// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! This module contains query services for reading domain data.
//! These services do not modify state; they provide read-only access.
//!
//! # Available Services
//!
//! - [`extract`]: Image metadata normalization (`MetadataExtractor`)
//!
//! # Design Notes
//!
//! Query services are part of the application layer because they:
//! - Coordinate domain operations
//! - Use infrastructure through ports (tag decoding, geocoding)
//! - Implement application-specific use cases

pub mod extract;

// Re-export main types
pub use extract::MetadataExtractor;
