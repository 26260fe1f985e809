// SPDX-License-Identifier: MPL-2.0
//! `exif_lens` extracts location and capture metadata from photographs.
//!
//! Raw EXIF tags are decoded from image bytes, GPS coordinates are converted
//! from degrees/minutes/seconds to signed decimal degrees, and an optional
//! reverse-geocoding lookup turns them into a human-readable address.

#![doc(html_root_url = "https://docs.rs/exif_lens/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;

#[cfg(test)]
pub(crate) mod test_utils;
