// SPDX-License-Identifier: MPL-2.0
//! Tag decoding port definition.
//!
//! This module defines the [`TagDecoder`] trait that turns raw image bytes into
//! a [`RawMetadataMap`]. Infrastructure adapters implement it using an EXIF
//! library.
//!
//! A missing or unreadable tag container is not an error for callers of
//! [`TagDecoder::decode`]: it is the legitimate "no metadata" outcome and is
//! reported as `None`. The reason is available through
//! [`TagDecoder::try_decode`] for logging.

use crate::domain::metadata::RawMetadataMap;
use std::fmt;

// =============================================================================
// MetadataError
// =============================================================================

/// Reasons no tag container could be obtained from an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// The input contained no bytes.
    EmptyInput,

    /// The container format is not one the decoder understands.
    UnsupportedFormat,

    /// The image was read but carries no tag container.
    NotFound,

    /// The tag container is present but corrupted.
    CorruptedMetadata(String),

    /// The bytes could not be read.
    ReadFailed(String),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::EmptyInput => write!(f, "Image data is empty"),
            MetadataError::UnsupportedFormat => write!(f, "Format does not support metadata"),
            MetadataError::NotFound => write!(f, "No metadata found in image"),
            MetadataError::CorruptedMetadata(msg) => write!(f, "Corrupted metadata: {msg}"),
            MetadataError::ReadFailed(msg) => write!(f, "Failed to read metadata: {msg}"),
        }
    }
}

impl std::error::Error for MetadataError {}

// =============================================================================
// TagDecoder Trait
// =============================================================================

/// Port for decoding embedded tags from image bytes.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` for concurrent decoding.
pub trait TagDecoder: Send + Sync {
    /// Decodes the tag container embedded in `image`.
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] describing why no tags were obtained.
    fn try_decode(&self, image: &[u8]) -> Result<RawMetadataMap, MetadataError>;

    /// Decodes the tag container, mapping every failure to `None`.
    ///
    /// The failure reason is logged, not returned.
    fn decode(&self, image: &[u8]) -> Option<RawMetadataMap> {
        match self.try_decode(image) {
            Ok(tags) => Some(tags),
            Err(MetadataError::NotFound | MetadataError::EmptyInput) => {
                tracing::debug!("image carries no metadata");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not decode image metadata");
                None
            }
        }
    }
}
