// SPDX-License-Identifier: MPL-2.0
//! Reverse geocoding port definition.
//!
//! This module defines the [`GeocodeClient`] trait used to turn decimal
//! coordinates into a human-readable address. Infrastructure adapters
//! implement it over a remote service; tests substitute a stub.

use std::fmt;

// =============================================================================
// GeocodeError
// =============================================================================

/// Errors that can occur during a reverse lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    /// Geocoding is turned off in the configuration.
    Disabled,

    /// The request could not be sent or the connection failed.
    Transport(String),

    /// The request did not complete within the configured timeout.
    Timeout,

    /// The service answered with a non-success HTTP status.
    Status(u16),

    /// The response body could not be understood.
    InvalidResponse(String),

    /// The service found no address for the coordinates.
    NoResult,
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::Disabled => write!(f, "Reverse geocoding is disabled"),
            GeocodeError::Transport(msg) => write!(f, "Geocoding request failed: {msg}"),
            GeocodeError::Timeout => write!(f, "Geocoding request timed out"),
            GeocodeError::Status(code) => write!(f, "Geocoding service returned HTTP {code}"),
            GeocodeError::InvalidResponse(msg) => {
                write!(f, "Invalid geocoding response: {msg}")
            }
            GeocodeError::NoResult => write!(f, "No address found for coordinates"),
        }
    }
}

impl std::error::Error for GeocodeError {}

// =============================================================================
// GeocodeClient Trait
// =============================================================================

/// Port for reverse geocoding.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single client can serve
/// concurrent extractions.
///
/// # Example
///
/// ```
/// use exif_lens::application::port::{GeocodeClient, GeocodeError};
///
/// struct FixedAddress;
///
/// impl GeocodeClient for FixedAddress {
///     fn reverse_geocode(&self, _lat: f64, _lng: f64) -> Result<String, GeocodeError> {
///         Ok("123 Main St".to_string())
///     }
/// }
///
/// assert_eq!(FixedAddress.reverse_geocode(0.0, 0.0).unwrap(), "123 Main St");
/// ```
pub trait GeocodeClient: Send + Sync {
    /// Resolves decimal coordinates to an address.
    ///
    /// # Errors
    ///
    /// Returns a [`GeocodeError`] when the lookup fails or finds nothing.
    fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<String, GeocodeError>;
}

impl<T: GeocodeClient + ?Sized> GeocodeClient for &T {
    fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<String, GeocodeError> {
        (**self).reverse_geocode(latitude, longitude)
    }
}

impl<T: GeocodeClient + ?Sized> GeocodeClient for Box<T> {
    fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<String, GeocodeError> {
        (**self).reverse_geocode(latitude, longitude)
    }
}

impl<T: GeocodeClient + ?Sized> GeocodeClient for std::sync::Arc<T> {
    fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<String, GeocodeError> {
        (**self).reverse_geocode(latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocode_error_display() {
        assert!(GeocodeError::Status(503).to_string().contains("503"));
        assert!(GeocodeError::Transport("dns".into())
            .to_string()
            .contains("dns"));
        assert!(GeocodeError::Disabled.to_string().contains("disabled"));
    }

    // Test that the trait is object-safe
    fn _assert_client_object_safe(_: &dyn GeocodeClient) {}
}
