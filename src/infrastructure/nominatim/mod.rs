// SPDX-License-Identifier: MPL-2.0
//! Nominatim adapter implementing the [`GeocodeClient`] port.
//!
//! Sends one blocking `GET /reverse` request per lookup. The HTTP client is
//! built once with the configured user agent and timeout, so a timed-out
//! request surfaces as [`GeocodeError::Timeout`] instead of blocking the
//! caller indefinitely.
//!
//! [`GeocodeClient`]: crate::application::port::GeocodeClient

use crate::application::port::{GeocodeClient, GeocodeError};
use crate::config::GeocoderConfig;
use crate::error::{self, Error};
use serde::Deserialize;
use std::time::Duration;

/// Subset of the Nominatim `jsonv2` reverse response that is used.
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
    error: Option<String>,
}

/// Reverse geocoder backed by a Nominatim endpoint.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: reqwest::blocking::Client,
    reverse_url: String,
    language: String,
}

impl NominatimGeocoder {
    /// Builds a geocoder from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the endpoint is empty or the HTTP client
    /// cannot be created.
    pub fn new(config: &GeocoderConfig) -> error::Result<Self> {
        let endpoint = config.endpoint.trim().trim_end_matches('/');
        if endpoint.is_empty() {
            return Err(Error::Config("geocoder endpoint is empty".to_string()));
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            reverse_url: format!("{endpoint}/reverse"),
            language: config.language.clone(),
        })
    }

    /// Full URL of the reverse endpoint.
    #[must_use]
    pub fn reverse_url(&self) -> &str {
        &self.reverse_url
    }
}

impl GeocodeClient for NominatimGeocoder {
    fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<String, GeocodeError> {
        let lat = format!("{latitude:.7}");
        let lon = format!("{longitude:.7}");
        let query = [
            ("format", "jsonv2"),
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("accept-language", self.language.as_str()),
        ];

        tracing::debug!(url = %self.reverse_url, %lat, %lon, "reverse geocoding");
        let response = self
            .client
            .get(&self.reverse_url)
            .query(&query)
            .send()
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let body: ReverseResponse = response
            .json()
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;
        address_from_response(body)
    }
}

fn map_transport_error(err: reqwest::Error) -> GeocodeError {
    if err.is_timeout() {
        GeocodeError::Timeout
    } else {
        GeocodeError::Transport(err.to_string())
    }
}

fn address_from_response(body: ReverseResponse) -> Result<String, GeocodeError> {
    if let Some(error) = body.error {
        tracing::debug!(%error, "geocoder reported no match");
        return Err(GeocodeError::NoResult);
    }
    match body.display_name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(GeocodeError::NoResult),
    }
}

/// Geocoder used when lookups are turned off.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGeocoder;

impl GeocodeClient for DisabledGeocoder {
    fn reverse_geocode(&self, _latitude: f64, _longitude: f64) -> Result<String, GeocodeError> {
        Err(GeocodeError::Disabled)
    }
}
