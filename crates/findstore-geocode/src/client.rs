//! HTTP client for the Google Maps Geocoding API.
//!
//! One `GET` per lookup, no retries. Anything the service says other than a
//! first result with an in-range coordinate is reported as "no result".

use std::future::Future;
use std::time::Duration;

use findstore_core::config::DEFAULT_GEOCODER_URL;
use findstore_core::{AppConfig, Coordinate};
use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::GeocodeResponse;
use crate::Geocoder;

/// Geocoder backed by the Google Maps Geocoding API.
///
/// Use [`GoogleGeocoder::new`] for production or
/// [`GoogleGeocoder::with_base_url`] to point at a mock server in tests.
pub struct GoogleGeocoder {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
}

impl GoogleGeocoder {
    /// Creates a geocoder pointed at the production Google endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Client`] if the `reqwest::Client` cannot be
    /// constructed.
    pub fn new(
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeocodeError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_GEOCODER_URL)
    }

    /// Creates a geocoder with a custom endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Client`] if the `reqwest::Client` cannot be
    /// constructed, or [`GeocodeError::InvalidBaseUrl`] if `base_url` does
    /// not parse.
    pub fn with_base_url(
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(GeocodeError::Client)?;

        let base_url = Url::parse(base_url).map_err(|e| GeocodeError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.map(str::to_owned),
            base_url,
        })
    }

    /// Builds a geocoder from the application config.
    ///
    /// # Errors
    ///
    /// See [`GoogleGeocoder::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, GeocodeError> {
        Self::with_base_url(
            config.google_maps_api_key.as_deref(),
            config.request_timeout_secs,
            &config.user_agent,
            &config.geocoder_url,
        )
    }

    /// Looks up `location` and returns the first result's coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Unreachable`] when no HTTP response arrives
    /// or the body cannot be read.
    pub async fn geocode(&self, location: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let url = self.build_url(location);
        tracing::debug!(location, "requesting geocode");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(GeocodeError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, location, "geocoding service returned non-success status");
            return Ok(None);
        }

        let body = response.text().await.map_err(GeocodeError::Unreachable)?;
        let parsed: GeocodeResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, location, "geocoding response was not valid JSON");
                return Ok(None);
            }
        };

        Ok(Self::first_coordinate(location, parsed))
    }

    /// Builds the request URL with percent-encoded `address` and `key`
    /// query parameters appended to any already on the base URL.
    fn build_url(&self, location: &str) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("address", location);
            if let Some(key) = &self.api_key {
                pairs.append_pair("key", key);
            }
        }
        url
    }

    fn first_coordinate(location: &str, response: GeocodeResponse) -> Option<Coordinate> {
        if response.status != "OK" {
            tracing::warn!(
                status = %response.status,
                message = response.error_message.as_deref().unwrap_or(""),
                location,
                "geocoding service returned no result"
            );
            return None;
        }

        let Some(first) = response.results.into_iter().next() else {
            tracing::warn!(location, "geocoding service returned an empty result list");
            return None;
        };

        let coordinate = Coordinate::new(first.geometry.location.lat, first.geometry.location.lng);
        if !coordinate.is_valid() {
            tracing::warn!(%coordinate, location, "geocoded coordinate out of range");
            return None;
        }

        tracing::info!(
            %coordinate,
            formatted_address = first.formatted_address.as_deref().unwrap_or(""),
            "geocoded starting location"
        );
        Some(coordinate)
    }
}

impl Geocoder for GoogleGeocoder {
    fn resolve(
        &self,
        location: &str,
    ) -> impl Future<Output = Result<Option<Coordinate>, GeocodeError>> + Send {
        self.geocode(location)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
