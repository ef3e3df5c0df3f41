//! HTTP client for the US Census one-line-address geocoder.
//!
//! Wraps `reqwest` with typed response deserialization. The geocoder is
//! free, keyless, and fallible; callers above this layer treat every
//! failure as "no coordinate" rather than an error.

use std::time::Duration;

use reqwest::{Client, Url};

use jobreach_core::Coordinate;

use crate::error::GeocodeError;
use crate::types::CensusResponse;

const DEFAULT_BASE_URL: &str = "https://geocoding.geo.census.gov/geocoder/locations/";

/// The Census benchmark dataset to geocode against. `Public_AR_Current`
/// tracks the current public address ranges.
const BENCHMARK: &str = "Public_AR_Current";

/// Client for the US Census geocoding service.
///
/// Use [`GeocoderClient::new`] for production or
/// [`GeocoderClient::with_base_url`] to point at a mock server in tests.
pub struct GeocoderClient {
    client: Client,
    endpoint: Url,
}

impl GeocoderClient {
    /// Creates a new client pointed at the production Census geocoder.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, GeocodeError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let endpoint = format!("{}/onelineaddress", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint).map_err(|e| GeocodeError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, endpoint })
    }

    /// Geocodes a structured street address to a coordinate.
    ///
    /// Builds the one-line form `"street, city, state zip"` and queries the
    /// `onelineaddress` endpoint. Returns `Ok(None)` when the service
    /// responds successfully but with zero candidate matches; the first
    /// candidate wins otherwise.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure or a non-2xx status.
    /// - [`GeocodeError::Deserialize`] if the response body does not match
    ///   the expected shape.
    pub async fn geocode_address(
        &self,
        street: &str,
        city: &str,
        state: &str,
        zip: Option<&str>,
    ) -> Result<Option<Coordinate>, GeocodeError> {
        let one_line = one_line_address(street, city, state, zip);
        let url = self.build_url(&one_line);

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let parsed: CensusResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("onelineaddress({one_line})"),
                source: e,
            })?;

        let Some(best) = parsed.result.address_matches.first() else {
            return Ok(None);
        };
        if let Some(matched) = &best.matched_address {
            tracing::debug!(%matched, "geocoder matched address");
        }

        // Census convention: x is longitude, y is latitude.
        Ok(Some(Coordinate {
            lat: best.coordinates.y,
            lng: best.coordinates.x,
        }))
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters via [`Url::query_pairs_mut`].
    fn build_url(&self, one_line: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("address", one_line);
            pairs.append_pair("benchmark", BENCHMARK);
            pairs.append_pair("format", "json");
        }
        url
    }
}

/// Collapses structured address fields into the one-line form the geocoder
/// expects. The zip is appended after the state when present.
fn one_line_address(street: &str, city: &str, state: &str, zip: Option<&str>) -> String {
    match zip {
        Some(z) if !z.trim().is_empty() => format!("{street}, {city}, {state} {z}"),
        _ => format!("{street}, {city}, {state}"),
    }
}
