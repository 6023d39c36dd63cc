//! HTTP client for the reverse/forward geocoding API.
//!
//! Wraps `reqwest` with typed response deserialization. The API takes the
//! query (`"<lat>+<lng>"` for reverse lookups, free text for forward lookups)
//! and the API key as query parameters.

use std::time::Duration;

use reqwest::{Client, Url};
use taxmap_core::Coordinate;

use crate::error::GeocodeError;
use crate::types::{GeocodeResponse, GeocodeResult};

/// Client for the geocoding API.
///
/// Holds the HTTP client, API key, and base URL. The base URL comes from
/// configuration, so tests point it at a mock server.
pub struct GeocodeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl GeocodeClient {
    /// Creates a new geocoder client.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::BaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn new(
        api_key: &str,
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url =
            Url::parse(base_url.trim_end_matches('/')).map_err(|e| GeocodeError::BaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Reverse-geocodes a coordinate into a list of address candidates.
    ///
    /// The list is never empty: an empty result set from the API becomes
    /// [`GeocodeError::NoResults`].
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeocodeError::NoResults`] if the API matched nothing.
    /// - [`GeocodeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn reverse(&self, coord: Coordinate) -> Result<Vec<GeocodeResult>, GeocodeError> {
        let query = format!("{}+{}", coord.lat, coord.lng);
        let url = self.build_url(&query);
        let response = self.request_json(&url, &format!("reverse({coord})")).await?;

        if response.results.is_empty() {
            return Err(GeocodeError::NoResults {
                query: coord.to_string(),
            });
        }
        tracing::debug!(%coord, candidates = response.results.len(), "reverse geocode");
        Ok(response.results)
    }

    /// Forward-geocodes a free-text place name to a coordinate.
    ///
    /// Returns `Ok(None)` when the API matches nothing; an unmatched place
    /// name is an expected outcome, not an error.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeocodeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn forward(&self, place: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let url = self.build_url(place);
        let response = self.request_json(&url, &format!("forward({place})")).await?;

        let coord = response.results.into_iter().next().map(|r| Coordinate {
            lat: r.geometry.lat,
            lng: r.geometry.lng,
        });
        tracing::debug!(place, matched = coord.is_some(), "forward geocode");
        Ok(coord)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters: the query first, then the API key.
    fn build_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("key", &self.api_key);
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as a [`GeocodeResponse`].
    async fn request_json(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<GeocodeResponse, GeocodeError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}
