use thiserror::Error;

/// Errors returned by the geocoder client.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// HTTP status from the geocoding API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reverse geocoding returned an empty result list. Unlike an empty
    /// tax lookup, this is fatal: without address components there is
    /// nothing left to resolve.
    #[error("geocoder returned no results for {query}")]
    NoResults { query: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not a valid URL.
    #[error("invalid geocoder base URL '{url}': {reason}")]
    BaseUrl { url: String, reason: String },
}
