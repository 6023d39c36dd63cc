use thiserror::Error;

/// Errors returned by the sales-tax API client.
///
/// An empty result set is NOT an error: both lookups return `Ok(None)` for
/// it, so callers can fall through to the next lookup tier.
#[derive(Debug, Error)]
pub enum SalesTaxError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// HTTP status from the tax API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not a valid URL.
    #[error("invalid sales-tax base URL '{url}': {reason}")]
    BaseUrl { url: String, reason: String },
}
