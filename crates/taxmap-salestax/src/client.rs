//! HTTP client for the sales-tax rate API.
//!
//! Rates are queryable by ZIP code or by city+state. The API key travels in
//! the `X-Api-Key` request header and the response is a bare JSON array of
//! records; an empty array means "no data for that query", which both lookup
//! methods surface as `Ok(None)` rather than an error.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::SalesTaxError;
use crate::types::TaxRecord;

const API_KEY_HEADER: &str = "X-Api-Key";

/// Client for the sales-tax rate API.
pub struct SalesTaxClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl SalesTaxClient {
    /// Creates a new sales-tax client.
    ///
    /// # Errors
    ///
    /// Returns [`SalesTaxError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SalesTaxError::BaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn new(
        api_key: &str,
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SalesTaxError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url =
            Url::parse(base_url.trim_end_matches('/')).map_err(|e| SalesTaxError::BaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Looks up the tax record for a ZIP code.
    ///
    /// Returns `Ok(None)` when the API has no data for the ZIP.
    ///
    /// # Errors
    ///
    /// - [`SalesTaxError::Http`] on network failure or non-2xx HTTP status.
    /// - [`SalesTaxError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn by_zip(&self, zip: &str) -> Result<Option<TaxRecord>, SalesTaxError> {
        let url = self.build_url(&[("zip_code", zip)]);
        let record = self
            .request_first_record(&url, &format!("zip_code={zip}"))
            .await?;
        tracing::debug!(zip, found = record.is_some(), "tax lookup by ZIP");
        Ok(record)
    }

    /// Looks up the tax record for a city+state pair.
    ///
    /// Returns `Ok(None)` when the API has no data for the pair.
    ///
    /// # Errors
    ///
    /// - [`SalesTaxError::Http`] on network failure or non-2xx HTTP status.
    /// - [`SalesTaxError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn by_city_state(
        &self,
        city: &str,
        state: &str,
    ) -> Result<Option<TaxRecord>, SalesTaxError> {
        let url = self.build_url(&[("city", city), ("state", state)]);
        let record = self
            .request_first_record(&url, &format!("city={city}, state={state}"))
            .await?;
        tracing::debug!(city, state, found = record.is_some(), "tax lookup by city/state");
        Ok(record)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters.
    fn build_url(&self, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request with the API key header, asserts a 2xx HTTP
    /// status, parses the response as an array of records, and returns the
    /// first one (if any).
    async fn request_first_record(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<Option<TaxRecord>, SalesTaxError> {
        let response = self
            .client
            .get(url.clone())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let records: Vec<TaxRecord> =
            serde_json::from_str(&body).map_err(|e| SalesTaxError::Deserialize {
                context: context.to_string(),
                source: e,
            })?;
        Ok(records.into_iter().next())
    }
}
