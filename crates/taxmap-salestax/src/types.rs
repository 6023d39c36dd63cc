//! Sales-tax API response types.
//!
//! The API returns a bare JSON array of tax records. Only `state_rate` is
//! guaranteed; the finer-grained rates and the echoed ZIP vary by record.
//! Rates arrive as JSON numbers and are held as `Decimal` so display math
//! stays exact.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tax-rate record as returned by the sales-tax API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRecord {
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub state_rate: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_rate: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub city_rate: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub county_rate: Option<Decimal>,
}
