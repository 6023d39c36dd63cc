//! Location resolution: reverse geocode a coordinate, then walk the tax
//! lookup tiers in order until one yields a record.
//!
//! Each resolution is one sequential chain of at most three outbound calls
//! (reverse geocode, ZIP lookup, city/state lookup); every call is gated on
//! the previous step's outcome, so nothing runs concurrently and no state
//! survives the call.

use taxmap_core::{AppConfig, Coordinate};
use taxmap_geocode::{first_postcode, AddressComponents, GeocodeClient};
use taxmap_salestax::{SalesTaxClient, TaxRecord};

use crate::error::ResolveError;
use crate::report::{describe_area, Resolution, TaxReport};
use crate::strategy::{lookup_plan, LookupStrategy};

/// Orchestrates the geocoder and the tax API into a single
/// "tax data for this coordinate" operation with tiered fallback.
pub struct LocationResolver {
    geocoder: GeocodeClient,
    taxes: SalesTaxClient,
}

impl LocationResolver {
    #[must_use]
    pub fn new(geocoder: GeocodeClient, taxes: SalesTaxClient) -> Self {
        Self { geocoder, taxes }
    }

    /// Builds both API clients from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Geocode`] / [`ResolveError::SalesTax`] if a
    /// client cannot be constructed (bad base URL, unusable key material).
    pub fn from_config(config: &AppConfig) -> Result<Self, ResolveError> {
        let geocoder = GeocodeClient::new(
            &config.geocoder_api_key,
            &config.geocoder_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?;
        let taxes = SalesTaxClient::new(
            &config.salestax_api_key,
            &config.salestax_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?;
        Ok(Self::new(geocoder, taxes))
    }

    /// Resolves the tax data for a coordinate.
    ///
    /// Reverse-geocodes the coordinate, takes the address from the first
    /// candidate, scans all candidates for the first postcode, then walks
    /// the lookup plan. Empty tax results fall through to the next tier;
    /// when every tier comes up empty the result is
    /// [`Resolution::Unresolved`] with a description of the area.
    ///
    /// # Errors
    ///
    /// Propagates [`ResolveError::Geocode`] from the geocoding step
    /// (including the no-results case) and [`ResolveError::SalesTax`] for
    /// tax API transport failures.
    pub async fn resolve(&self, coord: Coordinate) -> Result<Resolution, ResolveError> {
        let candidates = self.geocoder.reverse(coord).await?;
        let address = candidates
            .first()
            .map(AddressComponents::from_result)
            .unwrap_or_default();
        let candidate_zip = first_postcode(&candidates);

        for strategy in lookup_plan(candidate_zip.as_deref(), &address) {
            tracing::debug!(%coord, ?strategy, "trying tax lookup tier");
            if let Some((record, zip_code)) = self.try_strategy(&strategy).await? {
                return Ok(Resolution::Resolved(TaxReport::from_record(
                    address, zip_code, record,
                )));
            }
        }

        let place = describe_area(&address);
        tracing::warn!(%coord, place, "no tax data on any lookup tier");
        Ok(Resolution::Unresolved { place })
    }

    /// Forward-geocodes a place name and resolves the matched coordinate.
    ///
    /// Returns `Ok(None)` when the place name matches nothing.
    ///
    /// # Errors
    ///
    /// Same as [`LocationResolver::resolve`].
    pub async fn resolve_place(
        &self,
        query: &str,
    ) -> Result<Option<(Coordinate, Resolution)>, ResolveError> {
        let Some(coord) = self.geocoder.forward(query).await? else {
            return Ok(None);
        };
        let resolution = self.resolve(coord).await?;
        Ok(Some((coord, resolution)))
    }

    /// Runs one lookup tier. `None` means the tier had no data; the
    /// accompanying ZIP is the one the report should carry if this tier won.
    async fn try_strategy(
        &self,
        strategy: &LookupStrategy,
    ) -> Result<Option<(TaxRecord, Option<String>)>, ResolveError> {
        match strategy {
            LookupStrategy::Zip(zip) => {
                let record = self.taxes.by_zip(zip).await?;
                Ok(record.map(|r| (r, Some(zip.clone()))))
            }
            LookupStrategy::CityState { city, state } => {
                let record = self.taxes.by_city_state(city, state).await?;
                Ok(record.map(|r| {
                    let zip = r.zip_code.clone();
                    (r, zip)
                }))
            }
        }
    }
}
