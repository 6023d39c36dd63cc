use taxmap_geocode::GeocodeError;
use taxmap_salestax::SalesTaxError;
use thiserror::Error;

/// Errors surfaced by a resolution.
///
/// Every geocoding error is fatal to the resolution that triggered it,
/// including the no-results case. Tax lookup errors here are transport-level
/// only; an empty tax result is handled inside the resolver as a fallback
/// branch and never appears as an error.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("geocoding failed: {0}")]
    Geocode(#[from] GeocodeError),

    #[error("tax lookup failed: {0}")]
    SalesTax(#[from] SalesTaxError),
}
