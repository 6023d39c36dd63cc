use rust_decimal::Decimal;
use taxmap_geocode::AddressComponents;
use taxmap_salestax::TaxRecord;

/// Placeholder when a location yields no usable address component at all.
const UNIDENTIFIABLE_AREA: &str = "an unidentifiable area";

/// Outcome of a resolution: either a full tax report, or a human-readable
/// description of where the coordinate landed when no tax data exists for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(TaxReport),
    Unresolved { place: String },
}

/// A tax record merged with the address it was resolved for.
///
/// `total_rate` is always present: when the API record carries no
/// distinguished total, it equals `state_rate` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxReport {
    pub address: AddressComponents,
    /// The ZIP the record was found under (the queried ZIP for the ZIP tier,
    /// the record's own ZIP, if any, for the city/state tier).
    pub zip_code: Option<String>,
    pub state_rate: Decimal,
    pub total_rate: Decimal,
    pub city_rate: Option<Decimal>,
    pub county_rate: Option<Decimal>,
}

impl TaxReport {
    pub(crate) fn from_record(
        address: AddressComponents,
        zip_code: Option<String>,
        record: TaxRecord,
    ) -> Self {
        Self {
            address,
            zip_code,
            state_rate: record.state_rate,
            total_rate: record.total_rate.unwrap_or(record.state_rate),
            city_rate: record.city_rate,
            county_rate: record.county_rate,
        }
    }
}

/// Joins whichever of city, county, state, and country are present, in that
/// order, comma-separated. All absent yields the fixed placeholder.
#[must_use]
pub fn describe_area(address: &AddressComponents) -> String {
    let joined = [
        address.city.as_deref(),
        address.county.as_deref(),
        address.state.as_deref(),
        address.country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ");

    if joined.is_empty() {
        UNIDENTIFIABLE_AREA.to_string()
    } else {
        joined
    }
}
