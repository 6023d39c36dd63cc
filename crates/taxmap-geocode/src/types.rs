//! Geocoding API response types.
//!
//! The API wraps every response in a `{"results": [...]}` envelope where each
//! result carries a `components` object (address fields, any of which may be
//! absent) and a `geometry` object (the matched point).

use serde::{Deserialize, Serialize};

/// Top-level envelope for all geocoding API responses.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

/// A single geocoding candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub components: GeocodeComponents,
    pub geometry: Geometry,
}

/// Address fields of a geocoding result. Every field may be absent; the
/// locality in particular arrives as `city`, `town`, or `village` depending
/// on which granularity the geocoder matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeComponents {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
}

impl GeocodeComponents {
    /// The locality name, preferring `city`, then `town`, then `village`.
    fn locality(&self) -> Option<&String> {
        self.city
            .as_ref()
            .or(self.town.as_ref())
            .or(self.village.as_ref())
    }
}

/// The matched coordinate of a geocoding result.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Geometry {
    pub lat: f64,
    pub lng: f64,
}

/// Address components distilled from a geocoding result, with the
/// city/town/village variants collapsed into a single locality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressComponents {
    pub city: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
}

impl AddressComponents {
    #[must_use]
    pub fn from_result(result: &GeocodeResult) -> Self {
        let c = &result.components;
        Self {
            city: c.locality().cloned(),
            county: c.county.clone(),
            state: c.state.clone(),
            country: c.country.clone(),
            postcode: c.postcode.clone(),
        }
    }
}

/// Scans all geocoding results, in order, for the first one carrying a
/// postcode. The most precise result is not always the one with a postal
/// code attached, so the first result alone is not enough.
#[must_use]
pub fn first_postcode(results: &[GeocodeResult]) -> Option<String> {
    results
        .iter()
        .find_map(|r| r.components.postcode.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(components: GeocodeComponents) -> GeocodeResult {
        GeocodeResult {
            components,
            geometry: Geometry { lat: 0.0, lng: 0.0 },
        }
    }

    #[test]
    fn locality_prefers_city_over_town_and_village() {
        let components = GeocodeComponents {
            city: Some("Portland".to_string()),
            town: Some("Sellwood".to_string()),
            village: Some("Oaks".to_string()),
            ..GeocodeComponents::default()
        };
        let address = AddressComponents::from_result(&result_with(components));
        assert_eq!(address.city.as_deref(), Some("Portland"));
    }

    #[test]
    fn locality_falls_back_to_town_then_village() {
        let town_only = GeocodeComponents {
            town: Some("Hood River".to_string()),
            ..GeocodeComponents::default()
        };
        let address = AddressComponents::from_result(&result_with(town_only));
        assert_eq!(address.city.as_deref(), Some("Hood River"));

        let village_only = GeocodeComponents {
            village: Some("Mosier".to_string()),
            ..GeocodeComponents::default()
        };
        let address = AddressComponents::from_result(&result_with(village_only));
        assert_eq!(address.city.as_deref(), Some("Mosier"));
    }

    #[test]
    fn first_postcode_scans_past_results_without_one() {
        let results = vec![
            result_with(GeocodeComponents {
                county: Some("Multnomah County".to_string()),
                ..GeocodeComponents::default()
            }),
            result_with(GeocodeComponents {
                postcode: Some("97201".to_string()),
                ..GeocodeComponents::default()
            }),
            result_with(GeocodeComponents {
                postcode: Some("97202".to_string()),
                ..GeocodeComponents::default()
            }),
        ];
        assert_eq!(first_postcode(&results).as_deref(), Some("97201"));
    }

    #[test]
    fn first_postcode_is_none_when_no_result_has_one() {
        let results = vec![result_with(GeocodeComponents::default())];
        assert_eq!(first_postcode(&results), None);
    }

    #[test]
    fn components_deserialize_with_all_fields_absent() {
        let parsed: GeocodeComponents = serde_json::from_str("{}").unwrap();
        assert!(parsed.city.is_none());
        assert!(parsed.postcode.is_none());
    }
}
