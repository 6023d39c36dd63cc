use taxmap_geocode::AddressComponents;

/// One tier of the tax lookup plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupStrategy {
    /// Query the tax API by ZIP code.
    Zip(String),
    /// Query the tax API by city and state.
    CityState { city: String, state: String },
}

/// Builds the ordered lookup plan for a geocoded location: ZIP first when a
/// candidate was found, then city+state when both halves are known.
///
/// The plan is data, not control flow: a third tier is one more push here,
/// and the resolver walks whatever comes out in order.
#[must_use]
pub fn lookup_plan(
    candidate_zip: Option<&str>,
    address: &AddressComponents,
) -> Vec<LookupStrategy> {
    let mut plan = Vec::new();
    if let Some(zip) = candidate_zip {
        plan.push(LookupStrategy::Zip(zip.to_owned()));
    }
    if let (Some(city), Some(state)) = (&address.city, &address.state) {
        plan.push(LookupStrategy::CityState {
            city: city.clone(),
            state: state.clone(),
        });
    }
    plan
}
