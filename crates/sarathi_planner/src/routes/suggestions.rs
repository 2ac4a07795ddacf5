use std::collections::BTreeSet;

use crate::catalog::catalog::Catalog;

pub const CURRENT_LOCATION: &str = "Current Location";

/// Place names offered by the route planner for `city`: "Current Location"
/// first, then the sorted, de-duplicated facility and landmark names.
pub fn location_suggestions(catalog: &Catalog, city: &str) -> Vec<String> {
    let infrastructure = catalog.infrastructure_for(city);

    let mut names: BTreeSet<String> = infrastructure.names().map(str::to_string).collect();
    names.extend(catalog.extra_suggestions_for(city).iter().cloned());

    if names.is_empty() {
        names.extend(catalog.default_suggestions.iter().cloned());
    }

    std::iter::once(CURRENT_LOCATION.to_string())
        .chain(names)
        .collect()
}

/// Label standing in for the user's GPS position, placed at the city centre.
pub fn current_location_label(catalog: &Catalog, city: &str) -> String {
    let center = catalog.center_for(city);
    format!("Your Location ({:.4}, {:.4})", center.lat(), center.lon())
}

/// Replaces the "Current Location" placeholder with [`current_location_label`].
pub fn resolve_start_label(catalog: &Catalog, city: &str, start: &str) -> String {
    if start == CURRENT_LOCATION {
        current_location_label(catalog, city)
    } else {
        start.to_string()
    }
}
