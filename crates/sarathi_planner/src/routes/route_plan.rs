use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::route_option::RouteOption;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RoutePlan {
    pub start_location: String,
    pub end_location: String,
    pub city: String,
    pub distance_km: f64,
    pub total_routes: usize,
    /// Sorted by increasing duration.
    pub routes: Vec<RouteOption>,
}

impl RoutePlan {
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn fastest(&self) -> Option<&RouteOption> {
        self.routes.first()
    }

    pub fn summary(&self) -> String {
        if self.is_empty() {
            format!(
                "No routes found between {} and {}. Please try different locations or transport modes.",
                self.start_location, self.end_location
            )
        } else {
            format!(
                "Found {} routes from {} to {}",
                self.total_routes, self.start_location, self.end_location
            )
        }
    }
}
