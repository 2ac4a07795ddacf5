use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

use super::transport_mode::TransportMode;

fn all_modes() -> BTreeSet<TransportMode> {
    TransportMode::ALL.into_iter().collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteQuery {
    pub start_location: String,
    pub end_location: String,
    pub city: String,
    #[serde(default = "all_modes")]
    pub requested_modes: BTreeSet<TransportMode>,
}

impl RouteQuery {
    pub fn new(
        start_location: impl Into<String>,
        end_location: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        RouteQuery {
            start_location: start_location.into(),
            end_location: end_location.into(),
            city: city.into(),
            requested_modes: all_modes(),
        }
    }

    pub fn with_modes<I>(mut self, modes: I) -> Self
    where
        I: IntoIterator<Item = TransportMode>,
    {
        self.requested_modes = modes.into_iter().collect();
        self
    }

    pub fn requests(&self, mode: TransportMode) -> bool {
        self.requested_modes.contains(&mode)
    }

    /// A planner form submitted without any transport mode is rejected before
    /// any route is generated.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.requested_modes.is_empty() {
            return Err(PlannerError::NoModesSelected);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_all_modes() {
        let query = RouteQuery::new("CST", "Dadar", "Mumbai");
        assert_eq!(query.requested_modes.len(), 5);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_deserialize_without_modes() {
        let query: RouteQuery = serde_json::from_str(
            r#"{ "start_location": "CST", "end_location": "Dadar", "city": "Mumbai" }"#,
        )
        .unwrap();

        assert!(query.requests(TransportMode::Cycling));
    }

    #[test]
    fn test_validate_empty_modes() {
        let query = RouteQuery::new("CST", "Dadar", "Mumbai").with_modes(Vec::<TransportMode>::new());
        assert_eq!(query.validate(), Err(PlannerError::NoModesSelected));
    }
}
