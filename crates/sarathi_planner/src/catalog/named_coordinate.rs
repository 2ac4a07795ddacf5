use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NamedCoordinate {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl NamedCoordinate {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        NamedCoordinate {
            name: name.into(),
            lat,
            lon,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}
