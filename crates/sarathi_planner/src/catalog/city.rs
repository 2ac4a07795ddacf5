use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

use super::{infrastructure::Infrastructure, named_coordinate::NamedCoordinate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct City {
    pub name: String,
    pub center: Option<Coordinate>,

    /// Ordered place-name table used to resolve free-text locations.
    #[serde(default)]
    pub landmarks: Vec<NamedCoordinate>,

    /// Additional names offered by the route planner.
    #[serde(default)]
    pub extra_suggestions: Vec<String>,

    pub infrastructure: Option<Infrastructure>,
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }
}
