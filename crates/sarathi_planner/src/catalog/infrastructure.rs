use geojson::{Feature, FeatureCollection, Geometry, Value};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::named_coordinate::NamedCoordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FacilityKind {
    RailwayStation,
    MetroStation,
    BusStation,
    Airport,
}

/// Transport facilities known for a city.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Infrastructure {
    #[serde(default)]
    pub railway_stations: Vec<NamedCoordinate>,
    #[serde(default)]
    pub airports: Vec<NamedCoordinate>,
    #[serde(default)]
    pub bus_stations: Vec<NamedCoordinate>,
    #[serde(default)]
    pub metro_stations: Vec<NamedCoordinate>,
}

impl Infrastructure {
    pub fn is_empty(&self) -> bool {
        self.railway_stations.is_empty()
            && self.airports.is_empty()
            && self.bus_stations.is_empty()
            && self.metro_stations.is_empty()
    }

    /// Railway, metro, bus and airport facilities, in that order.
    pub fn facilities(&self) -> impl Iterator<Item = (FacilityKind, &NamedCoordinate)> {
        let railway = self
            .railway_stations
            .iter()
            .map(|facility| (FacilityKind::RailwayStation, facility));
        let metro = self
            .metro_stations
            .iter()
            .map(|facility| (FacilityKind::MetroStation, facility));
        let bus = self
            .bus_stations
            .iter()
            .map(|facility| (FacilityKind::BusStation, facility));
        let airports = self
            .airports
            .iter()
            .map(|facility| (FacilityKind::Airport, facility));

        railway.chain(metro).chain(bus).chain(airports)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.facilities().map(|(_, facility)| facility.name())
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        let features = self
            .facilities()
            .map(|(kind, facility)| {
                let point: geo::Point<f64> = facility.coordinate().into();
                let mut feature = Feature {
                    geometry: Some(Geometry::new(Value::from(&point))),
                    ..Default::default()
                };
                feature.set_property("name", facility.name());
                feature.set_property("kind", serde_json::json!(kind));
                feature
            })
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}
