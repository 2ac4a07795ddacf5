use std::{collections::HashSet, path::Path};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{coordinate::Coordinate, error::CatalogError};

use super::{city::City, infrastructure::Infrastructure, named_coordinate::NamedCoordinate};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// City lookup tables: selectable cities, landmark coordinates, transport
/// infrastructure and the fallbacks used when a city has no data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub default_center: Coordinate,
    pub metro_cities: Vec<String>,
    pub placeholder_landmarks: Vec<NamedCoordinate>,
    pub default_suggestions: Vec<String>,
    pub cities: Vec<City>,
}

impl Catalog {
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        info!("Loading city catalog from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Loads the catalog at `path` when given, the embedded one otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.cities.is_empty() {
            return Err(CatalogError::NoCities);
        }

        if self.placeholder_landmarks.is_empty() {
            return Err(CatalogError::EmptyPlaceholderLandmarks);
        }

        let mut seen = HashSet::with_capacity(self.cities.len());
        for city in &self.cities {
            if !seen.insert(city.name()) {
                return Err(CatalogError::DuplicateCity(city.name.clone()));
            }
        }

        Ok(())
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city_names(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(|city| city.name())
    }

    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.name == name)
    }

    pub fn is_known_city(&self, name: &str) -> bool {
        self.city(name).is_some()
    }

    pub fn has_metro(&self, name: &str) -> bool {
        self.metro_cities.iter().any(|city| city == name)
    }

    /// The city's landmark table, or the placeholder table when the city has none.
    /// Never empty.
    pub fn landmarks_for(&self, name: &str) -> &[NamedCoordinate] {
        match self.city(name) {
            Some(city) if !city.landmarks.is_empty() => &city.landmarks,
            _ => {
                debug!("No landmark table for {name}, using placeholder landmarks");
                &self.placeholder_landmarks
            }
        }
    }

    pub fn infrastructure_for(&self, name: &str) -> Infrastructure {
        self.city(name)
            .and_then(|city| city.infrastructure.clone())
            .unwrap_or_default()
    }

    pub fn center_for(&self, name: &str) -> Coordinate {
        self.city(name)
            .and_then(|city| city.center)
            .unwrap_or(self.default_center)
    }

    pub fn extra_suggestions_for(&self, name: &str) -> &[String] {
        self.city(name)
            .map(|city| city.extra_suggestions.as_slice())
            .unwrap_or_default()
    }
}
