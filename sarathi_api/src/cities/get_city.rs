use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use geojson::FeatureCollection;
use sarathi_planner::coordinate::Coordinate;
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

#[derive(Serialize)]
pub struct CityResponse {
    name: String,
    center: Coordinate,
    has_metro: bool,
    current_location: String,
    infrastructure: FeatureCollection,
}

pub async fn get_city_handler(
    Path(city): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<CityResponse>, ApiError> {
    let catalog = &state.catalog;
    if !catalog.is_known_city(&city) {
        return Err(ApiError::NotFound(format!("Unknown city {city:?}")));
    }

    Ok(Json(CityResponse {
        center: catalog.center_for(&city),
        has_metro: catalog.has_metro(&city),
        current_location: sarathi_planner::routes::suggestions::current_location_label(
            catalog, &city,
        ),
        infrastructure: catalog.infrastructure_for(&city).to_feature_collection(),
        name: city,
    }))
}
