use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

#[derive(Serialize)]
pub struct CitySummary {
    name: String,
    has_metro: bool,
}

pub async fn list_cities_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CitySummary>>, ApiError> {
    let catalog = &state.catalog;

    let cities = catalog
        .city_names()
        .map(|name| CitySummary {
            name: name.to_string(),
            has_metro: catalog.has_metro(name),
        })
        .collect();

    Ok(Json(cities))
}
