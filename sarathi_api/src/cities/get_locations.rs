use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use sarathi_planner::routes::suggestions::location_suggestions;

use crate::{error::ApiError, state::AppState};

/// Location suggestions for the planner form. Cities without data get the
/// generic suggestion list rather than an error.
pub async fn get_locations_handler(
    Path(city): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(location_suggestions(&state.catalog, &city)))
}
