use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use sarathi_dashboard::panels::network_overview::{NetworkOverview, network_overview};

use crate::{error::ApiError, state::AppState};

use super::ensure_known_city;

pub async fn overview_handler(
    Path(city): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<NetworkOverview>, ApiError> {
    ensure_known_city(&state, &city)?;

    Ok(Json(network_overview(&city)))
}
