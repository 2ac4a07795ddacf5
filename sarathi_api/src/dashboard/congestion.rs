use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use sarathi_dashboard::panels::congestion_analysis::{CongestionAnalysis, congestion_analysis};

use crate::{error::ApiError, state::AppState};

use super::ensure_known_city;

pub async fn congestion_handler(
    Path(city): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<CongestionAnalysis>, ApiError> {
    ensure_known_city(&state, &city)?;

    Ok(Json(congestion_analysis(&city)))
}
