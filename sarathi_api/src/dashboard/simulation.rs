use std::sync::Arc;

use axum::{Json, extract::State};
use jiff::Zoned;
use sarathi_dashboard::panels::simulation::{SimulationParams, SimulationReport, run_simulation};
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

use super::ensure_known_city;

#[derive(Deserialize)]
pub struct SimulationRequest {
    city: String,
    #[serde(default)]
    params: SimulationParams,
}

pub async fn simulation_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SimulationRequest>,
) -> Result<Json<SimulationReport>, ApiError> {
    ensure_known_city(&state, &request.city)?;

    let report = run_simulation(&request.city, Zoned::now().datetime(), request.params)?;

    Ok(Json(report))
}
