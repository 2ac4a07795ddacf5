use std::sync::Arc;

use axum::{Json, extract::State};
use sarathi_dashboard::panels::route_optimization::{
    OptimizedRoute, RouteOptimizationRequest, optimize_route,
};
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

use super::ensure_known_city;

#[derive(Serialize)]
pub struct RouteOptimizationResponse {
    city: String,
    /// `None` when no sample corridor exists for the city.
    route: Option<OptimizedRoute>,
}

pub async fn route_optimization_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteOptimizationRequest>,
) -> Result<Json<RouteOptimizationResponse>, ApiError> {
    ensure_known_city(&state, &request.city)?;

    Ok(Json(RouteOptimizationResponse {
        route: optimize_route(&request),
        city: request.city,
    }))
}
