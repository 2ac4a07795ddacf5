use std::sync::Arc;

use axum::{Json, extract::State};
use sarathi_planner::routes::{
    route_generator::SyntheticRouteGenerator, route_plan::RoutePlan, route_query::RouteQuery,
    suggestions::resolve_start_label,
};
use serde::Serialize;
use tracing::info;

use crate::{error::ApiError, state::AppState};

#[derive(Serialize)]
pub struct RoutesResponse {
    #[serde(flatten)]
    plan: RoutePlan,
    message: String,
}

/// An empty plan is a successful response; `message` tells the user to try
/// other locations or modes.
pub async fn post_routes_handler(
    State(state): State<Arc<AppState>>,
    Json(mut query): Json<RouteQuery>,
) -> Result<Json<RoutesResponse>, ApiError> {
    query.validate()?;

    query.start_location = resolve_start_label(&state.catalog, &query.city, &query.start_location);

    let plan = SyntheticRouteGenerator::new(&state.catalog).generate(&query);
    info!(
        "Generated {} routes in {} from {} to {}",
        plan.total_routes, plan.city, plan.start_location, plan.end_location
    );

    Ok(Json(RoutesResponse {
        message: plan.summary(),
        plan,
    }))
}
