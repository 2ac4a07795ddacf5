//! The dashboard session lives on the client. Every handler receives the
//! current context and answers with the next one.

use std::sync::Arc;

use axum::{Json, extract::State};
use jiff::{
    Zoned,
    civil::{Date, Time},
};
use sarathi_dashboard::{
    panels::simulation::SimulationParams, session::session_context::SessionContext,
};
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize)]
pub struct CityChange {
    session: SessionContext,
    city: String,
}

#[derive(Deserialize)]
pub struct DateTimeChange {
    session: SessionContext,
    date: Date,
    time: Time,
}

#[derive(Deserialize)]
pub struct SimulateRequest {
    session: SessionContext,
    #[serde(default)]
    params: SimulationParams,
}

pub async fn new_session_handler() -> Json<SessionContext> {
    Json(SessionContext::new(Zoned::now().datetime()))
}

pub async fn change_city_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CityChange>,
) -> Result<Json<SessionContext>, ApiError> {
    Ok(Json(body.session.with_city(&state.catalog, &body.city)?))
}

pub async fn change_datetime_handler(Json(body): Json<DateTimeChange>) -> Json<SessionContext> {
    Json(body.session.with_datetime(body.date, body.time))
}

pub async fn optimize_handler(Json(session): Json<SessionContext>) -> Json<SessionContext> {
    Json(session.optimize())
}

pub async fn simulate_handler(
    Json(body): Json<SimulateRequest>,
) -> Result<Json<SessionContext>, ApiError> {
    Ok(Json(body.session.simulate(body.params)?))
}
