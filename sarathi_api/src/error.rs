use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sarathi_dashboard::error::{SessionError, SimulationError};
use sarathi_planner::error::PlannerError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
    NotFound(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<PlannerError> for ApiError {
    fn from(error: PlannerError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<SimulationError> for ApiError {
    fn from(error: SimulationError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::UnknownCity(_) => ApiError::NotFound(error.to_string()),
            SessionError::Simulation(error) => error.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
        }
    }
}
