use axum::{Json, extract::Query};
use jiff::civil::Date;
use sarathi_dashboard::panels::insights::{Insights, insights};
use serde::Deserialize;

use crate::error::ApiError;

use super::today;

#[derive(Deserialize)]
pub struct InsightsParams {
    /// Last day of the KPI trend window, defaults to today.
    date: Option<Date>,
}

pub async fn insights_handler(
    Query(params): Query<InsightsParams>,
) -> Result<Json<Insights>, ApiError> {
    Ok(Json(insights(params.date.unwrap_or_else(today))))
}
