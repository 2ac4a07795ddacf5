use axum::{Json, extract::Query};
use jiff::civil::Date;
use sarathi_dashboard::panels::demand_forecast::{DemandForecast, ForecastArea, demand_forecast};
use serde::Deserialize;

use crate::error::ApiError;

use super::today;

#[derive(Deserialize)]
pub struct ForecastParams {
    city: String,
    #[serde(default = "default_area")]
    area: ForecastArea,
    date: Option<Date>,
}

fn default_area() -> ForecastArea {
    ForecastArea::AllRoutes
}

pub async fn forecast_handler(
    Query(params): Query<ForecastParams>,
) -> Result<Json<DemandForecast>, ApiError> {
    let date = params.date.unwrap_or_else(today);

    Ok(Json(demand_forecast(&params.city, params.area, date)))
}
