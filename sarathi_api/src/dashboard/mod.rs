pub mod congestion;
pub mod forecast;
pub mod insights;
pub mod overview;
pub mod page;
pub mod route_optimization;
pub mod simulation;

use jiff::{Zoned, civil::Date};

use crate::{error::ApiError, state::AppState};

pub(crate) fn ensure_known_city(state: &AppState, city: &str) -> Result<(), ApiError> {
    if state.catalog.is_known_city(city) {
        Ok(())
    } else {
        Err(ApiError::NotFound(format!("Unknown city {city:?}")))
    }
}

pub(crate) fn today() -> Date {
    Zoned::now().date()
}
