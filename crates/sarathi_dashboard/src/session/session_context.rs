use jiff::civil::{self, Date, DateTime, Time};
use sarathi_planner::catalog::catalog::Catalog;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::SessionError,
    panels::{
        optimization_report::{OptimizationReport, optimization_report},
        simulation::{SimulationParams, SimulationReport, run_simulation},
    },
};

pub const DEFAULT_CITY: &str = "Delhi";

/// Everything one dashboard visitor has selected or computed. Transitions
/// never mutate a context; they return the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SessionContext {
    pub city: String,
    pub date: Date,
    pub time: Time,
    pub optimization: Option<OptimizationReport>,
    pub show_simulation: bool,
    pub simulation: Option<SimulationReport>,
}

impl SessionContext {
    pub fn new(now: DateTime) -> Self {
        SessionContext {
            city: DEFAULT_CITY.to_string(),
            date: now.date(),
            time: civil::time(now.hour(), now.minute(), now.second(), 0),
            optimization: None,
            show_simulation: false,
            simulation: None,
        }
    }

    pub fn datetime(&self) -> DateTime {
        self.date.to_datetime(self.time)
    }

    fn cleared(&self) -> Self {
        SessionContext {
            optimization: None,
            simulation: None,
            ..self.clone()
        }
    }

    /// Selecting another city discards results computed for the previous one.
    pub fn with_city(&self, catalog: &Catalog, city: &str) -> Result<Self, SessionError> {
        if !catalog.is_known_city(city) {
            return Err(SessionError::UnknownCity(city.to_string()));
        }

        if city == self.city {
            return Ok(self.clone());
        }

        debug!("Session city changed from {} to {}", self.city, city);
        Ok(SessionContext {
            city: city.to_string(),
            ..self.cleared()
        })
    }

    pub fn with_datetime(&self, date: Date, time: Time) -> Self {
        if date == self.date && time == self.time {
            return self.clone();
        }

        SessionContext {
            date,
            time,
            ..self.cleared()
        }
    }

    pub fn optimize(&self) -> Self {
        SessionContext {
            optimization: Some(optimization_report(&self.city, self.datetime())),
            ..self.clone()
        }
    }

    pub fn simulate(&self, params: SimulationParams) -> Result<Self, SessionError> {
        let report = run_simulation(&self.city, self.datetime(), params)?;

        Ok(SessionContext {
            show_simulation: true,
            simulation: Some(report),
            ..self.clone()
        })
    }
}
