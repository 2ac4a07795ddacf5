use jiff::civil::DateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    chart::{Metric, Series},
    error::SimulationError,
};

use super::SAMPLE_ROUTES;

const BASE_OPERATIONAL_COST: f64 = 12_500.0;
const BASE_SATISFACTION: i32 = 78;
const BASE_ROUTE_PERFORMANCE: [f64; 6] = [86.0, 78.0, 92.0, 65.0, 71.0, 83.0];

const PASSENGER_INCREASE_RANGE: std::ops::RangeInclusive<i32> = -50..=100;
const CONGESTION_FACTOR_RANGE: std::ops::RangeInclusive<f64> = 0.5..=2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Fog,
    #[serde(rename = "Extreme Heat")]
    ExtremeHeat,
}

impl Weather {
    pub fn label(&self) -> &'static str {
        match self {
            Weather::Clear => "Clear",
            Weather::Rain => "Rain",
            Weather::Fog => "Fog",
            Weather::ExtremeHeat => "Extreme Heat",
        }
    }

    fn reduces_visibility(&self) -> bool {
        matches!(self, Weather::Rain | Weather::Fog)
    }

    fn satisfaction_impact(&self) -> i32 {
        match self {
            Weather::Rain | Weather::Fog => -12,
            Weather::ExtremeHeat => -5,
            Weather::Clear => 0,
        }
    }

    fn performance_factor(&self) -> f64 {
        match self {
            Weather::Rain | Weather::Fog => 0.8,
            Weather::ExtremeHeat => 0.9,
            Weather::Clear => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SimulationParams {
    /// Change in passenger numbers, in percent.
    pub passenger_increase: i32,
    pub traffic_congestion: f64,
    #[serde(default)]
    pub weather: Weather,
}

impl Default for SimulationParams {
    fn default() -> Self {
        SimulationParams {
            passenger_increase: 0,
            traffic_congestion: 1.0,
            weather: Weather::Clear,
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !PASSENGER_INCREASE_RANGE.contains(&self.passenger_increase) {
            return Err(SimulationError::PassengerIncreaseOutOfRange(
                self.passenger_increase,
            ));
        }

        if !CONGESTION_FACTOR_RANGE.contains(&self.traffic_congestion) {
            return Err(SimulationError::CongestionFactorOutOfRange(
                self.traffic_congestion,
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RoutePerformance {
    pub route: String,
    pub base: f64,
    pub simulated: f64,
    pub change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SimulationReport {
    pub city: String,
    pub simulated_at: DateTime,
    pub params: SimulationParams,
    pub delay_change_minutes: f64,
    pub operational_cost: f64,
    pub cost_change: f64,
    pub passenger_satisfaction: i32,
    pub satisfaction_change: i32,
    pub metrics: Vec<Metric>,
    pub route_performance: Vec<RoutePerformance>,
    pub recommendations: Vec<String>,
}

impl SimulationReport {
    pub fn performance_series(&self) -> [Series<String>; 2] {
        [
            Series::new(
                "Current Performance",
                self.route_performance
                    .iter()
                    .map(|route| (route.route.clone(), route.base)),
            ),
            Series::new(
                "Simulated Performance",
                self.route_performance
                    .iter()
                    .map(|route| (route.route.clone(), route.simulated)),
            ),
        ]
    }
}

/// Predicts the impact of passenger, traffic and weather changes on the network.
pub fn run_simulation(
    city: &str,
    simulated_at: DateTime,
    params: SimulationParams,
) -> Result<SimulationReport, SimulationError> {
    params.validate()?;

    info!(
        "Running simulation for {city} at {simulated_at}: passengers {}%, congestion {}, weather {}",
        params.passenger_increase,
        params.traffic_congestion,
        params.weather.label()
    );

    let congestion = params.traffic_congestion;

    let delay_change_minutes: f64 = if congestion > 1.0 { 8.5 } else { -3.2 };

    let cost_factor = (congestion - 1.0) * 0.15 + 1.0;
    let operational_cost = BASE_OPERATIONAL_COST * cost_factor;
    let cost_change = operational_cost - BASE_OPERATIONAL_COST;

    let congestion_impact = ((congestion - 1.0) * -20.0) as i32;
    let passenger_satisfaction =
        (BASE_SATISFACTION + params.weather.satisfaction_impact() + congestion_impact).clamp(0, 100);
    let satisfaction_change = passenger_satisfaction - BASE_SATISFACTION;

    let metrics = vec![
        Metric::new(
            "Average Delay",
            format!("{:.1} min", delay_change_minutes.abs()),
        )
        .with_delta(format!(
            "{}{:.1} min",
            if delay_change_minutes < 0.0 { "-" } else { "+" },
            delay_change_minutes.abs()
        ))
        .inverse(),
        Metric::new("Operational Cost", format!("₹{operational_cost:.0}"))
            .with_delta(format!(
                "{}{cost_change:.0}",
                if cost_change >= 0.0 { "+" } else { "" }
            ))
            .inverse(),
        Metric::new("Passenger Satisfaction", format!("{passenger_satisfaction}%")).with_delta(
            format!(
                "{}{satisfaction_change}%",
                if satisfaction_change >= 0 { "+" } else { "" }
            ),
        ),
    ];

    Ok(SimulationReport {
        city: city.to_string(),
        simulated_at,
        params,
        delay_change_minutes,
        operational_cost,
        cost_change,
        passenger_satisfaction,
        satisfaction_change,
        metrics,
        route_performance: route_performance(&params),
        recommendations: recommendations(&params),
    })
}

fn route_performance(params: &SimulationParams) -> Vec<RoutePerformance> {
    let weather_factor = params.weather.performance_factor();
    let congestion_factor = (1.1 - params.traffic_congestion * 0.1).max(0.6);
    let passenger_factor = (1.0 + params.passenger_increase as f64 / 100.0).clamp(0.7, 1.2);

    SAMPLE_ROUTES
        .iter()
        .zip(BASE_ROUTE_PERFORMANCE)
        .map(|(route, base)| {
            let simulated =
                (base * weather_factor * congestion_factor * passenger_factor).clamp(0.0, 100.0);
            RoutePerformance {
                route: route.to_string(),
                base,
                simulated,
                change: simulated - base,
            }
        })
        .collect()
}

fn recommendations(params: &SimulationParams) -> Vec<String> {
    let mut recommendations: Vec<&str> = Vec::new();

    if params.passenger_increase > 20 {
        recommendations.push(
            "Increase bus frequency by 15-20% on major routes to handle higher passenger load",
        );
    }

    if params.traffic_congestion > 1.5 {
        recommendations
            .push("Consider alternative routes for Route 34 and Route 47 to avoid congested areas");
        recommendations
            .push("Implement express service bypassing congested segments during peak hours");
    }

    if params.weather.reduces_visibility() {
        recommendations
            .push("Allocate additional buffer time (15%) for routes with poor visibility segments");
        recommendations.push(
            "Ensure safety announcements and reduced speed in areas prone to waterlogging",
        );
    }

    if params.weather == Weather::ExtremeHeat {
        recommendations
            .push("Ensure air conditioning is functional on all buses on Route 25 and Route 63");
        recommendations.push("Consider additional water supply on long routes");
    }

    if recommendations.is_empty() {
        recommendations.push("No significant adjustments needed under current simulation parameters");
    }

    recommendations.into_iter().map(str::to_string).collect()
}
