pub mod congestion_analysis;
pub mod demand_forecast;
pub mod insights;
pub mod network_overview;
pub mod optimization_report;
pub mod route_optimization;
pub mod simulation;

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const SAMPLE_ROUTES: [&str; 6] = [
    "Route 12", "Route 25", "Route 34", "Route 47", "Route 51", "Route 63",
];
