use jiff::civil::DateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chart::{Metric, Table};

const RECOMMENDED_CHANGES: [&str; 5] = [
    "Increase frequency on Route 121 during peak hours (8-10 AM, 5-7 PM)",
    "Divert Route 86 to avoid construction at Gandhi Road junction",
    "Add express service on Route 54 during morning rush hour",
    "Consider merging low-utilization Routes 32 and 33 during off-peak hours",
    "Extend Route 15 to cover the new residential area in eastern sector",
];

/// Network-wide optimization summary shown after "Optimize Routes".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OptimizationReport {
    pub city: String,
    pub requested_at: DateTime,
    pub metrics: Vec<Metric>,
    pub comparison: Table,
    pub recommendations: Vec<String>,
}

pub fn optimization_report(city: &str, requested_at: DateTime) -> OptimizationReport {
    info!("Optimizing routes for {city} at {requested_at}");

    let comparison = Table::new(
        ["Metric", "Current", "Optimized", "Improvement"],
        [
            ["Average Wait Time", "18 min", "12 min", "-33%"],
            ["Journey Duration", "42 min", "36 min", "-14%"],
            ["Buses Required", "37", "33", "-10%"],
            ["Passenger Coverage", "82%", "88%", "+7%"],
            ["Congestion Impact", "High", "Medium", "Reduced"],
        ]
        .into_iter()
        .map(|row| row.map(str::to_string))
        .collect(),
    );

    OptimizationReport {
        city: city.to_string(),
        requested_at,
        metrics: vec![
            Metric::new("Estimated Time Saving", "23 min")
                .with_delta("-15%")
                .inverse(),
            Metric::new("Passenger Capacity Utilization", "78%").with_delta("+12%"),
            Metric::new("Operational Cost Reduction", "₹4,250")
                .with_delta("-8%")
                .inverse(),
        ],
        comparison,
        recommendations: RECOMMENDED_CHANGES.iter().map(|r| r.to_string()).collect(),
    }
}
