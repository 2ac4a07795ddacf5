use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::chart::{MapPoint, Metric, Series};

const HOURLY_CONGESTION: [f64; 24] = [
    0.2, 0.1, 0.1, 0.1, 0.2, 0.4, 0.7, 0.9, 0.8, 0.6, 0.5, 0.6, 0.7, 0.6, 0.6, 0.7, 0.8, 0.9, 0.7,
    0.5, 0.4, 0.3, 0.2, 0.2,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NetworkOverview {
    pub city: String,
    pub metrics: Vec<Metric>,
    pub vehicles: Vec<MapPoint>,
    pub hourly_congestion: Series<u8>,
}

/// Live network headline figures for `city`.
pub fn network_overview(city: &str) -> NetworkOverview {
    NetworkOverview {
        city: city.to_string(),
        metrics: vec![
            Metric::new("Active Vehicles", "237").with_delta("12"),
            Metric::new("Avg. Delay", "4.2 min")
                .with_delta("-0.8 min")
                .inverse(),
            Metric::new("On-time %", "86%").with_delta("3%"),
            Metric::new("Passenger Load", "High"),
        ],
        vehicles: vec![
            MapPoint::new("Chhatrapati Shivaji Terminus", 19.076, 72.8777, 1.0),
            MapPoint::new("Stop A", 19.0760, 72.8795, 2.0),
            MapPoint::new("Stop B", 19.0790, 72.8780, 3.0),
            MapPoint::new("Stop C", 19.0850, 72.8877, 1.0),
            MapPoint::new("Stop D", 19.0930, 72.8919, 2.0),
            MapPoint::new("Stop E", 19.0898, 72.8882, 3.0),
        ],
        hourly_congestion: Series::new("Traffic Congestion by Hour", (0u8..24).zip(HOURLY_CONGESTION)),
    }
}
