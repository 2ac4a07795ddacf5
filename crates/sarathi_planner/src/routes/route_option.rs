use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::transport_mode::TransportMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteStep {
    pub step: u32,
    pub description: String,
    pub minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CongestionBand {
    Low,
    Moderate,
    High,
}

impl CongestionBand {
    pub fn from_level(level: f64) -> Self {
        if level > 0.7 {
            CongestionBand::High
        } else if level > 0.4 {
            CongestionBand::Moderate
        } else {
            CongestionBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CongestionBand::Low => "Low congestion",
            CongestionBand::Moderate => "Moderate congestion",
            CongestionBand::High => "High congestion",
        }
    }
}

/// One illustrative way of travelling between two places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteOption {
    pub mode: TransportMode,
    pub icon: String,
    pub duration_minutes: u32,
    pub distance_km: f64,
    /// Fare in rupees.
    pub cost: u32,
    pub emissions_kg: f64,
    pub transfers: u32,
    pub congestion_level: f64,
    pub departure_frequency: String,
    pub steps: Vec<RouteStep>,
}

impl RouteOption {
    pub fn congestion_band(&self) -> CongestionBand {
        CongestionBand::from_level(self.congestion_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_congestion_band() {
        assert_eq!(CongestionBand::from_level(0.8), CongestionBand::High);
        assert_eq!(CongestionBand::from_level(0.7), CongestionBand::Moderate);
        assert_eq!(CongestionBand::from_level(0.6), CongestionBand::Moderate);
        assert_eq!(CongestionBand::from_level(0.4), CongestionBand::Low);
        assert_eq!(CongestionBand::from_level(0.1), CongestionBand::Low);
    }
}
