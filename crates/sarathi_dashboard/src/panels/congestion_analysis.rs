use rand::{Rng, SeedableRng, rngs::StdRng};
use sarathi_planner::coordinate::Coordinate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::chart::{MapPoint, Series, centroid};

const HOTSPOT_SEED: u64 = 42;
const HOTSPOT_COUNT: usize = 7;

const AREA_PATTERNS: [(&str, [f64; 24]); 4] = [
    (
        "CST Area",
        [
            0.3, 0.2, 0.1, 0.1, 0.2, 0.4, 0.7, 0.9, 0.8, 0.6, 0.5, 0.6, 0.7, 0.6, 0.5, 0.6, 0.7,
            0.9, 0.7, 0.5, 0.4, 0.3, 0.3, 0.3,
        ],
    ),
    (
        "Dadar",
        [
            0.4, 0.3, 0.2, 0.2, 0.3, 0.5, 0.8, 0.9, 0.7, 0.6, 0.6, 0.6, 0.6, 0.6, 0.6, 0.7, 0.9,
            0.9, 0.8, 0.6, 0.5, 0.5, 0.4, 0.4,
        ],
    ),
    (
        "BKC",
        [
            0.2, 0.1, 0.1, 0.1, 0.2, 0.4, 0.8, 0.9, 0.9, 0.8, 0.7, 0.7, 0.8, 0.8, 0.7, 0.8, 0.8,
            0.7, 0.5, 0.4, 0.3, 0.2, 0.2, 0.2,
        ],
    ),
    (
        "Worli",
        [
            0.3, 0.2, 0.2, 0.2, 0.3, 0.5, 0.7, 0.8, 0.7, 0.6, 0.5, 0.6, 0.6, 0.5, 0.5, 0.6, 0.8,
            0.9, 0.7, 0.5, 0.4, 0.3, 0.3, 0.3,
        ],
    ),
];

const INSIGHTS: [&str; 3] = [
    "Morning Peak (8-10 AM): Severe congestion in CST Area and BKC",
    "Evening Peak (5-7 PM): Severe congestion in Dadar and Worli",
    "Midday (11 AM-3 PM): Moderate congestion in all areas",
];

const ROUTE_ADJUSTMENTS: [&str; 3] = [
    "Route Diversion: Reroute buses from CST to Dadar via alternate roads during 8-10 AM",
    "Express Service: Implement express buses that skip less congested stops during peak hours",
    "Dynamic Scheduling: Adjust departure times based on predicted congestion patterns",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CongestionAnalysis {
    pub city: String,
    pub hotspots: Vec<MapPoint>,
    pub view_center: Option<Coordinate>,
    pub hourly_by_area: Vec<Series<u8>>,
    pub insights: Vec<String>,
    pub route_adjustments: Vec<String>,
}

pub fn congestion_analysis(city: &str) -> CongestionAnalysis {
    let hotspots = congestion_hotspots(city);

    CongestionAnalysis {
        city: city.to_string(),
        view_center: centroid(&hotspots),
        hotspots,
        hourly_by_area: AREA_PATTERNS
            .iter()
            .map(|(area, levels)| Series::new(*area, (0u8..24).zip(*levels)))
            .collect(),
        insights: INSIGHTS.iter().map(|line| line.to_string()).collect(),
        route_adjustments: ROUTE_ADJUSTMENTS.iter().map(|line| line.to_string()).collect(),
    }
}

/// Mumbai has surveyed hotspots; every other city gets a seeded spread of
/// points across the country.
pub fn congestion_hotspots(city: &str) -> Vec<MapPoint> {
    if city == "Mumbai" {
        return vec![
            MapPoint::new("CST Area", 19.0760, 72.8777, 0.9),
            MapPoint::new("Marine Drive", 19.0660, 72.8700, 0.7),
            MapPoint::new("Nariman Point", 19.0560, 72.8695, 0.5),
            MapPoint::new("BKC", 19.1170, 72.9075, 0.8),
            MapPoint::new("Worli", 19.0430, 72.8820, 0.7),
            MapPoint::new("Dadar", 19.0890, 72.8882, 0.9),
            MapPoint::new("Mahim", 19.0590, 72.8350, 0.6),
        ];
    }

    let mut rng = StdRng::seed_from_u64(HOTSPOT_SEED);
    let lats: Vec<f64> = (0..HOTSPOT_COUNT)
        .map(|_| rng.random_range(17.0..28.7))
        .collect();
    let lons: Vec<f64> = (0..HOTSPOT_COUNT)
        .map(|_| rng.random_range(72.0..88.4))
        .collect();
    let levels: Vec<f64> = (0..HOTSPOT_COUNT)
        .map(|_| rng.random_range(0.4..0.9))
        .collect();

    (0..HOTSPOT_COUNT)
        .map(|index| {
            MapPoint::new(
                format!("Location {}", index + 1),
                lats[index],
                lons[index],
                levels[index],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mumbai_hotspots() {
        let analysis = congestion_analysis("Mumbai");

        assert_eq!(analysis.hotspots.len(), 7);
        assert_eq!(analysis.hotspots[0].name, "CST Area");

        let center = analysis.view_center.unwrap();
        assert!((center.lat - 19.0723).abs() < 1e-3);
    }

    #[test]
    fn test_generated_hotspots_within_bounds() {
        let hotspots = congestion_hotspots("Pune");

        assert_eq!(hotspots.len(), 7);
        assert_eq!(hotspots[6].name, "Location 7");
        for hotspot in &hotspots {
            assert!((17.0..28.7).contains(&hotspot.coordinate.lat));
            assert!((72.0..88.4).contains(&hotspot.coordinate.lon));
            assert!((0.4..0.9).contains(&hotspot.congestion));
        }
    }

    #[test]
    fn test_generated_hotspots_are_reproducible() {
        assert_eq!(congestion_hotspots("Pune"), congestion_hotspots("Jaipur"));
    }

    #[test]
    fn test_hourly_patterns() {
        let analysis = congestion_analysis("Mumbai");

        assert_eq!(analysis.hourly_by_area.len(), 4);
        assert!(analysis.hourly_by_area.iter().all(|series| series.len() == 24));
        let bkc = &analysis.hourly_by_area[2];
        assert_eq!(bkc.name, "BKC");
        assert_eq!(bkc.points[8], (8, 0.9));
    }
}
