use jiff::{ToSpan, civil::Date};
use rand::{Rng, SeedableRng, rngs::StdRng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::chart::{Heatmap, Series};

use super::{SAMPLE_ROUTES, WEEKDAYS};

const FIRST_SERVICE_HOUR: u8 = 5;
const HEATMAP_SEED: u64 = 42;
const KPI_DAYS: i64 = 14;

const PASSENGER_VOLUME: [u32; 19] = [
    100, 350, 780, 920, 650, 450, 380, 420, 500, 580, 780, 900, 820, 720, 850, 950, 750, 350, 180,
];
const PEAK_HOURS: [u8; 2] = [8, 18];
const ROUTE_OCCUPANCY: [u32; 6] = [86, 72, 65, 92, 53, 78];

const ON_TIME_PERFORMANCE: [u32; 14] = [82, 84, 79, 85, 86, 82, 84, 88, 87, 85, 84, 82, 89, 91];
const SERVICE_COMPLETION: [u32; 14] = [96, 97, 94, 98, 98, 95, 97, 99, 98, 97, 99, 96, 98, 99];
const PASSENGER_SATISFACTION: [u32; 14] = [72, 74, 71, 75, 76, 73, 75, 78, 79, 77, 78, 75, 80, 82];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum DelayCategory {
    Low,
    Medium,
    High,
    Critical,
}

impl DelayCategory {
    pub const ALL: [DelayCategory; 4] = [
        DelayCategory::Low,
        DelayCategory::Medium,
        DelayCategory::High,
        DelayCategory::Critical,
    ];

    /// Display colour of the category in the delay chart.
    pub fn color(&self) -> &'static str {
        match self {
            DelayCategory::Low => "green",
            DelayCategory::Medium => "orange",
            DelayCategory::High => "red",
            DelayCategory::Critical => "darkred",
        }
    }
}

const ROUTE_DELAYS: [(&str, u32, DelayCategory); 9] = [
    ("R12", 7, DelayCategory::Medium),
    ("R25", 12, DelayCategory::High),
    ("R34", 5, DelayCategory::Low),
    ("R47", 18, DelayCategory::Critical),
    ("R51", 3, DelayCategory::Low),
    ("R63", 9, DelayCategory::Medium),
    ("R72", 14, DelayCategory::High),
    ("R85", 6, DelayCategory::Medium),
    ("R91", 11, DelayCategory::High),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteDelay {
    pub route: String,
    pub average_delay_minutes: u32,
    pub category: DelayCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DelaySummary {
    pub category: DelayCategory,
    pub color: String,
    pub routes: usize,
    pub min_minutes: u32,
    pub max_minutes: u32,
    pub mean_minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Insights {
    pub hourly_passenger_volume: Series<u8>,
    pub peak_hours: Vec<u8>,
    pub route_occupancy: Series<String>,
    pub route_delays: Vec<RouteDelay>,
    pub delay_summaries: Vec<DelaySummary>,
    pub network_kpis: Vec<Series<Date>>,
    pub congestion_heatmap: Heatmap,
}

/// Network insights with KPI history ending on `today`.
pub fn insights(today: Date) -> Insights {
    Insights {
        hourly_passenger_volume: hourly_passenger_volume(),
        peak_hours: PEAK_HOURS.to_vec(),
        route_occupancy: Series::new(
            "Average Route Occupancy (%)",
            SAMPLE_ROUTES
                .iter()
                .map(|route| route.to_string())
                .zip(ROUTE_OCCUPANCY),
        ),
        route_delays: route_delays(),
        delay_summaries: delay_summaries(),
        network_kpis: network_kpis(today),
        congestion_heatmap: congestion_heatmap(),
    }
}

fn service_hours() -> impl Iterator<Item = u8> {
    FIRST_SERVICE_HOUR..24
}

pub fn hourly_passenger_volume() -> Series<u8> {
    Series::new(
        "Passenger Volume by Hour",
        service_hours().zip(PASSENGER_VOLUME),
    )
}

pub fn route_delays() -> Vec<RouteDelay> {
    ROUTE_DELAYS
        .iter()
        .map(|&(route, delay, category)| RouteDelay {
            route: route.to_string(),
            average_delay_minutes: delay,
            category,
        })
        .collect()
}

pub fn delay_summaries() -> Vec<DelaySummary> {
    DelayCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let delays: Vec<u32> = ROUTE_DELAYS
                .iter()
                .filter(|(_, _, c)| *c == category)
                .map(|(_, delay, _)| *delay)
                .collect();

            let min_minutes = *delays.iter().min()?;
            let max_minutes = *delays.iter().max()?;
            let mean_minutes = delays.iter().sum::<u32>() as f64 / delays.len() as f64;

            Some(DelaySummary {
                category,
                color: category.color().to_string(),
                routes: delays.len(),
                min_minutes,
                max_minutes,
                mean_minutes,
            })
        })
        .collect()
}

pub fn network_kpis(today: Date) -> Vec<Series<Date>> {
    let dates: Vec<Date> = (0..KPI_DAYS)
        .rev()
        .map(|offset| today.saturating_sub(offset.days()))
        .collect();

    [
        ("On-Time Performance (%)", ON_TIME_PERFORMANCE),
        ("Service Completion (%)", SERVICE_COMPLETION),
        ("Passenger Satisfaction (%)", PASSENGER_SATISFACTION),
    ]
    .into_iter()
    .map(|(name, values)| Series::new(name, dates.iter().copied().zip(values)))
    .collect()
}

/// Congestion level by weekday and service hour. Seeded, so every render
/// shows the same picture.
pub fn congestion_heatmap() -> Heatmap {
    let mut rng = StdRng::seed_from_u64(HEATMAP_SEED);
    let hours: Vec<u8> = service_hours().collect();

    let values = (0..WEEKDAYS.len())
        .map(|day| {
            (0..hours.len())
                .map(|column| {
                    let mut level: i32 = rng.random_range(10..90);
                    let weekday = day < 5;
                    if weekday && (3..5).contains(&column) {
                        level += 30;
                    }
                    if weekday && (13..15).contains(&column) {
                        level += 30;
                    }
                    if !weekday {
                        level -= 20;
                    }
                    level.clamp(10, 100)
                })
                .collect()
        })
        .collect();

    Heatmap {
        x_labels: hours.iter().map(|hour| hour.to_string()).collect(),
        y_labels: WEEKDAYS.iter().map(|day| day.to_string()).collect(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_hourly_passenger_volume() {
        let series = hourly_passenger_volume();

        assert_eq!(series.len(), 19);
        assert_eq!(series.points.first(), Some(&(5, 100.0)));
        assert_eq!(series.points.last(), Some(&(23, 180.0)));
        assert_eq!(series.max_by_value(), Some(&(20, 950.0)));
    }

    #[test]
    fn test_network_kpis_end_today() {
        let today = date(2025, 3, 5);
        let kpis = network_kpis(today);

        assert_eq!(kpis.len(), 3);
        for series in &kpis {
            assert_eq!(series.len(), 14);
            assert_eq!(series.points.first().map(|p| p.0), Some(date(2025, 2, 20)));
            assert_eq!(series.points.last().map(|p| p.0), Some(today));
        }
        assert_eq!(kpis[0].points.last().map(|p| p.1), Some(91.0));
    }

    #[test]
    fn test_delay_summaries() {
        let summaries = delay_summaries();

        assert_eq!(summaries.len(), 4);
        let high = &summaries[2];
        assert_eq!(high.category, DelayCategory::High);
        assert_eq!(high.color, "red");
        assert_eq!(high.routes, 3);
        assert_eq!(high.min_minutes, 11);
        assert_eq!(high.max_minutes, 14);
        assert!((high.mean_minutes - 37.0 / 3.0).abs() < 1e-9);

        let critical = &summaries[3];
        assert_eq!((critical.routes, critical.min_minutes), (1, 18));
        assert_eq!(critical.color, "darkred");
    }

    #[test]
    fn test_congestion_heatmap_shape_and_bounds() {
        let heatmap = congestion_heatmap();

        assert_eq!(heatmap.y_labels.len(), 7);
        assert_eq!(heatmap.x_labels.first().map(String::as_str), Some("5"));
        assert_eq!(heatmap.values.len(), 7);
        assert!(heatmap.values.iter().all(|row| row.len() == 19));
        assert!(
            heatmap
                .values
                .iter()
                .flatten()
                .all(|level| (10..=100).contains(level))
        );
    }

    #[test]
    fn test_congestion_heatmap_patterns() {
        let heatmap = congestion_heatmap();

        // weekday rush hours always get the +30 bump on a 10..90 base
        for day in 0..5 {
            for column in [3, 4, 13, 14] {
                assert!(heatmap.values[day][column] >= 40);
            }
        }
        // weekends are lowered by 20 from a base below 90
        for day in 5..7 {
            assert!(heatmap.values[day].iter().all(|level| *level < 70));
        }
    }

    #[test]
    fn test_congestion_heatmap_is_deterministic() {
        assert_eq!(congestion_heatmap(), congestion_heatmap());
    }

    #[test]
    fn test_insights_assembles_panels() {
        let insights = insights(date(2025, 1, 1));

        assert_eq!(insights.peak_hours, vec![8, 18]);
        assert_eq!(insights.route_occupancy.len(), 6);
        assert_eq!(
            insights.route_occupancy.max_by_value().map(|p| p.0.as_str()),
            Some("Route 47")
        );
        assert_eq!(insights.route_delays.len(), 9);
    }
}
