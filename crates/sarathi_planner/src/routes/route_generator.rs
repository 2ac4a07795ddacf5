use tracing::{debug, instrument};

use crate::{
    catalog::{catalog::Catalog, named_coordinate::NamedCoordinate},
    coordinate::Coordinate,
};

use super::{
    route_option::{RouteOption, RouteStep},
    route_plan::RoutePlan,
    route_query::RouteQuery,
    transport_mode::TransportMode,
};

const TRAIN_MIN_DISTANCE_KM: f64 = 3.0;
const WALKING_MAX_DISTANCE_KM: f64 = 5.0;
const CYCLING_MAX_DISTANCE_KM: f64 = 10.0;
const CYCLING_FREE_DISTANCE_KM: f64 = 3.0;
const CYCLE_RENTAL_COST: u32 = 20;
const WESTERN_LINE_MAX_LON: f64 = 72.9;

/// Builds illustrative multi-modal route options from a straight-line
/// distance and fixed per-mode coefficients.
pub struct SyntheticRouteGenerator<'a> {
    catalog: &'a Catalog,
}

impl<'a> SyntheticRouteGenerator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Resolves both labels against the city's landmark table. An unmatched
    /// start falls back to the first landmark, an unmatched end to the last.
    pub fn resolve(&self, city: &str, start: &str, end: &str) -> (Coordinate, Coordinate) {
        let landmarks = self.catalog.landmarks_for(city);

        let start_coordinate = resolve_label(landmarks, start)
            .or_else(|| landmarks.first().map(NamedCoordinate::coordinate));
        let end_coordinate = resolve_label(landmarks, end)
            .or_else(|| landmarks.last().map(NamedCoordinate::coordinate));

        // landmarks_for never returns an empty table
        let fallback = self.catalog.default_center;
        (
            start_coordinate.unwrap_or(fallback),
            end_coordinate.unwrap_or(fallback),
        )
    }

    #[instrument(skip(self), level = "debug")]
    pub fn generate(&self, query: &RouteQuery) -> RoutePlan {
        let (start, end) = self.resolve(&query.city, &query.start_location, &query.end_location);
        let distance = start.haversine_km(&end);
        let has_metro = self.catalog.has_metro(&query.city);

        debug!(
            "Resolved {:?} -> {:?}, straight-line distance {:.3} km",
            start, end, distance
        );

        let context = SynthesisContext {
            start_label: &query.start_location,
            end_label: &query.end_location,
            start,
            distance,
        };

        let mut routes: Vec<RouteOption> = TransportMode::ALL
            .into_iter()
            .filter(|&mode| query.requests(mode))
            .filter(|&mode| is_available(mode, distance, has_metro))
            .map(|mode| synthesize(mode, &context))
            .collect();

        routes.sort_by_key(|route| route.duration_minutes);

        RoutePlan {
            start_location: query.start_location.clone(),
            end_location: query.end_location.clone(),
            city: query.city.clone(),
            distance_km: round_one_decimal(distance),
            total_routes: routes.len(),
            routes,
        }
    }
}

/// Convenience wrapper over [`SyntheticRouteGenerator::generate`].
pub fn calculate_routes(
    catalog: &Catalog,
    start_location: &str,
    end_location: &str,
    city: &str,
    transport_modes: Option<&[TransportMode]>,
) -> RoutePlan {
    let mut query = RouteQuery::new(start_location, end_location, city);
    if let Some(modes) = transport_modes {
        query = query.with_modes(modes.iter().copied());
    }

    SyntheticRouteGenerator::new(catalog).generate(&query)
}

/// Case-insensitive substring match; the last matching key wins.
fn resolve_label(landmarks: &[NamedCoordinate], label: &str) -> Option<Coordinate> {
    let label = label.to_lowercase();

    landmarks
        .iter()
        .filter(|landmark| label.contains(&landmark.name().to_lowercase()))
        .last()
        .map(NamedCoordinate::coordinate)
}

pub fn is_available(mode: TransportMode, distance: f64, has_metro: bool) -> bool {
    match mode {
        TransportMode::Bus => true,
        TransportMode::Train => distance > TRAIN_MIN_DISTANCE_KM,
        TransportMode::Metro => has_metro,
        TransportMode::Walking => distance < WALKING_MAX_DISTANCE_KM,
        TransportMode::Cycling => distance < CYCLING_MAX_DISTANCE_KM,
    }
}

struct SynthesisContext<'q> {
    start_label: &'q str,
    end_label: &'q str,
    start: Coordinate,
    distance: f64,
}

fn synthesize(mode: TransportMode, context: &SynthesisContext) -> RouteOption {
    let d = context.distance;

    let (duration_minutes, distance_km, cost, emissions_kg, transfers, congestion_level, frequency) =
        match mode {
            TransportMode::Bus => (
                round_minutes(4.0 * d),
                round_one_decimal(1.3 * d),
                round_minutes(5.0 * d),
                round_one_decimal(0.7 * d),
                u32::from(d > 5.0),
                0.7,
                "Every 10-15 minutes",
            ),
            TransportMode::Train => (
                round_minutes(2.0 * d),
                round_one_decimal(1.2 * d),
                round_minutes(3.0 * d),
                round_one_decimal(0.4 * d),
                u32::from(d >= 10.0),
                0.8,
                "Every 15-20 minutes",
            ),
            TransportMode::Metro => (
                round_minutes(1.5 * d),
                round_one_decimal(1.1 * d),
                round_minutes(4.0 * d),
                round_one_decimal(0.2 * d),
                u32::from(d >= 8.0),
                0.6,
                "Every 5-8 minutes",
            ),
            TransportMode::Walking => (
                round_minutes(12.0 * d),
                round_one_decimal(d),
                0,
                0.0,
                0,
                0.1,
                "On demand",
            ),
            TransportMode::Cycling => (
                round_minutes(4.0 * d),
                round_one_decimal(1.05 * d),
                if d < CYCLING_FREE_DISTANCE_KM {
                    0
                } else {
                    CYCLE_RENTAL_COST
                },
                0.0,
                0,
                0.3,
                "On demand",
            ),
        };

    RouteOption {
        mode,
        icon: mode.icon().to_string(),
        duration_minutes,
        distance_km,
        cost,
        emissions_kg,
        transfers,
        congestion_level,
        departure_frequency: frequency.to_string(),
        steps: steps_for(mode, context, duration_minutes),
    }
}

fn steps_for(mode: TransportMode, context: &SynthesisContext, duration: u32) -> Vec<RouteStep> {
    let d = context.distance;
    let legs: Vec<(String, u32)> = match mode {
        TransportMode::Bus => vec![
            (String::from("Walk to nearest bus stop"), 5),
            (
                format!("Take Bus Route {}", 100 + d.floor() as u32),
                round_minutes(3.0 * d),
            ),
            (String::from("Walk to destination"), 5),
        ],
        TransportMode::Train => {
            let line = if context.start.lon() < WESTERN_LINE_MAX_LON {
                "Western"
            } else {
                "Central"
            };
            vec![
                (String::from("Walk to nearest railway station"), 8),
                (format!("Take {line} Line train"), round_minutes(1.5 * d)),
                (String::from("Walk to destination"), 10),
            ]
        }
        TransportMode::Metro => vec![
            (String::from("Walk to nearest metro station"), 6),
            (String::from("Take Metro Line 1"), round_minutes(1.2 * d)),
            (String::from("Walk to destination"), 7),
        ],
        TransportMode::Walking => vec![(
            format!("Walk from {} to {}", context.start_label, context.end_label),
            duration,
        )],
        TransportMode::Cycling => vec![
            (String::from("Pick up bicycle"), 3),
            (
                format!("Cycle from {} to {}", context.start_label, context.end_label),
                duration,
            ),
        ],
    };

    legs.into_iter()
        .enumerate()
        .map(|(index, (description, minutes))| RouteStep {
            step: index as u32 + 1,
            description,
            minutes,
        })
        .collect()
}

fn round_minutes(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
