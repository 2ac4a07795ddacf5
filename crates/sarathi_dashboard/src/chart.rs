use sarathi_planner::coordinate::Coordinate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A headline number with an optional change indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
    /// A negative delta is the good direction.
    #[serde(default)]
    pub inverse_delta: bool,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Metric {
            label: label.into(),
            value: value.into(),
            delta: None,
            inverse_delta: false,
        }
    }

    pub fn with_delta(mut self, delta: impl Into<String>) -> Self {
        self.delta = Some(delta.into());
        self
    }

    pub fn inverse(mut self) -> Self {
        self.inverse_delta = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Series<X> {
    pub name: String,
    pub points: Vec<(X, f64)>,
}

impl<X> Series<X> {
    pub fn new<I, Y>(name: impl Into<String>, points: I) -> Self
    where
        I: IntoIterator<Item = (X, Y)>,
        Y: Into<f64>,
    {
        Series {
            name: name.into(),
            points: points.into_iter().map(|(x, y)| (x, y.into())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_by_value(&self) -> Option<&(X, f64)> {
        self.points.iter().max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Heatmap {
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    /// One row per y label.
    pub values: Vec<Vec<i32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<const N: usize>(columns: [&str; N], rows: Vec<[String; N]>) -> Self {
        Table {
            columns: columns.iter().map(|column| column.to_string()).collect(),
            rows: rows.into_iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// Cells of the named column. Rows too short to hold the column are skipped.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.columns.iter().position(|column| column == name)?;
        Some(
            self.rows
                .iter()
                .filter_map(|row| row.get(index).map(String::as_str))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MapPoint {
    pub name: String,
    pub coordinate: Coordinate,
    pub congestion: f64,
}

impl MapPoint {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64, congestion: f64) -> Self {
        MapPoint {
            name: name.into(),
            coordinate: Coordinate::new(lat, lon),
            congestion,
        }
    }
}

/// Mean position of `points`, used to centre map views.
pub fn centroid(points: &[MapPoint]) -> Option<Coordinate> {
    if points.is_empty() {
        return None;
    }

    let count = points.len() as f64;
    let (lat, lon) = points.iter().fold((0.0, 0.0), |(lat, lon), point| {
        (lat + point.coordinate.lat, lon + point.coordinate.lon)
    });

    Some(Coordinate::new(lat / count, lon / count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_from_integers() {
        let series: Series<u8> = Series::new("volume", [(5u8, 100u32), (6, 350)]);
        assert_eq!(series.points, vec![(5, 100.0), (6, 350.0)]);
        assert_eq!(series.max_by_value(), Some(&(6, 350.0)));
    }

    #[test]
    fn test_table_column() {
        let table = Table::new(
            ["Metric", "Before"],
            vec![
                [String::from("Travel Time"), String::from("34")],
                [String::from("Ridership"), String::from("98")],
            ],
        );

        assert_eq!(table.column("Before"), Some(vec!["34", "98"]));
        assert_eq!(table.column("After"), None);
    }

    #[test]
    fn test_ragged_table_column() {
        let table: Table = serde_json::from_str(
            r#"{
                "columns": ["Metric", "Before", "After"],
                "rows": [["Travel Time", "34", "22"], ["Ridership"], ["Transfers", "2"]]
            }"#,
        )
        .unwrap();

        assert_eq!(table.column("Metric"), Some(vec!["Travel Time", "Ridership", "Transfers"]));
        assert_eq!(table.column("Before"), Some(vec!["34", "2"]));
        assert_eq!(table.column("After"), Some(vec!["22"]));
    }

    #[test]
    fn test_centroid() {
        let points = vec![
            MapPoint::new("a", 10.0, 70.0, 0.1),
            MapPoint::new("b", 20.0, 80.0, 0.2),
        ];

        assert_eq!(centroid(&points), Some(Coordinate::new(15.0, 75.0)));
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn test_metric_builder() {
        let metric = Metric::new("Average Delay", "8.5 min")
            .with_delta("+8.5 min")
            .inverse();

        assert_eq!(metric.delta.as_deref(), Some("+8.5 min"));
        assert!(metric.inverse_delta);
    }
}
