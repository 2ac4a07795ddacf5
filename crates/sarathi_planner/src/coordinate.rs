use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinate { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance in kilometers.
    pub fn haversine_km(&self, other: &Coordinate) -> f64 {
        haversine_km(*self, *other)
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        geo::Point::new(coordinate.lon, coordinate.lat)
    }
}

impl From<&Coordinate> for geo::Point<f64> {
    fn from(coordinate: &Coordinate) -> Self {
        geo::Point::new(coordinate.lon, coordinate.lat)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(point: geo::Point<f64>) -> Self {
        Coordinate {
            lat: point.y(),
            lon: point.x(),
        }
    }
}

pub fn haversine_km<P>(from: P, to: P) -> f64
where
    P: Into<geo::Point<f64>>,
{
    let from: geo::Point<f64> = from.into();
    let to: geo::Point<f64> = to.into();

    let lat1_rad = from.y().to_radians();
    let lat2_rad = to.y().to_radians();

    let delta_lat = (to.y() - from.y()).to_radians();
    let delta_lon = (to.x() - from.x()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point_is_zero() {
        let cst = Coordinate::new(18.9402, 72.8351);
        assert_eq!(cst.haversine_km(&cst), 0.0);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let cst = Coordinate::new(18.9402, 72.8351);
        let dadar = Coordinate::new(19.0211, 72.8426);

        assert_eq!(cst.haversine_km(&dadar), dadar.haversine_km(&cst));
    }

    #[test]
    fn test_haversine_cst_dadar() {
        let cst = Coordinate::new(18.9402, 72.8351);
        let dadar = Coordinate::new(19.0211, 72.8426);

        let distance = cst.haversine_km(&dadar);
        assert!(distance > 9.0 && distance < 9.2, "distance = {distance}");
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let distance = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert!((distance - 111.19).abs() < 0.01);
    }

    #[test]
    fn test_geo_point_conversion() {
        let point: geo::Point<f64> = Coordinate::new(28.6139, 77.2090).into();
        assert_eq!(point.x(), 77.2090);
        assert_eq!(point.y(), 28.6139);
        assert_eq!(Coordinate::from(point), Coordinate::new(28.6139, 77.2090));
    }
}
