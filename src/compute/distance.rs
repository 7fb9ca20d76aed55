//! Surface distance between coordinates.

use geo::{Distance, Geodesic, Haversine, Point};
use geobounds_types::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// Distance metrics for surface distance.
///
/// - **Geodesic**: ellipsoidal distance on WGS84 (Karney 2013), the default
/// - **Haversine**: spherical approximation, faster, off by up to ~0.5%
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    #[default]
    Geodesic,
    Haversine,
}

/// Distance between two coordinates in meters using the given metric.
///
/// # Examples
///
/// ```rust
/// use geobounds::{Coordinate, DistanceMetric, distance_between};
///
/// let nyc = Coordinate::new(40.7128, -74.0060);
/// let la = Coordinate::new(34.0522, -118.2437);
///
/// let dist = distance_between(&nyc, &la, DistanceMetric::Geodesic);
/// assert!(dist > 3_900_000.0); // ~3,944 km
/// ```
pub fn distance_between(a: &Coordinate, b: &Coordinate, metric: DistanceMetric) -> f64 {
    let (a, b): (Point, Point) = ((*a).into(), (*b).into());
    match metric {
        DistanceMetric::Geodesic => Geodesic.distance(a, b),
        DistanceMetric::Haversine => Haversine.distance(a, b),
    }
}

/// Geodesic distance between two coordinates in meters.
pub fn distance_meters(a: &Coordinate, b: &Coordinate) -> f64 {
    distance_between(a, b, DistanceMetric::Geodesic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_at_equator() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        // Equatorial radius 6378137 m
        assert!((distance_meters(&a, &b) - 111_319.49).abs() < 1.0);

        let spherical = distance_between(&a, &b, DistanceMetric::Haversine);
        assert!((spherical - 111_195.0).abs() < 5.0);
    }

    #[test]
    fn test_symmetric() {
        let london = Coordinate::new(51.5074, -0.1278);
        let sydney = Coordinate::new(-33.8688, 151.2093);
        for metric in [DistanceMetric::Geodesic, DistanceMetric::Haversine] {
            let there = distance_between(&london, &sydney, metric);
            let back = distance_between(&sydney, &london, metric);
            assert!((there - back).abs() < 1e-6, "{:?}", metric);
        }
    }

    #[test]
    fn test_zero_for_same_point() {
        let p = Coordinate::new(40.5623, -74.5976);
        assert!(distance_meters(&p, &p).abs() < 1e-9);
        assert!(distance_between(&p, &p, DistanceMetric::Haversine).abs() < 1e-9);
    }

    #[test]
    fn test_across_antimeridian() {
        let west = Coordinate::new(0.0, 179.9);
        let east = Coordinate::new(0.0, -179.9);
        let dist = distance_meters(&west, &east);
        assert!((dist - 22_263.9).abs() < 1.0);
    }

    #[test]
    fn test_metric_default_and_serde() {
        assert_eq!(DistanceMetric::default(), DistanceMetric::Geodesic);
        assert_eq!(
            serde_json::to_string(&DistanceMetric::Haversine).unwrap(),
            r#""haversine""#
        );
    }
}
