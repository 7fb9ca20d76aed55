use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
///
/// Latitude comes first, matching how search centers are usually written down.
/// Conversion to `geo::Point` puts longitude on the x axis.
///
/// # Examples
///
/// ```
/// use geobounds_types::coordinate::Coordinate;
///
/// let somerville = Coordinate::new(40.5623, -74.5976);
/// assert_eq!(somerville.lat(), 40.5623);
/// assert_eq!(somerville.lon(), -74.5976);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, [-90, 90]
    pub lat: f64,
    /// Longitude in degrees, [-180, 180]
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Copy of this coordinate with a different latitude.
    #[inline]
    pub fn with_lat(self, lat: f64) -> Self {
        Self { lat, ..self }
    }

    /// Copy of this coordinate with a different longitude.
    #[inline]
    pub fn with_lon(self, lon: f64) -> Self {
        Self { lon, ..self }
    }

    /// Returns true when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(coord: Coordinate) -> Self {
        geo::Point::new(coord.lon, coord.lat)
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Builds a coordinate from a `(lat, lon)` tuple.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}
