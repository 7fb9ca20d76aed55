//! Query planner: the configured entry point for encoding, distance and
//! bound queries.

use crate::compute::distance::{DistanceMetric, distance_between};
use crate::compute::geohash::encode;
use crate::compute::region::query_bounds_with_max_bits;
use crate::config::Config;
use crate::error::{GeoboundsError, Result};
use geobounds_types::coordinate::Coordinate;
use geobounds_types::range::GeoHashRange;

/// Stateless planner carrying a validated [`Config`].
///
/// Cloning is cheap and every method takes `&self`, so one planner can be
/// shared freely between threads.
///
/// # Examples
///
/// ```rust
/// use geobounds::{Coordinate, Geobounds};
///
/// let planner = Geobounds::new();
/// let center = Coordinate::new(40.5623, -74.5976);
///
/// assert_eq!(planner.encode(&center)?.len(), 10);
/// for range in planner.query_bounds(&center, 4828.03)? {
///     println!("scan {} .. {}", range.start, range.end_key());
/// }
/// # Ok::<(), geobounds::GeoboundsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryPlanner {
    config: Config,
}

impl QueryPlanner {
    /// Planner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Planner with a custom configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().map_err(GeoboundsError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Geohash at the configured default precision.
    pub fn encode(&self, coord: &Coordinate) -> Result<String> {
        encode(coord, self.config.default_precision)
    }

    pub fn encode_with_precision(&self, coord: &Coordinate, precision: usize) -> Result<String> {
        encode(coord, precision)
    }

    /// Distance in meters using the configured metric.
    pub fn distance_meters(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        distance_between(a, b, self.config.distance_metric)
    }

    pub fn distance_with(&self, a: &Coordinate, b: &Coordinate, metric: DistanceMetric) -> f64 {
        distance_between(a, b, metric)
    }

    /// Minimal geohash ranges covering `radius_meters` around `center`.
    pub fn query_bounds(&self, center: &Coordinate, radius_meters: f64) -> Result<Vec<GeoHashRange>> {
        query_bounds_with_max_bits(center, radius_meters, self.config.max_bits())
    }
}
