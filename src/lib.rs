//! Geohash encoding and minimal geohash range queries for circular search areas.
//!
//! Given a center and a radius, [`query_bounds`] returns the few `[start, end)`
//! ranges a geohash-sorted index has to scan to find every candidate inside
//! the circle. Results may overlap at the record level, so consumers should
//! de-duplicate by key.
//!
//! ```rust
//! use geobounds::{Coordinate, distance_meters, encode, query_bounds};
//!
//! let center = Coordinate::new(40.5623, -74.5976);
//! assert!(encode(&center, 10)?.starts_with("dr4y"));
//!
//! for range in query_bounds(&center, 4828.03)? {
//!     assert!(range.start.as_str() < range.end_key().as_str());
//! }
//!
//! let nyc = Coordinate::new(40.7128, -74.0060);
//! assert!(distance_meters(&center, &nyc) > 50_000.0);
//! # Ok::<(), geobounds::GeoboundsError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod planner;

pub use builder::PlannerBuilder;
pub use config::Config;
pub use error::{GeoboundsError, Result};
pub use planner::QueryPlanner;

pub type Geobounds = QueryPlanner;

pub use geobounds_types::coordinate::Coordinate;
pub use geobounds_types::range::{GeoHashRange, PAST_PREFIX_SENTINEL, RangeEnd};

pub use compute::{
    DEFAULT_PRECISION, DistanceMetric, MAX_BITS, Region, distance_between, distance_meters,
    encode, merge_ranges, query_bounds, range_from_hash,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{Config, Geobounds, GeoboundsError, PlannerBuilder, QueryPlanner, Result};

    pub use crate::{Coordinate, GeoHashRange, RangeEnd};

    pub use crate::{DistanceMetric, distance_meters, encode, query_bounds};
}
