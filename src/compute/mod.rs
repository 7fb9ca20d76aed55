//! Compute layer: geohash encoding, distance, region geometry and range merging.
//!
//! Everything here is a pure function of its arguments. The facade in
//! `planner` only adds configured defaults on top.

pub mod base32;
pub mod distance;
pub mod geohash;
pub mod merge;
pub mod region;
pub mod validation;

pub use distance::{DistanceMetric, distance_between, distance_meters};
pub use geohash::{DEFAULT_PRECISION, encode};
pub use merge::{MAX_BITS, merge_ranges, range_from_hash, try_join};
pub use region::{Region, bounding_bits, query_bounds, query_bounds_with_max_bits};
