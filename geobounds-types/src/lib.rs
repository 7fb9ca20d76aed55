//! # geobounds-types
//!
//! Value types shared between the `geobounds` query planner and the stores that
//! consume its output.
//!
//! - **Coordinates**: `Coordinate`, a latitude/longitude pair in decimal degrees
//! - **Ranges**: `GeoHashRange` and its upper bound `RangeEnd`
//!
//! All types are serializable with Serde. Coordinates convert to and from the
//! `geo` crate's `Point` (x = longitude, y = latitude).
//!
//! ## Examples
//!
//! ```rust
//! use geobounds_types::coordinate::Coordinate;
//! use geobounds_types::range::{GeoHashRange, RangeEnd};
//!
//! let nyc = Coordinate::new(40.7128, -74.0060);
//! let point: geo::Point<f64> = nyc.into();
//! assert_eq!(point.x(), -74.0060);
//!
//! let range = GeoHashRange::new("dr5r", RangeEnd::Exclusive("dr5s".into()));
//! assert!(range.contains_hash("dr5regw3pp"));
//! ```

pub mod coordinate;
pub mod range;
