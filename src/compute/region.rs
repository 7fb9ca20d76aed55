//! Region geometry for circular bound queries.
//!
//! A search circle is widened to a latitude/longitude box, the box decides how
//! many geohash bits can still be resolved, and nine sample points (the center
//! plus its eight neighbours at the box edges) are encoded into candidate
//! ranges for the merger.

use super::base32::BITS_PER_CHAR;
use super::geohash::encode;
use super::merge::{MAX_BITS, merge_ranges, range_from_hash};
use super::validation::{validate_coordinate, validate_radius};
use crate::error::Result;
use geobounds_types::coordinate::Coordinate;
use geobounds_types::range::GeoHashRange;
use smallvec::SmallVec;
use std::f64::consts::PI;

/// WGS84 equatorial radius.
pub const EQUATORIAL_RADIUS_METERS: f64 = 6_378_137.0;

/// WGS84 first eccentricity squared.
pub const ECCENTRICITY_SQUARED: f64 = 0.00669447819799;

/// Length of one degree of latitude, averaged over the ellipsoid.
pub const METERS_PER_DEGREE_LATITUDE: f64 = 110_574.0;

/// Below this many meters per degree of longitude the point counts as a pole.
const POLAR_METERS_PER_DEGREE: f64 = 1e-6;

/// Degrees of longitude covering `distance_meters` at `latitude`.
///
/// Near the poles, where a degree of longitude shrinks to nothing, any
/// positive distance spans the whole circle. The result never exceeds 360.
///
/// # Examples
///
/// ```
/// use geobounds::compute::region::longitude_delta_at_latitude;
///
/// let at_equator = longitude_delta_at_latitude(1000.0, 0.0);
/// let at_sixty = longitude_delta_at_latitude(1000.0, 60.0);
/// assert!(at_sixty > 1.9 * at_equator);
/// assert_eq!(longitude_delta_at_latitude(1.0, 90.0), 360.0);
/// ```
pub fn longitude_delta_at_latitude(distance_meters: f64, latitude: f64) -> f64 {
    let lat_rad = latitude.to_radians();
    let sin_lat = lat_rad.sin();
    let meters_per_degree = lat_rad.cos() * EQUATORIAL_RADIUS_METERS * PI
        / 180.0
        / (1.0 - ECCENTRICITY_SQUARED * sin_lat * sin_lat).sqrt();

    if meters_per_degree < POLAR_METERS_PER_DEGREE {
        return if distance_meters > 0.0 { 360.0 } else { 0.0 };
    }

    (distance_meters / meters_per_degree).min(360.0)
}

/// Brings a longitude back into [-180, 180] by whole turns.
pub fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Box enclosing a search circle.
///
/// `lat_delta` and `lon_delta` are full spans, twice the distance from the
/// center to each edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub center: Coordinate,
    pub lat_delta: f64,
    pub lon_delta: f64,
}

impl Region {
    /// Box around `center` reaching `radius_meters` in every direction.
    ///
    /// The longitude span is measured at whichever latitude edge is closer to
    /// a pole, so the box is never narrower than the circle.
    pub fn around(center: Coordinate, radius_meters: f64) -> Result<Self> {
        validate_coordinate(&center)?;
        validate_radius(radius_meters)?;

        let half_lat = radius_meters / METERS_PER_DEGREE_LATITUDE;
        let north = (center.lat() + half_lat).min(90.0);
        let south = (center.lat() - half_lat).max(-90.0);

        let half_lon = longitude_delta_at_latitude(radius_meters, north)
            .max(longitude_delta_at_latitude(radius_meters, south));

        Ok(Self {
            center,
            lat_delta: half_lat * 2.0,
            lon_delta: half_lon * 2.0,
        })
    }

    /// Northern edge, clamped to the pole.
    pub fn north(&self) -> f64 {
        (self.center.lat() + self.lat_delta / 2.0).min(90.0)
    }

    /// Southern edge, clamped to the pole.
    pub fn south(&self) -> f64 {
        (self.center.lat() - self.lat_delta / 2.0).max(-90.0)
    }

    /// Eastern edge, wrapped across the antimeridian.
    pub fn east(&self) -> f64 {
        wrap_longitude(self.center.lon() + self.lon_delta / 2.0)
    }

    /// Western edge, wrapped across the antimeridian.
    pub fn west(&self) -> f64 {
        wrap_longitude(self.center.lon() - self.lon_delta / 2.0)
    }

    /// The nine sample points, center first: every combination of
    /// {center, north, south} latitude with {center, east, west} longitude.
    pub fn sample_points(&self) -> [Coordinate; 9] {
        let lats = [self.center.lat(), self.north(), self.south()];
        let lons = [self.center.lon(), self.east(), self.west()];
        std::array::from_fn(|i| Coordinate::new(lats[i / 3], lons[i % 3]))
    }
}

/// Number of halvings of `extent` that stay at least as wide as `half_span`.
///
/// `None` for a zero-width span, which any precision resolves.
fn halvings(extent: f64, half_span: f64) -> Option<i64> {
    if half_span <= 0.0 {
        return None;
    }
    Some((extent / half_span).log2().floor() as i64)
}

/// Finest bit precision whose cells are still as large as the region.
///
/// Latitude contributes two bits per halving of 180 degrees and longitude two
/// bits per halving of 360 minus one, since longitude takes the first bit.
/// The result is capped at `max_bits`.
pub fn bounding_bits(region: &Region, max_bits: usize) -> usize {
    let lat_bits = match halvings(180.0, region.lat_delta / 2.0) {
        Some(n) => n.saturating_mul(2).max(0) as usize,
        None => max_bits,
    };
    let lon_bits = match halvings(360.0, region.lon_delta / 2.0) {
        Some(n) => n.saturating_mul(2).saturating_sub(1).max(1) as usize,
        None => max_bits,
    };

    lat_bits.min(lon_bits).min(max_bits)
}

/// Minimal set of geohash ranges covering a circle of `radius_meters`
/// around `center`, at most 22 characters deep.
///
/// # Examples
///
/// ```
/// use geobounds::{Coordinate, query_bounds};
///
/// let ranges = query_bounds(&Coordinate::new(40.5623, -74.5976), 4828.03)?;
/// assert!(!ranges.is_empty() && ranges.len() <= 9);
/// assert!(ranges.iter().all(|r| r.is_well_formed()));
/// # Ok::<(), geobounds::GeoboundsError>(())
/// ```
pub fn query_bounds(center: &Coordinate, radius_meters: f64) -> Result<Vec<GeoHashRange>> {
    query_bounds_with_max_bits(center, radius_meters, MAX_BITS)
}

/// Like [`query_bounds`], never resolving finer than `max_bits`.
pub fn query_bounds_with_max_bits(
    center: &Coordinate,
    radius_meters: f64,
    max_bits: usize,
) -> Result<Vec<GeoHashRange>> {
    let region = Region::around(*center, radius_meters)?;
    let bits = bounding_bits(&region, max_bits.min(MAX_BITS));

    if bits == 0 {
        log::debug!(
            "radius {}m around {} spans the globe, scanning everything",
            radius_meters,
            center
        );
        return Ok(vec![GeoHashRange::prefix("")]);
    }

    let candidates = candidate_ranges(&region, bits)?;
    let candidate_count = candidates.len();
    let merged = merge_ranges(candidates);

    log::debug!(
        "radius {}m around {}: {} bits, {} candidate ranges merged into {}",
        radius_meters,
        center,
        bits,
        candidate_count,
        merged.len()
    );

    Ok(merged)
}

/// One range per sample point, before merging.
pub fn candidate_ranges(region: &Region, bits: usize) -> Result<SmallVec<[GeoHashRange; 9]>> {
    let precision = bits.div_ceil(BITS_PER_CHAR);
    region
        .sample_points()
        .iter()
        .map(|point| {
            let hash = encode(point, precision)?;
            range_from_hash(&hash, bits)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geobounds_types::range::RangeEnd;

    #[test]
    fn test_longitude_delta_at_equator() {
        let delta = longitude_delta_at_latitude(1000.0, 0.0);
        assert!((delta - 0.008983).abs() < 1e-6);
    }

    #[test]
    fn test_longitude_delta_widens_poleward() {
        let equator = longitude_delta_at_latitude(1000.0, 0.0);
        let sixty = longitude_delta_at_latitude(1000.0, 60.0);
        assert!((sixty - 0.017921).abs() < 1e-6);
        assert!(sixty > equator);
    }

    #[test]
    fn test_longitude_delta_at_poles() {
        assert_eq!(longitude_delta_at_latitude(1.0, 90.0), 360.0);
        assert_eq!(longitude_delta_at_latitude(1.0, -90.0), 360.0);
        assert_eq!(longitude_delta_at_latitude(0.0, 90.0), 0.0);
    }

    #[test]
    fn test_longitude_delta_capped() {
        assert_eq!(longitude_delta_at_latitude(1e9, 0.0), 360.0);
    }

    #[test]
    fn test_wrap_longitude() {
        assert_eq!(wrap_longitude(10.0), 10.0);
        assert_eq!(wrap_longitude(180.0), 180.0);
        assert_eq!(wrap_longitude(-180.0), -180.0);
        assert!((wrap_longitude(190.0) - -170.0).abs() < 1e-9);
        assert!((wrap_longitude(-190.0) - 170.0).abs() < 1e-9);
        assert!((wrap_longitude(370.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_region_around() {
        let region = Region::around(Coordinate::new(40.5623, -74.5976), 4828.03).unwrap();
        assert!((region.lat_delta / 2.0 - 0.0436633).abs() < 1e-6);
        // Measured at the northern edge
        assert!((region.lon_delta / 2.0 - 0.0570458).abs() < 1e-6);
        assert_eq!(bounding_bits(&region, MAX_BITS), 23);
    }

    #[test]
    fn test_region_clamps_latitude() {
        let region = Region::around(Coordinate::new(89.99, 10.0), 5000.0).unwrap();
        assert_eq!(region.north(), 90.0);
        assert!(region.south() < 89.99);
        assert_eq!(region.lon_delta, 720.0);
    }

    #[test]
    fn test_sample_points_order() {
        let region = Region {
            center: Coordinate::new(10.0, 20.0),
            lat_delta: 2.0,
            lon_delta: 4.0,
        };
        let points = region.sample_points();
        assert_eq!(points[0], Coordinate::new(10.0, 20.0));
        assert_eq!(points[1], Coordinate::new(10.0, 22.0));
        assert_eq!(points[2], Coordinate::new(10.0, 18.0));
        assert_eq!(points[3], Coordinate::new(11.0, 20.0));
        assert_eq!(points[8], Coordinate::new(9.0, 18.0));
    }

    #[test]
    fn test_sample_points_wrap() {
        let region = Region {
            center: Coordinate::new(0.0, 179.5),
            lat_delta: 2.0,
            lon_delta: 2.0,
        };
        let points = region.sample_points();
        assert!((points[1].lon() - -179.5).abs() < 1e-9);
        assert!((points[2].lon() - 178.5).abs() < 1e-9);
    }

    #[test]
    fn test_bounding_bits_extremes() {
        let point = Region {
            center: Coordinate::new(0.0, 0.0),
            lat_delta: 0.0,
            lon_delta: 0.0,
        };
        assert_eq!(bounding_bits(&point, MAX_BITS), MAX_BITS);
        assert_eq!(bounding_bits(&point, 40), 40);

        let globe = Region {
            center: Coordinate::new(0.0, 0.0),
            lat_delta: 400.0,
            lon_delta: 720.0,
        };
        assert_eq!(bounding_bits(&globe, MAX_BITS), 0);
    }

    #[test]
    fn test_query_at_origin_touches_four_quadrants() {
        let ranges = query_bounds(&Coordinate::new(0.0, 0.0), 1000.0).unwrap();
        let starts: Vec<&str> = ranges.iter().map(|r| r.start.as_str()).collect();
        assert_eq!(starts, vec!["7zzzzw", "ebpbp8", "kpbpbn", "s00000"]);
        assert_eq!(ranges[0].end, RangeEnd::PastPrefix("7zzzz".into()));
        assert_eq!(ranges[3].end, RangeEnd::Exclusive("s00004".into()));
    }

    #[test]
    fn test_zero_radius_is_single_cell() {
        let ranges = query_bounds(&Coordinate::new(10.0, 10.0), 0.0).unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].start.len(), 22);
        assert!(ranges[0].is_well_formed());
    }

    #[test]
    fn test_globe_radius_scans_everything() {
        let ranges = query_bounds(&Coordinate::new(0.0, 0.0), 21_000_000.0).unwrap();
        assert_eq!(ranges, vec![GeoHashRange::prefix("")]);
    }

    #[test]
    fn test_invalid_query_input() {
        assert!(query_bounds(&Coordinate::new(0.0, 0.0), -1.0).is_err());
        assert!(query_bounds(&Coordinate::new(0.0, 0.0), f64::NAN).is_err());
        assert!(query_bounds(&Coordinate::new(100.0, 0.0), 10.0).is_err());
    }

    #[test]
    fn test_max_bits_limits_depth() {
        let ranges = query_bounds_with_max_bits(&Coordinate::new(10.0, 10.0), 0.0, 20).unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].start.len(), 4);
    }
}
