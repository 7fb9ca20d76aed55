//! Validation for coordinates, precisions and radii.

use crate::error::{GeoboundsError, Result};
use geobounds_types::coordinate::Coordinate;

/// Validates a coordinate has finite, in-range latitude and longitude.
///
/// Latitude: [-90.0, 90.0], Longitude: [-180.0, 180.0]
///
/// # Examples
///
/// ```
/// use geobounds::compute::validation::validate_coordinate;
/// use geobounds::Coordinate;
///
/// assert!(validate_coordinate(&Coordinate::new(40.7128, -74.0060)).is_ok());
/// assert!(validate_coordinate(&Coordinate::new(95.0, -74.0)).is_err());
/// assert!(validate_coordinate(&Coordinate::new(40.0, 200.0)).is_err());
/// ```
pub fn validate_coordinate(coord: &Coordinate) -> Result<()> {
    let (lat, lon) = (coord.lat(), coord.lon());

    if !lat.is_finite() {
        return Err(GeoboundsError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lon.is_finite() {
        return Err(GeoboundsError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            lon
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(GeoboundsError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lon) {
        return Err(GeoboundsError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lon
        )));
    }

    Ok(())
}

/// Geohash precision must be at least one character.
pub fn validate_precision(precision: usize) -> Result<()> {
    if precision == 0 {
        return Err(GeoboundsError::InvalidPrecision(precision));
    }
    Ok(())
}

/// Search radius must be finite and non-negative. Zero is a point query.
pub fn validate_radius(radius_meters: f64) -> Result<()> {
    if !radius_meters.is_finite() || radius_meters < 0.0 {
        return Err(GeoboundsError::InvalidRadius(radius_meters));
    }
    Ok(())
}
