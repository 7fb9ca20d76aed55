//! Geohash encoding by interleaved bisection.

use super::base32::{self, BITS_PER_CHAR};
use super::validation::{validate_coordinate, validate_precision};
use crate::error::{GeoboundsError, Result};
use geobounds_types::coordinate::Coordinate;

/// Precision used when the caller does not pick one.
pub const DEFAULT_PRECISION: usize = 10;

/// Encodes a coordinate as a geohash of `precision` characters.
///
/// Bits alternate longitude/latitude starting with longitude. A component
/// sitting exactly on a midpoint goes to the upper half.
///
/// # Errors
///
/// `InvalidPrecision` for a precision of zero, `InvalidInput` for a
/// coordinate that is not finite or lies outside the valid ranges.
///
/// # Examples
///
/// ```
/// use geobounds::{Coordinate, encode};
///
/// let hash = encode(&Coordinate::new(40.56230175831099, -74.5975943979423), 10)?;
/// assert_eq!(hash, "dr4yy2psw1");
/// # Ok::<(), geobounds::GeoboundsError>(())
/// ```
pub fn encode(coord: &Coordinate, precision: usize) -> Result<String> {
    validate_precision(precision)?;
    validate_coordinate(coord)?;

    let mut lon_range = (-180.0_f64, 180.0_f64);
    let mut lat_range = (-90.0_f64, 90.0_f64);
    let mut hash = String::with_capacity(precision);
    let mut value = 0u8;
    let mut bit = 0usize;
    let mut is_lon = true;

    while hash.len() < precision {
        let (range, component) = if is_lon {
            (&mut lon_range, coord.lon())
        } else {
            (&mut lat_range, coord.lat())
        };

        let mid = (range.0 + range.1) / 2.0;
        value <<= 1;
        if component >= mid {
            value |= 1;
            range.0 = mid;
        } else {
            range.1 = mid;
        }

        is_lon = !is_lon;
        bit += 1;

        if bit == BITS_PER_CHAR {
            let c = base32::value_to_char(value).ok_or_else(|| {
                GeoboundsError::InvalidGeohash(format!("5-bit value {} out of range", value))
            })?;
            hash.push(c);
            value = 0;
            bit = 0;
        }
    }

    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_hash() {
        let coord = Coordinate::new(40.56230175831099, -74.5975943979423);
        assert_eq!(encode(&coord, 10).unwrap(), "dr4yy2psw1");
    }

    #[test]
    fn test_prefix_property() {
        let coord = Coordinate::new(-33.8688, 151.2093);
        let full = encode(&coord, 12).unwrap();
        for k in 1..=12 {
            assert_eq!(encode(&coord, k).unwrap(), full[..k]);
        }
    }

    #[test]
    fn test_origin_and_corners() {
        // Midpoints go to the upper half
        assert_eq!(encode(&Coordinate::new(0.0, 0.0), 4).unwrap(), "s000");
        assert_eq!(encode(&Coordinate::new(-90.0, -180.0), 4).unwrap(), "0000");
        assert_eq!(encode(&Coordinate::new(90.0, 180.0), 4).unwrap(), "zzzz");
    }

    #[test]
    fn test_zero_precision_rejected() {
        let coord = Coordinate::new(10.0, 10.0);
        assert_eq!(
            encode(&coord, 0),
            Err(GeoboundsError::InvalidPrecision(0))
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(encode(&Coordinate::new(91.0, 0.0), 5).is_err());
        assert!(encode(&Coordinate::new(0.0, f64::NAN), 5).is_err());
    }

    #[test]
    fn test_long_precision() {
        let hash = encode(&Coordinate::new(51.5074, -0.1278), 30).unwrap();
        assert_eq!(hash.len(), 30);
        assert!(hash.starts_with("gcpvj"));
    }
}
