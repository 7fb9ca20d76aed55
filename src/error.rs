//! Error types for geohash encoding and bound queries.

use thiserror::Error;

/// Errors returned by `geobounds` operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoboundsError {
    /// Coordinate or argument outside the accepted domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Geohash precision must be at least one character
    #[error("Invalid geohash precision: {0} (must be >= 1)")]
    InvalidPrecision(usize),

    /// Search radius must be finite and non-negative
    #[error("Invalid search radius: {0} meters (must be finite and >= 0)")]
    InvalidRadius(f64),

    /// String contains a character outside the geohash alphabet
    #[error("Invalid geohash: {0}")]
    InvalidGeohash(String),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for geobounds operations.
pub type Result<T> = std::result::Result<T, GeoboundsError>;
