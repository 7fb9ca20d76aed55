//! Half-open geohash ranges.
//!
//! A `GeoHashRange` describes the scan `[start, end)` over a geohash-sorted
//! index. The upper bound is either a concrete hash or "everything that starts
//! with this prefix". The latter is what string-keyed stores usually spell as
//! the prefix followed by `~`, a character that sorts after the whole geohash
//! alphabet.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Character that sorts after every geohash alphabet character.
pub const PAST_PREFIX_SENTINEL: char = '~';

/// Exclusive upper bound of a [`GeoHashRange`].
///
/// # Examples
///
/// ```
/// use geobounds_types::range::RangeEnd;
///
/// let end = RangeEnd::PastPrefix("dr5".into());
/// assert_eq!(end.to_key(), "dr5~");
/// assert!(end > RangeEnd::Exclusive("dr5zzzz".into()));
/// assert!(end < RangeEnd::Exclusive("dr6".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeEnd {
    /// Stops before this hash.
    Exclusive(String),
    /// Stops after the last hash that starts with this prefix.
    PastPrefix(String),
}

impl RangeEnd {
    /// Compares this bound against a concrete geohash.
    ///
    /// `Greater` means the hash lies below the bound.
    pub fn cmp_hash(&self, hash: &str) -> Ordering {
        match self {
            RangeEnd::Exclusive(end) => end.as_str().cmp(hash),
            RangeEnd::PastPrefix(prefix) => {
                if hash.starts_with(prefix.as_str()) {
                    Ordering::Greater
                } else {
                    prefix.as_str().cmp(hash)
                }
            }
        }
    }

    /// String form of the bound, with the sentinel appended for prefix bounds.
    pub fn to_key(&self) -> String {
        match self {
            RangeEnd::Exclusive(end) => end.clone(),
            RangeEnd::PastPrefix(prefix) => format!("{}{}", prefix, PAST_PREFIX_SENTINEL),
        }
    }
}

impl Ord for RangeEnd {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (RangeEnd::Exclusive(a), RangeEnd::Exclusive(b)) => a.cmp(b),
            (RangeEnd::PastPrefix(_), RangeEnd::Exclusive(b)) => self.cmp_hash(b),
            (RangeEnd::Exclusive(a), RangeEnd::PastPrefix(_)) => other.cmp_hash(a).reverse(),
            (RangeEnd::PastPrefix(a), RangeEnd::PastPrefix(b)) => {
                if a == b {
                    Ordering::Equal
                } else if a.starts_with(b.as_str()) {
                    // Longer prefix ends inside the shorter one's block
                    Ordering::Less
                } else if b.starts_with(a.as_str()) {
                    Ordering::Greater
                } else {
                    a.cmp(b)
                }
            }
        }
    }
}

impl PartialOrd for RangeEnd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for RangeEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_key())
    }
}

/// A half-open interval `[start, end)` over geohash strings.
///
/// # Examples
///
/// ```
/// use geobounds_types::range::{GeoHashRange, RangeEnd};
///
/// let range = GeoHashRange::prefix("dr5r");
/// assert!(range.contains_hash("dr5r"));
/// assert!(range.contains_hash("dr5rzzzz"));
/// assert!(!range.contains_hash("dr5s"));
/// assert_eq!(range.end_key(), "dr5r~");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoHashRange {
    pub start: String,
    pub end: RangeEnd,
}

impl GeoHashRange {
    pub fn new(start: impl Into<String>, end: RangeEnd) -> Self {
        Self {
            start: start.into(),
            end,
        }
    }

    /// Range covering every hash that starts with `prefix`.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            end: RangeEnd::PastPrefix(prefix.clone()),
            start: prefix,
        }
    }

    /// `start < end`.
    pub fn is_well_formed(&self) -> bool {
        self.end.cmp_hash(&self.start) == Ordering::Greater
    }

    /// Whether `hash` falls inside `[start, end)`.
    pub fn contains_hash(&self, hash: &str) -> bool {
        self.start.as_str() <= hash && self.end.cmp_hash(hash) == Ordering::Greater
    }

    /// Whether this range includes every hash of `other`.
    pub fn covers(&self, other: &GeoHashRange) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Upper bound as a raw string key for stores that scan by string.
    pub fn end_key(&self) -> String {
        self.end.to_key()
    }
}

impl Ord for GeoHashRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl PartialOrd for GeoHashRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for GeoHashRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
