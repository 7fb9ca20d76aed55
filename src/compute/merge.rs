//! Candidate range construction and the fixed-point range merger.
//!
//! A bound query starts from nine candidate ranges, one per neighbouring cell.
//! Neighbours at coarse precision often share cells or sit next to each other
//! in hash order, so the merger repeatedly joins any two ranges that overlap,
//! touch, or nest until no pair can be joined.

use super::base32::{self, BITS_PER_CHAR};
use crate::error::{GeoboundsError, Result};
use geobounds_types::range::{GeoHashRange, RangeEnd};
use std::cmp::Ordering;

/// Finest bit precision a bound query resolves to (22 characters).
pub const MAX_BITS: usize = 22 * BITS_PER_CHAR;

/// Converts a geohash plus a bit precision into the range of hashes that share
/// its first `bits` bits.
///
/// A hash shorter than `bits` needs becomes a prefix range. Otherwise the hash
/// is truncated, the unused low bits of its last character are cleared for the
/// start, and the end is the next block of that size. A carry past `z` turns
/// the end into a prefix bound on the remaining characters.
///
/// # Examples
///
/// ```
/// use geobounds::compute::merge::range_from_hash;
/// use geobounds::RangeEnd;
///
/// let range = range_from_hash("dr5regw3pp", 48)?;
/// assert_eq!(range.start, "dr5regw3pn");
/// assert_eq!(range.end, RangeEnd::Exclusive("dr5regw3ps".into()));
/// # Ok::<(), geobounds::GeoboundsError>(())
/// ```
pub fn range_from_hash(hash: &str, bits: usize) -> Result<GeoHashRange> {
    if !(1..=MAX_BITS).contains(&bits) {
        return Err(GeoboundsError::InvalidInput(format!(
            "Bit precision must be in [1, {}], got: {}",
            MAX_BITS, bits
        )));
    }

    if let Some((idx, c)) = hash
        .char_indices()
        .find(|&(_, c)| base32::char_to_value(c).is_none())
    {
        return Err(GeoboundsError::InvalidGeohash(format!(
            "character {:?} at index {} in {:?}",
            c, idx, hash
        )));
    }

    let chars = bits.div_ceil(BITS_PER_CHAR);
    if hash.len() < chars {
        return Ok(GeoHashRange::prefix(hash));
    }

    // Alphabet is ASCII, so byte offsets are char offsets
    let prefix = &hash[..chars - 1];
    let last = hash.as_bytes()[chars - 1] as char;
    let value = base32::char_to_value(last)
        .ok_or_else(|| GeoboundsError::InvalidGeohash(hash.to_string()))?;

    let significant = bits - (chars - 1) * BITS_PER_CHAR;
    let unused = BITS_PER_CHAR - significant;
    let start_value = value & !((1u8 << unused) - 1);
    let end_value = start_value + (1u8 << unused);

    let start_char = base32::value_to_char(start_value)
        .ok_or_else(|| GeoboundsError::InvalidGeohash(hash.to_string()))?;
    let start = format!("{}{}", prefix, start_char);

    let end = match base32::value_to_char(end_value) {
        Some(end_char) => RangeEnd::Exclusive(format!("{}{}", prefix, end_char)),
        None => RangeEnd::PastPrefix(prefix.to_string()),
    };

    Ok(GeoHashRange { start, end })
}

/// Joins two ranges if they overlap, touch, or one contains the other.
///
/// Overlap and adjacency are tried in both orders before containment.
pub fn try_join(a: &GeoHashRange, b: &GeoHashRange) -> Option<GeoHashRange> {
    if let Some(joined) = join_ordered(a, b).or_else(|| join_ordered(b, a)) {
        return Some(joined);
    }

    if a.covers(b) {
        return Some(a.clone());
    }
    if b.covers(a) {
        return Some(b.clone());
    }

    None
}

/// `first` starts strictly before `second`, reaches at least its start, and
/// ends strictly before its end.
fn join_ordered(first: &GeoHashRange, second: &GeoHashRange) -> Option<GeoHashRange> {
    let reaches = first.end.cmp_hash(&second.start) != Ordering::Less;
    if reaches && first.start < second.start && first.end < second.end {
        Some(GeoHashRange::new(first.start.clone(), second.end.clone()))
    } else {
        None
    }
}

/// Merges ranges until no two of them can be joined.
///
/// Each join replaces two ranges with one, so the loop runs at most
/// `ranges.len() - 1` times. The result is sorted by start, then end.
///
/// # Examples
///
/// ```
/// use geobounds::{GeoHashRange, RangeEnd, merge_ranges};
///
/// let merged = merge_ranges(vec![
///     GeoHashRange::new("dr4h", RangeEnd::Exclusive("dr4k".into())),
///     GeoHashRange::new("dr4k", RangeEnd::Exclusive("dr4n".into())),
///     GeoHashRange::new("dr4j", RangeEnd::Exclusive("dr4k".into())),
/// ]);
/// assert_eq!(merged, vec![GeoHashRange::new("dr4h", RangeEnd::Exclusive("dr4n".into()))]);
/// ```
pub fn merge_ranges<I>(ranges: I) -> Vec<GeoHashRange>
where
    I: IntoIterator<Item = GeoHashRange>,
{
    let mut working: Vec<GeoHashRange> = ranges.into_iter().collect();
    let max_joins = working.len().saturating_sub(1);

    for _ in 0..max_joins {
        let Some((i, j, joined)) = find_joinable(&working) else {
            break;
        };

        log::trace!(
            "joining {} and {} into {}",
            working[i],
            working[j],
            joined
        );

        // j > i, so removing j first keeps i valid
        working.swap_remove(j);
        working.swap_remove(i);
        working.push(joined);
    }

    debug_assert!(find_joinable(&working).is_none());

    working.sort();
    working
}

fn find_joinable(ranges: &[GeoHashRange]) -> Option<(usize, usize, GeoHashRange)> {
    for i in 0..ranges.len() {
        for j in (i + 1)..ranges.len() {
            if let Some(joined) = try_join(&ranges[i], &ranges[j]) {
                return Some((i, j, joined));
            }
        }
    }
    None
}
