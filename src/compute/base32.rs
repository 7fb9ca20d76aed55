//! Geohash base32 alphabet.

/// The 32 geohash symbols, indexed by their 5-bit value.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of bits carried by one geohash character.
pub const BITS_PER_CHAR: usize = 5;

/// Maps a 5-bit value to its alphabet character.
///
/// Returns `None` for values above 31.
#[inline]
pub fn value_to_char(value: u8) -> Option<char> {
    ALPHABET.get(value as usize).map(|&b| b as char)
}

/// Maps an alphabet character back to its 5-bit value.
///
/// Returns `None` for characters outside the alphabet (`a`, `i`, `l`, `o` and
/// anything non-alphanumeric, upper case included).
#[inline]
pub fn char_to_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    ALPHABET
        .iter()
        .position(|&b| b == c as u8)
        .map(|idx| idx as u8)
}
