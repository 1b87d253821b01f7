//! Sextet-to-symbol mapping.

use crate::error::EncodeError;

/// The 64-symbol alphabet used by the PlantUML text encoding.
///
/// Unlike standard base64 the digits come first and the two extra symbols
/// are `-` and `_`, so every symbol is URL-safe.
pub const ALPHABET: &[u8; 64] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

/// Maps a 6-bit value to its alphabet symbol.
///
/// Values in `-64..=-1` are accepted and normalized by adding 64, matching
/// callers that carry sextets through signed-byte arithmetic.
///
/// # Errors
///
/// Returns [`EncodeError::SextetOutOfRange`] if the normalized value is not
/// in `0..=63`.
///
/// # Examples
///
/// ```
/// use pumlrender::encoding::encode_sextet;
///
/// assert_eq!(encode_sextet(0).unwrap(), '0');
/// assert_eq!(encode_sextet(63).unwrap(), '_');
/// assert_eq!(encode_sextet(-1).unwrap(), '_');
/// ```
pub fn encode_sextet(value: i32) -> Result<char, EncodeError> {
    let normalized = if value < 0 { value + 64 } else { value };
    usize::try_from(normalized)
        .ok()
        .and_then(|idx| ALPHABET.get(idx))
        .map(|&b| char::from(b))
        .ok_or(EncodeError::SextetOutOfRange { value })
}
