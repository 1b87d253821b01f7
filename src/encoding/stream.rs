//! Encoding of arbitrary byte sequences.

use crate::encoding::triplet::pack_triplet;
use crate::error::EncodeError;

/// Returns the encoded length for `len` input bytes.
#[must_use]
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

/// Encodes a byte sequence with the sextet alphabet.
///
/// Bytes are consumed in triplets. A trailing pair is padded with one zero
/// byte, a trailing single byte with two. The output carries no separators
/// and its length is always [`encoded_len`] of the input; an empty input
/// encodes to an empty string.
///
/// There is no inverse: decoding is the rendering server's business.
///
/// # Errors
///
/// Propagates errors from [`pack_triplet`].
///
/// # Examples
///
/// ```
/// use pumlrender::encoding::encode_bytes;
///
/// assert_eq!(encode_bytes(b"").unwrap(), "");
/// assert_eq!(encode_bytes(b"A").unwrap(), "GG00");
/// assert_eq!(encode_bytes(b"Man").unwrap(), "JM5k");
/// ```
pub fn encode_bytes(data: &[u8]) -> Result<String, EncodeError> {
    let mut out = String::with_capacity(encoded_len(data.len()));

    for chunk in data.chunks(3) {
        let packed = match *chunk {
            [b1, b2, b3] => pack_triplet(b1, b2, b3)?,
            [b1, b2] => pack_triplet(b1, b2, 0)?,
            [b1] => pack_triplet(b1, 0, 0)?,
            // chunks(3) never yields an empty slice
            _ => continue,
        };
        out.extend(packed);
    }

    Ok(out)
}
