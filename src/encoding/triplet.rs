//! Packing of byte triplets into four sextet symbols.

use crate::encoding::sextet::encode_sextet;
use crate::error::EncodeError;

/// Packs three bytes into four alphabet symbols.
///
/// The 24 input bits are split big-endian into four 6-bit groups. Padding
/// of a short final group is the caller's job: pass zeros for the missing
/// bytes.
///
/// # Errors
///
/// Propagates [`EncodeError::SextetOutOfRange`], which cannot occur since
/// every group is masked to 6 bits.
///
/// # Examples
///
/// ```
/// use pumlrender::encoding::pack_triplet;
///
/// assert_eq!(pack_triplet(b'M', b'a', b'n').unwrap(), ['J', 'M', '5', 'k']);
/// ```
pub fn pack_triplet(b1: u8, b2: u8, b3: u8) -> Result<[char; 4], EncodeError> {
    let c1 = b1 >> 2;
    let c2 = ((b1 & 0x3) << 4) | (b2 >> 4);
    let c3 = ((b2 & 0xF) << 2) | (b3 >> 6);
    let c4 = b3 & 0x3F;

    Ok([
        encode_sextet(i32::from(c1 & 0x3F))?,
        encode_sextet(i32::from(c2 & 0x3F))?,
        encode_sextet(i32::from(c3 & 0x3F))?,
        encode_sextet(i32::from(c4 & 0x3F))?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0x00, 0x00, 0x00, "0000" ; "all zero")]
    #[test_case(0xFF, 0xFF, 0xFF, "____" ; "all ones")]
    #[test_case(b'M', b'a', b'n', "JM5k" ; "ascii triplet")]
    #[test_case(0x41, 0x00, 0x00, "GG00" ; "one byte padded")]
    #[test_case(0x41, 0x42, 0x00, "GK80" ; "two bytes padded")]
    #[test_case(0xFC, 0x0F, 0xC0, "_0_0" ; "alternating groups")]
    fn test_pack(b1: u8, b2: u8, b3: u8, expected: &str) {
        let packed: String = pack_triplet(b1, b2, b3).unwrap().iter().collect();
        assert_eq!(packed, expected);
    }

    #[test]
    fn test_deterministic() {
        let first = pack_triplet(0x12, 0x34, 0x56).unwrap();
        let second = pack_triplet(0x12, 0x34, 0x56).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_bits_distinct_output() {
        // Flipping the lowest bit of b3 only touches the last symbol.
        let a = pack_triplet(0x12, 0x34, 0x56).unwrap();
        let b = pack_triplet(0x12, 0x34, 0x57).unwrap();
        assert_eq!(a[..3], b[..3]);
        assert_ne!(a[3], b[3]);
    }
}
