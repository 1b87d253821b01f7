//! Diagram text encodings accepted by the PlantUML server.
//!
//! Two encodings are provided behind the [`DiagramEncoder`] trait:
//!
//! - **Deflate**: the text is compressed to a raw deflate stream and packed
//!   into a URL-safe 64-symbol alphabet (the server's preferred form)
//! - **Hex**: the UTF-8 bytes as lowercase hex behind the `~h` marker, used
//!   as a fallback when the deflate form cannot be produced or is rejected

mod deflate;
mod hex;
mod sextet;
mod stream;
mod triplet;

pub use deflate::{DeflateEncoder, compress_payload};
pub use hex::{HEX_MARKER, HexEncoder, encode_hex};
pub use sextet::{ALPHABET, encode_sextet};
pub use stream::{encode_bytes, encoded_len};
pub use triplet::pack_triplet;

use crate::error::EncodeError;
use serde::Serialize;
use std::fmt;

/// Trait for diagram text encoders.
///
/// Implementations turn the diagram source into the path segment appended
/// to the server's base URL. The output must be URL-safe as-is.
///
/// # Examples
///
/// ```
/// use pumlrender::encoding::{DiagramEncoder, HexEncoder};
///
/// let encoder = HexEncoder::new();
/// assert_eq!(encoder.encode("A").unwrap(), "~h41");
/// ```
pub trait DiagramEncoder {
    /// Returns the encoder name used in logs.
    fn name(&self) -> &'static str;

    /// Encodes the diagram text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be encoded.
    fn encode(&self, text: &str) -> Result<String, EncodeError>;
}

/// Which of the two encoding attempts produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingTier {
    /// Deflate encoding, tried first.
    Primary,
    /// Hex encoding, tried once after the primary attempt failed.
    Fallback,
}

impl fmt::Display for EncodingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_display() {
        assert_eq!(EncodingTier::Primary.to_string(), "primary");
        assert_eq!(EncodingTier::Fallback.to_string(), "fallback");
    }

    #[test]
    fn test_tier_serialize() {
        let json = serde_json::to_string(&EncodingTier::Fallback).unwrap();
        assert_eq!(json, "\"fallback\"");
    }

    #[test]
    fn test_encoders_as_trait_objects() {
        let encoders: Vec<Box<dyn DiagramEncoder>> =
            vec![Box::new(DeflateEncoder::new()), Box::new(HexEncoder::new())];
        let names: Vec<&str> = encoders.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["deflate", "hex"]);
    }
}
