//! Fallback encoder: lowercase hex with the server's hex marker.

use crate::encoding::DiagramEncoder;
use crate::error::EncodeError;
use std::fmt::Write;

/// Prefix telling the server the payload is plain hex rather than deflate.
pub const HEX_MARKER: &str = "~h";

/// Encodes text as the hex marker followed by two lowercase hex digits per
/// UTF-8 byte.
///
/// # Examples
///
/// ```
/// use pumlrender::encoding::encode_hex;
///
/// assert_eq!(encode_hex("A"), "~h41");
/// assert_eq!(encode_hex(""), "~h");
/// ```
#[must_use]
pub fn encode_hex(text: &str) -> String {
    let mut out = String::with_capacity(HEX_MARKER.len() + text.len() * 2);
    out.push_str(HEX_MARKER);
    for byte in text.bytes() {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Hex encoder used for the fallback attempt.
///
/// Needs no compression agreement with the server, so it is the safe choice
/// when the deflate path fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct HexEncoder;

impl HexEncoder {
    /// Creates a new hex encoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiagramEncoder for HexEncoder {
    fn name(&self) -> &'static str {
        "hex"
    }

    fn encode(&self, text: &str) -> Result<String, EncodeError> {
        Ok(encode_hex(text))
    }
}
