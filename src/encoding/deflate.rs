//! Primary encoder: raw deflate payload in the sextet alphabet.
//!
//! The server expects a raw deflate stream. The text is compressed with the
//! zlib envelope and the envelope is cut off afterwards, which works the
//! same with every deflate backend `flate2` can be built against.

use crate::encoding::DiagramEncoder;
use crate::encoding::stream::encode_bytes;
use crate::error::EncodeError;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use std::io::Write;

/// Length of the zlib header (CMF and FLG bytes).
const ZLIB_HEADER_LEN: usize = 2;

/// Length of the zlib trailer (Adler-32 checksum).
const ZLIB_TRAILER_LEN: usize = 4;

/// Compresses text at maximum level and returns the raw deflate payload.
///
/// # Errors
///
/// Returns [`EncodeError::Compression`] if the compressor fails, or
/// [`EncodeError::TruncatedStream`] if its output cannot hold the envelope.
pub fn compress_payload(text: &str) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(text.as_bytes())?;
    let zlib = encoder.finish()?;

    let len = zlib.len();
    if len < ZLIB_HEADER_LEN + ZLIB_TRAILER_LEN {
        return Err(EncodeError::TruncatedStream { len });
    }

    Ok(zlib[ZLIB_HEADER_LEN..len - ZLIB_TRAILER_LEN].to_vec())
}

/// Deflate-then-sextet encoder used for the primary attempt.
///
/// # Examples
///
/// ```
/// use pumlrender::encoding::{DeflateEncoder, DiagramEncoder};
///
/// let encoder = DeflateEncoder::new();
/// let a = encoder.encode("@startuml\nA -> B\n@enduml").unwrap();
/// let b = encoder.encode("@startuml\nA -> B\n@enduml").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len() % 4, 0);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DeflateEncoder;

impl DeflateEncoder {
    /// Creates a new deflate encoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiagramEncoder for DeflateEncoder {
    fn name(&self) -> &'static str {
        "deflate"
    }

    fn encode(&self, text: &str) -> Result<String, EncodeError> {
        let payload = compress_payload(text)?;
        let encoded = encode_bytes(&payload)?;
        tracing::debug!(
            input_bytes = text.len(),
            payload_bytes = payload.len(),
            encoded_chars = encoded.len(),
            "deflate encoding complete"
        );
        Ok(encoded)
    }
}
