//! Error types for pumlrender operations.
//!
//! This module provides the error hierarchy using `thiserror` for encoding,
//! transport, and file I/O. The encoding and transport kinds
//! are kept separate because the renderer recovers from exactly those two
//! during its primary attempt.

use thiserror::Error;

/// Result type alias for pumlrender operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Encoding-related errors (compression, bit packing).
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodeError),

    /// Transport errors (HTTP request to the rendering server).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Errors raised while turning diagram text into an encoded string.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// A sextet fell outside the alphabet after normalization.
    #[error("sextet value {value} out of range 0..=63")]
    SextetOutOfRange {
        /// The offending value, before normalization.
        value: i32,
    },

    /// The compressor failed.
    #[error("compression failed: {0}")]
    Compression(String),

    /// The compressed stream is too short to carry a zlib envelope.
    #[error("compressed stream of {len} bytes is shorter than the zlib envelope")]
    TruncatedStream {
        /// Length of the compressed stream.
        len: usize,
    },
}

/// Errors raised by the outbound transport.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, TLS, or non-success status.
    #[error("request to {url} failed: {reason}")]
    Request {
        /// Requested URL.
        url: String,
        /// Reason for failure.
        reason: String,
    },

    /// Reading the response body failed or exceeded the size limit.
    #[error("failed to read response from {url}: {reason}")]
    Body {
        /// Requested URL.
        url: String,
        /// Reason for failure.
        reason: String,
    },
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

impl From<std::io::Error> for EncodeError {
    fn from(err: std::io::Error) -> Self {
        Self::Compression(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_config() {
        let err = Error::Config {
            message: "bad timeout".to_string(),
        };
        assert_eq!(err.to_string(), "configuration error: bad timeout");
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::SextetOutOfRange { value: 64 };
        assert_eq!(err.to_string(), "sextet value 64 out of range 0..=63");

        let err = EncodeError::TruncatedStream { len: 3 };
        assert!(err.to_string().contains("3 bytes"));
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Request {
            url: "https://example.invalid/x".to_string(),
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("example.invalid"));
        assert!(err.to_string().contains("connection refused"));

        let err = TransportError::Body {
            url: "https://example.invalid/y".to_string(),
            reason: "body too large".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read response from https://example.invalid/y: body too large"
        );
    }

    #[test]
    fn test_io_error_variants() {
        let err = IoError::FileNotFound {
            path: "/tmp/diagram.puml".to_string(),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/diagram.puml");

        let err = IoError::WriteFailed {
            path: "/tmp/out.svg".to_string(),
            reason: "disk full".to_string(),
        };
        assert!(err.to_string().contains("disk full"));

        let err = IoError::DirectoryFailed {
            path: "/tmp/dir".to_string(),
            reason: "exists".to_string(),
        };
        assert!(err.to_string().contains("directory"));
    }

    #[test]
    fn test_error_from_encode() {
        let err: Error = EncodeError::Compression("boom".to_string()).into();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn test_error_from_transport() {
        let err: Error = TransportError::Request {
            url: String::new(),
            reason: "timeout".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn test_encode_error_from_io() {
        let io_err = std::io::Error::other("sink closed");
        let err: EncodeError = io_err.into();
        assert!(matches!(err, EncodeError::Compression(_)));
    }
}
