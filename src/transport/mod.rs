//! Outbound transport to the rendering server.
//!
//! The renderer only needs "GET this URL, give me the bytes", so the
//! transport is a one-method trait. [`HttpTransport`] is the real thing;
//! tests substitute recording or failing implementations.

mod http;

pub use http::{DEFAULT_TIMEOUT, HttpTransport, MAX_RESPONSE_SIZE};

use crate::error::TransportError;

/// Trait for fetching a rendered diagram.
pub trait Transport {
    /// Fetches `url` and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status, or an
    /// unusable response body.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        (**self).fetch(url)
    }
}
