//! Request orchestration: encode, build the URL, fetch.
//!
//! The renderer makes at most two attempts. The primary attempt uses the
//! deflate encoding; if encoding or the transport call fails it is
//! discarded and a single fallback attempt is made with the hex encoding.
//! A fallback failure is returned to the caller.

mod config;

pub use config::{DEFAULT_SERVER_URL, RenderConfig, build_url};

use crate::encoding::{DeflateEncoder, DiagramEncoder, EncodingTier, HexEncoder};
use crate::error::{EncodeError, Result, TransportError};
use crate::transport::Transport;

/// Result of a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    /// Raw response bytes, unmodified.
    pub bytes: Vec<u8>,
    /// The URL that produced `bytes`.
    pub url: String,
    /// Which attempt succeeded.
    pub tier: EncodingTier,
}

/// Failure of the primary attempt.
///
/// Only these two kinds send the renderer to the fallback path.
#[derive(Debug)]
enum PrimaryFailure {
    Encoding(EncodeError),
    Transport(TransportError),
}

impl std::fmt::Display for PrimaryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encoding(e) => write!(f, "{e}"),
            Self::Transport(e) => write!(f, "{e}"),
        }
    }
}

/// Two-tier diagram renderer.
///
/// # Examples
///
/// ```
/// use pumlrender::error::TransportError;
/// use pumlrender::encoding::EncodingTier;
/// use pumlrender::render::{RenderConfig, Renderer};
/// use pumlrender::transport::Transport;
///
/// struct Echo;
///
/// impl Transport for Echo {
///     fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
///         Ok(url.as_bytes().to_vec())
///     }
/// }
///
/// let renderer = Renderer::new(RenderConfig::default(), Echo);
/// let outcome = renderer.render("@startuml\nA -> B\n@enduml").unwrap();
/// assert_eq!(outcome.tier, EncodingTier::Primary);
/// assert_eq!(outcome.bytes, outcome.url.as_bytes());
/// ```
pub struct Renderer<T: Transport> {
    config: RenderConfig,
    transport: T,
    primary: Box<dyn DiagramEncoder>,
    fallback: Box<dyn DiagramEncoder>,
}

impl<T: Transport> Renderer<T> {
    /// Creates a renderer with the deflate primary and hex fallback
    /// encoders.
    pub fn new(config: RenderConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            primary: Box::new(DeflateEncoder::new()),
            fallback: Box::new(HexEncoder::new()),
        }
    }

    /// Replaces both encoders.
    #[must_use]
    pub fn with_encoders(
        mut self,
        primary: Box<dyn DiagramEncoder>,
        fallback: Box<dyn DiagramEncoder>,
    ) -> Self {
        self.primary = primary;
        self.fallback = fallback;
        self
    }

    /// Renders `text` through the server.
    ///
    /// # Errors
    ///
    /// Returns the fallback attempt's error if both attempts fail. The
    /// primary attempt's error is logged and dropped.
    pub fn render(&self, text: &str) -> Result<RenderOutcome> {
        match self.try_primary(text) {
            Ok(outcome) => {
                tracing::info!(url = %outcome.url, bytes = outcome.bytes.len(), "rendered");
                return Ok(outcome);
            }
            Err(failure) => {
                tracing::warn!(
                    encoder = self.primary.name(),
                    error = %failure,
                    "primary attempt failed, retrying with {}",
                    self.fallback.name()
                );
            }
        }

        let encoded = self.fallback.encode(text)?;
        let url = build_url(&self.config.server_url, &encoded);
        let bytes = self.transport.fetch(&url)?;

        tracing::info!(url = %url, bytes = bytes.len(), "rendered with fallback encoding");
        Ok(RenderOutcome {
            bytes,
            url,
            tier: EncodingTier::Fallback,
        })
    }

    /// Builds the URL that [`render`](Self::render) would try first,
    /// without making a request.
    ///
    /// Falls back to the hex encoding if the primary encoder fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the fallback encoder fails as well.
    pub fn encode_url(&self, text: &str) -> Result<(String, EncodingTier)> {
        let (encoded, tier) = match self.primary.encode(text) {
            Ok(encoded) => (encoded, EncodingTier::Primary),
            Err(e) => {
                tracing::warn!(encoder = self.primary.name(), error = %e, "primary encoding failed");
                (self.fallback.encode(text)?, EncodingTier::Fallback)
            }
        };
        Ok((build_url(&self.config.server_url, &encoded), tier))
    }

    fn try_primary(&self, text: &str) -> std::result::Result<RenderOutcome, PrimaryFailure> {
        let encoded = self.primary.encode(text).map_err(PrimaryFailure::Encoding)?;
        let url = build_url(&self.config.server_url, &encoded);
        tracing::debug!(url = %url, "primary attempt");
        let bytes = self
            .transport
            .fetch(&url)
            .map_err(PrimaryFailure::Transport)?;
        Ok(RenderOutcome {
            bytes,
            url,
            tier: EncodingTier::Primary,
        })
    }
}
