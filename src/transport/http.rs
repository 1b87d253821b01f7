//! HTTP transport with native-tls support.

use crate::error::TransportError;
use crate::transport::Transport;
use std::time::Duration;
use ureq::Agent;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};

/// Default timeout for the whole request (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum response body size (20 MB).
pub const MAX_RESPONSE_SIZE: u64 = 20 * 1024 * 1024;

const USER_AGENT: &str = concat!("pumlrender/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP transport backed by a `ureq` agent.
///
/// Uses native-tls with the platform's root certificates. Non-2xx
/// responses are reported as errors by `ureq` itself; a 2xx body is
/// returned as-is, even when empty.
pub struct HttpTransport {
    agent: Agent,
}

impl HttpTransport {
    /// Creates a transport whose requests time out after `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let tls_config = TlsConfig::builder()
            .provider(TlsProvider::NativeTls)
            .root_certs(RootCerts::PlatformVerifier)
            .build();

        let agent = Agent::config_builder()
            .tls_config(tls_config)
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self { agent }
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        tracing::debug!(url, "GET");

        let bytes = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| TransportError::Request {
                url: url.to_string(),
                reason: e.to_string(),
            })?
            .into_body()
            .with_config()
            .limit(MAX_RESPONSE_SIZE)
            .read_to_vec()
            .map_err(|e| TransportError::Body {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(url, bytes = bytes.len(), "response received");
        Ok(bytes)
    }
}
