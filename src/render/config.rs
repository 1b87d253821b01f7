//! Renderer configuration and URL construction.

use crate::error::{Error, Result};
use crate::transport::DEFAULT_TIMEOUT;
use std::time::Duration;

/// Default rendering endpoint (SVG output on the public PlantUML server).
pub const DEFAULT_SERVER_URL: &str = "https://www.plantuml.com/plantuml/svg/";

/// Settings for a render run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Base URL the encoded diagram is appended to.
    pub server_url: String,
    /// Transport timeout.
    pub timeout: Duration,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RenderConfig {
    /// Builds a configuration from optional overrides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the server URL is not an `http(s)` URL
    /// or the timeout is zero.
    pub fn from_overrides(server_url: Option<&str>, timeout_secs: Option<u64>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = server_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(Error::Config {
                    message: format!("server URL must start with http:// or https://: {url}"),
                });
            }
            config.server_url = url.to_string();
        }

        if let Some(secs) = timeout_secs {
            if secs == 0 {
                return Err(Error::Config {
                    message: "timeout must be at least 1 second".to_string(),
                });
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

/// Appends an encoded diagram to the base URL.
///
/// Both encodings are URL-safe, so nothing is escaped. A `/` is inserted
/// only if the base does not already end with one.
///
/// # Examples
///
/// ```
/// use pumlrender::render::build_url;
///
/// assert_eq!(build_url("https://host/svg/", "~h41"), "https://host/svg/~h41");
/// assert_eq!(build_url("https://host/svg", "~h41"), "https://host/svg/~h41");
/// ```
#[must_use]
pub fn build_url(base: &str, encoded: &str) -> String {
    let mut url = String::with_capacity(base.len() + 1 + encoded.len());
    url.push_str(base);
    if !base.ends_with('/') {
        url.push('/');
    }
    url.push_str(encoded);
    url
}
