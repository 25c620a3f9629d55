//! # Client Configuration
//!
//! Connection settings for the product API.

use std::time::Duration;

/// Public demo API the dashboard talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://mock-data-josw.onrender.com";

/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Product API client configuration.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use catalog_client::ClientConfig;
///
/// let config = ClientConfig::new("http://localhost:3000")
///     .timeout(Duration::from_secs(5))
///     .user_agent("catalog-tests");
/// assert_eq!(config.base_url, "http://localhost:3000");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root of the API, e.g. `https://host`. Endpoints are appended as paths.
    pub base_url: String,

    /// Per-request timeout.
    /// Default: 15 seconds
    pub timeout: Duration,

    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration for the given base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("catalog-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::new(DEFAULT_BASE_URL)
    }
}
