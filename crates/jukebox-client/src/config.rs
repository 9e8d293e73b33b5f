//! Client configuration.

use std::time::Duration;

/// Base URL of a daemon running on the local machine.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3678";

/// Upper bound on a single request, connection included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for [`crate::HttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the daemon, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout. The only cancellation mechanism.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the given base URL with the default
    /// timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: normalize(base_url.into()), ..Self::default() }
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout: DEFAULT_TIMEOUT }
    }
}

fn normalize(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
