//! Proxy Probe Configuration

use std::time::Duration;

/// Local proxy address probed when none is given
pub const DEFAULT_PROXY_ADDR: &str = "127.0.0.1:2334";

/// Endpoint that answers with the caller's public IP as plain text
pub const DEFAULT_TARGET_URL: &str = "https://api.ipify.org";

/// Upper bound for the whole request/response cycle
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Inputs for a single probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOptions {
    /// Proxy address, `host:port` or `scheme://host:port`
    pub proxy_addr: String,

    /// URL fetched through the proxy
    pub target_url: String,

    /// Maximum wait for the full request, body included
    pub timeout: Duration,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            proxy_addr: DEFAULT_PROXY_ADDR.to_string(),
            target_url: DEFAULT_TARGET_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ProbeOptions {
    pub fn new(proxy_addr: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            proxy_addr: proxy_addr.into(),
            target_url: target_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }
}
