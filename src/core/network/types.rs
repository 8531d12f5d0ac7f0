// Core types shared by the probe and the debug logger
use crate::core::network::proxy_probe::proxy_url::ProxyUrlError;
use std::collections::BTreeMap;
use std::time::Duration;

/// Request handed to a [`ProbeClient`](crate::core::network::proxy_probe::client::ProbeClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    /// Validated target URL
    pub target_url: String,
    /// Proxy URL selected for the target's scheme (credentials included)
    pub proxy_url: String,
    /// Budget for the whole exchange
    pub timeout: Duration,
}

/// Response captured from the target through the proxy
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status_code: u16,
    pub body: Vec<u8>,
    pub duration: Duration,
    /// Lower-cased header names
    pub headers: BTreeMap<String, String>,
}

/// Failure of a single probe
///
/// Every variant is reported to the user the same way ("proxy unavailable");
/// the variant only shapes the description and the debug log's `error_kind`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error(transparent)]
    InvalidAddress(#[from] ProxyUrlError),
    #[error("request timed out after {timeout_ms}ms: {message}")]
    Timeout { timeout_ms: u64, message: String },
    #[error("could not connect: {0}")]
    Connect(String),
    #[error("name resolution failed: {0}")]
    NameResolution(String),
    #[error("TLS failure: {0}")]
    Tls(String),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("HTTP client initialization failed: {0}")]
    ClientInit(String),
    #[error("request failed: {0}")]
    Request(String),
}

impl ProbeError {
    /// Stable short label used in logs and verbose output
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeError::InvalidAddress(_) => "invalid_address",
            ProbeError::Timeout { .. } => "timeout",
            ProbeError::Connect(_) => "connect",
            ProbeError::NameResolution(_) => "name_resolution",
            ProbeError::Tls(_) => "tls",
            ProbeError::Body(_) => "body",
            ProbeError::ClientInit(_) => "client_init",
            ProbeError::Request(_) => "request",
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ProbeError::Timeout { .. })
    }
}

/// Details about a probe attempt, kept for diagnostics only
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProbeDetail {
    /// Target URL as given
    pub target_url: String,
    /// Proxy URL with credentials redacted (None when the address was invalid)
    pub proxy_url: Option<String>,
    /// Local RFC 3339 timestamp of the attempt
    pub checked_at: String,
    /// Wall-clock time spent on the attempt
    pub response_time_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// `ProbeError::kind()` of the failure, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}
