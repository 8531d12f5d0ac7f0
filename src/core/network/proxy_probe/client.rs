//! Probe Client Implementations
//!
//! HTTP client abstraction for the proxy probe: a single GET routed through
//! an explicit proxy, bounded by a timeout, with the full body returned.

use crate::core::network::types::{ProbeError, ProbeRequest, ProbeResponse};
use std::collections::BTreeMap;
use std::time::Instant;

use isahc::config::{Configurable, RedirectPolicy};
use isahc::error::ErrorKind;
use isahc::{AsyncReadResponseExt, HttpClient, Request};

/// Client used to send the probe request
///
/// # Implementation Requirements
/// * Must use GET
/// * Must route the request through `request.proxy_url` for both http and https targets
/// * Must bound the whole exchange, body included, by `request.timeout`
/// * Must not follow redirects (the redirect response itself is the result)
#[async_trait::async_trait]
pub trait ProbeClient: Send + Sync {
    async fn fetch(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError>;
}

/// Production probe client backed by isahc (libcurl)
pub struct IsahcProbeClient {
    client: HttpClient,
}

impl IsahcProbeClient {
    pub fn new() -> Result<Self, ProbeError> {
        let client = HttpClient::builder()
            .redirect_policy(RedirectPolicy::None)
            .build()
            .map_err(|e| ProbeError::ClientInit(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl ProbeClient for IsahcProbeClient {
    async fn fetch(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError> {
        let start = Instant::now();
        let timeout_ms = request.timeout.as_millis() as u64;

        let proxy = request
            .proxy_url
            .parse::<isahc::http::Uri>()
            .map_err(|e| ProbeError::Request(format!("proxy URI rejected: {}", e)))?;

        let http_request = Request::get(&request.target_url)
            .timeout(request.timeout)
            .proxy(Some(proxy))
            .header("User-Agent", concat!("proxyprobe/", env!("CARGO_PKG_VERSION")))
            .header("Accept", "*/*")
            .body(Vec::new())
            .map_err(|e| ProbeError::Request(format!("request creation failed: {}", e)))?;

        let mut response = self
            .client
            .send_async(http_request)
            .await
            .map_err(|e| classify_isahc_error(&e, timeout_ms))?;

        let status_code = response.status().as_u16();

        let mut headers = BTreeMap::new();
        for (key, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(key.as_str().to_lowercase(), value_str.to_string());
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_body_error(&e, timeout_ms))?;

        Ok(ProbeResponse {
            status_code,
            body,
            duration: start.elapsed(),
            headers,
        })
    }
}

/// Map an isahc transport error onto a probe error
fn classify_isahc_error(error: &isahc::Error, timeout_ms: u64) -> ProbeError {
    let message = error.to_string();
    match error.kind() {
        ErrorKind::Timeout => ProbeError::Timeout { timeout_ms, message },
        ErrorKind::ConnectionFailed => ProbeError::Connect(message),
        ErrorKind::NameResolution => ProbeError::NameResolution(message),
        ErrorKind::TlsEngine | ErrorKind::BadServerCertificate | ErrorKind::BadClientCertificate => {
            ProbeError::Tls(message)
        }
        ErrorKind::ClientInitialization => ProbeError::ClientInit(message),
        _ => ProbeError::Request(message),
    }
}

fn classify_body_error(error: &std::io::Error, timeout_ms: u64) -> ProbeError {
    if error.kind() == std::io::ErrorKind::TimedOut {
        ProbeError::Timeout {
            timeout_ms,
            message: error.to_string(),
        }
    } else {
        ProbeError::Body(error.to_string())
    }
}
