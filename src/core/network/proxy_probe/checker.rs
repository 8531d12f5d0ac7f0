//! Proxy Probe Execution
//!
//! Runs the single GET through the proxy and folds every failure into a
//! [`ProbeOutcome`], so callers never see an `Err`:
//! - Validates the proxy address and target URL before any network call
//! - Picks the proxy entry matching the target scheme
//! - Records timing and error kind for the debug log

use std::collections::BTreeMap;
use std::time::Instant;

use crate::core::network::debug_logger::get_debug_logger;
use crate::core::network::proxy_probe::{
    client::{IsahcProbeClient, ProbeClient},
    config::ProbeOptions,
    proxy_url::{parse_target_url, redact_address_text, redact_proxy_credentials, ProxyConfig},
};
use crate::core::network::types::{ProbeDetail, ProbeError, ProbeRequest, ProbeResponse};

/// Result of one probe
#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    /// The proxy forwarded the request and a response came back
    Reachable {
        /// Response body as text, trailing line breaks removed
        body: String,
        headers: BTreeMap<String, String>,
        detail: ProbeDetail,
    },
    /// Anything went wrong before a complete response was read
    Unavailable { error: ProbeError, detail: ProbeDetail },
}

impl ProbeOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeOutcome::Reachable { .. })
    }

    pub fn detail(&self) -> &ProbeDetail {
        match self {
            ProbeOutcome::Reachable { detail, .. } | ProbeOutcome::Unavailable { detail, .. } => detail,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            ProbeOutcome::Reachable { body, .. } => Some(body),
            ProbeOutcome::Unavailable { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ProbeError> {
        match self {
            ProbeOutcome::Reachable { .. } => None,
            ProbeOutcome::Unavailable { error, .. } => Some(error),
        }
    }
}

/// Build the client request from the options
///
/// # Returns
/// * `Ok(ProbeRequest)` - target validated, proxy URL chosen for its scheme
/// * `Err(ProbeError::InvalidAddress)` - proxy address or target URL rejected
pub fn build_probe_request(options: &ProbeOptions) -> Result<ProbeRequest, ProbeError> {
    let target = parse_target_url(&options.target_url)?;
    let proxies = ProxyConfig::from_address(&options.proxy_addr)?;

    Ok(ProbeRequest {
        target_url: target.to_string(),
        proxy_url: proxies.for_target(&target).to_string(),
        timeout: options.timeout,
    })
}

/// Probe the proxy with the given client
///
/// Performs at most one network call. Never returns an error: invalid input,
/// transport failures and timeouts all become [`ProbeOutcome::Unavailable`].
pub async fn run_probe(options: &ProbeOptions, client: &dyn ProbeClient) -> ProbeOutcome {
    let start = Instant::now();
    let logger = get_debug_logger();
    let correlation_id = format!("probe_{}", logger.session_id());

    let mut detail = ProbeDetail {
        target_url: redact_address_text(&options.target_url),
        proxy_url: None,
        checked_at: chrono::Local::now().to_rfc3339(),
        response_time_ms: 0,
        status_code: None,
        error_kind: None,
    };

    let result = match build_probe_request(options) {
        Ok(request) => {
            let proxy_display = redact_proxy_credentials(&request.proxy_url);
            logger.probe_start(&request.target_url, &proxy_display, options.timeout_ms(), correlation_id.clone());
            detail.proxy_url = Some(proxy_display);
            client.fetch(&request).await
        }
        Err(error) => Err(error),
    };

    detail.response_time_ms = start.elapsed().as_millis() as u64;

    let outcome = match result {
        Ok(response) => reachable_outcome(response, detail),
        Err(error) => {
            detail.error_kind = Some(error.kind().to_string());
            logger.error_sync("ProxyProbe", "probe_failed", &error.to_string());
            ProbeOutcome::Unavailable { error, detail }
        }
    };

    let detail = outcome.detail();
    logger.probe_end(
        if outcome.is_reachable() { "reachable" } else { "unavailable" },
        detail.status_code,
        detail.error_kind.as_deref(),
        detail.response_time_ms,
        correlation_id,
    );

    outcome
}

/// Probe the proxy with the production isahc client
///
/// Client construction failures are reported like any other probe failure.
pub async fn probe(options: &ProbeOptions) -> ProbeOutcome {
    match IsahcProbeClient::new() {
        Ok(client) => run_probe(options, &client).await,
        Err(error) => ProbeOutcome::Unavailable {
            detail: ProbeDetail {
                target_url: redact_address_text(&options.target_url),
                proxy_url: None,
                checked_at: chrono::Local::now().to_rfc3339(),
                response_time_ms: 0,
                status_code: None,
                error_kind: Some(error.kind().to_string()),
            },
            error,
        },
    }
}

fn reachable_outcome(response: ProbeResponse, mut detail: ProbeDetail) -> ProbeOutcome {
    // Time spent on the wire, excluding request setup
    detail.response_time_ms = response.duration.as_millis() as u64;
    detail.status_code = Some(response.status_code);
    ProbeOutcome::Reachable {
        body: body_text(&response.body),
        headers: response.headers,
        detail,
    }
}

/// Decode the body as text and drop trailing line breaks
pub fn body_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .trim_end_matches(&['\r', '\n'][..])
        .to_string()
}
