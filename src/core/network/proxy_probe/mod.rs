//! Proxy Probe Module
//!
//! Checks that a proxy forwards traffic by fetching one URL through it:
//! - Proxy address normalization for HTTP and SOCKS proxies
//! - A single GET bounded by a fixed timeout
//! - One-line success/failure report; every failure is caught

pub mod checker;
pub mod client;
pub mod config;
pub mod proxy_url;
pub mod report;

// Re-export public API
pub use checker::{build_probe_request, probe, run_probe, ProbeOutcome};
pub use client::{IsahcProbeClient, ProbeClient};
pub use config::{ProbeOptions, DEFAULT_PROXY_ADDR, DEFAULT_TARGET_URL, DEFAULT_TIMEOUT_MS};
pub use proxy_url::{normalize_proxy_url, parse_target_url, redact_address_text, redact_proxy_credentials, ProxyConfig, ProxyUrlError};
pub use report::{render_summary_line, render_verbose_report};
pub use crate::core::network::types::{ProbeDetail, ProbeError, ProbeRequest, ProbeResponse};
