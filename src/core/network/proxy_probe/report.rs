//! Human-readable probe reports
//!
//! The summary line is the only thing written to stdout. The verbose report
//! goes to stderr and never changes the summary.

use std::fmt;

use crate::core::network::proxy_probe::checker::ProbeOutcome;

pub const SUCCESS_PREFIX: &str = "proxy OK, returned value:";
pub const FAILURE_PREFIX: &str = "proxy unavailable:";

/// One-line summary, e.g. `proxy OK, returned value: 203.0.113.7`
pub fn render_summary_line(outcome: &ProbeOutcome) -> String {
    match outcome {
        ProbeOutcome::Reachable { body, .. } => format!("{} {}", SUCCESS_PREFIX, body),
        ProbeOutcome::Unavailable { error, .. } => format!("{} {}", FAILURE_PREFIX, error),
    }
}

/// Multi-line diagnostic report for `--verbose`
pub fn render_verbose_report(outcome: &ProbeOutcome) -> String {
    let detail = outcome.detail();
    let mut lines = vec![
        format!("target:  {}", detail.target_url),
        format!("proxy:   {}", detail.proxy_url.as_deref().unwrap_or("-")),
        format!("checked: {}", detail.checked_at),
        format!("elapsed: {}ms", detail.response_time_ms),
    ];

    match outcome {
        ProbeOutcome::Reachable { body, headers, .. } => {
            if let Some(code) = detail.status_code {
                lines.push(format!("status:  {}", code));
            }
            lines.push(format!("body:    {} bytes", body.len()));
            for (name, value) in headers {
                lines.push(format!("  {}: {}", name, value));
            }
        }
        ProbeOutcome::Unavailable { error, .. } => {
            lines.push(format!("error:   {}", error.kind()));
        }
    }

    lines.join("\n")
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_summary_line(self))
    }
}
