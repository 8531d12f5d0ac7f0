use clap::Parser;

use crate::core::network::proxy_probe::{ProbeOptions, DEFAULT_PROXY_ADDR, DEFAULT_TARGET_URL};

#[derive(Parser, Debug)]
#[command(name = "proxyprobe")]
#[command(version = concat!("Ver:", env!("CARGO_PKG_VERSION")))]
#[command(about = "Check that a local proxy forwards traffic by fetching one URL through it")]
pub struct Cli {
    /// Proxy address: host:port or scheme://[user:pass@]host:port (http, https, socks4, socks4a, socks5, socks5h)
    #[arg(short = 'p', long = "proxy", default_value = DEFAULT_PROXY_ADDR)]
    pub proxy: String,

    /// URL fetched through the proxy; should answer with the caller's IP
    #[arg(short = 't', long = "target", default_value = DEFAULT_TARGET_URL)]
    pub target: String,

    /// Print status, timing and headers to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Probe options for this invocation; the timeout stays at its fixed default
    pub fn probe_options(&self) -> ProbeOptions {
        ProbeOptions::new(self.proxy.clone(), self.target.clone())
    }
}
