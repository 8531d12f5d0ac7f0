use std::process::{Command, Output};

use clap::Parser;
use proxyprobe::cli::Cli;
use proxyprobe::core::network::proxy_probe::config::ProbeOptions;

use crate::common::closed_local_port;

fn run_binary(extra_args: &[&str]) -> Output {
    let proxy = format!("127.0.0.1:{}", closed_local_port());
    Command::new(env!("CARGO_BIN_EXE_proxyprobe"))
        .args(["--proxy", proxy.as_str(), "--target", "http://unreachable.invalid/ip"])
        .args(extra_args)
        .env_remove("PROXYPROBE_DEBUG")
        .output()
        .expect("failed to run proxyprobe binary")
}

#[test]
fn test_no_flags_matches_fixed_defaults() {
    let cli = Cli::try_parse_from(vec!["proxyprobe"]).unwrap();

    assert_eq!(cli.proxy, "127.0.0.1:2334");
    assert_eq!(cli.target, "https://api.ipify.org");
    assert!(!cli.verbose);
    assert_eq!(cli.probe_options(), ProbeOptions::default());
}

#[test]
fn test_proxy_and_target_flags() {
    let cli = Cli::try_parse_from(vec![
        "proxyprobe",
        "--proxy",
        "socks5://127.0.0.1:2334",
        "-t",
        "http://httpbin.org/ip",
        "-v",
    ])
    .unwrap();

    let options = cli.probe_options();
    assert_eq!(options.proxy_addr, "socks5://127.0.0.1:2334");
    assert_eq!(options.target_url, "http://httpbin.org/ip");
    assert_eq!(options.timeout_ms(), 5000);
    assert!(cli.verbose);
}

#[test]
fn test_timeout_is_not_a_flag() {
    assert!(Cli::try_parse_from(vec!["proxyprobe", "--timeout", "10"]).is_err());
}

#[test]
fn test_unreachable_proxy_exits_zero_with_one_line() {
    let output = run_binary(&[]);

    assert!(output.status.success(), "status: {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout: {:?}", stdout);
    assert!(lines[0].starts_with("proxy unavailable: "), "line: {}", lines[0]);
}

#[test]
fn test_verbose_report_stays_off_stdout() {
    let output = run_binary(&["--verbose"]);

    assert!(output.status.success(), "status: {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout: {:?}", stdout);
    assert!(lines[0].starts_with("proxy unavailable: "), "line: {}", lines[0]);
    assert!(!output.stderr.is_empty());
}
