use proxyprobe::cli::Cli;
use proxyprobe::core::network::proxy_probe::{probe, render_summary_line, render_verbose_report};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    let options = cli.probe_options();

    // Failures are reported, never propagated: the exit code is always 0
    let outcome = probe(&options).await;

    if cli.verbose {
        eprintln!("{}", render_verbose_report(&outcome));
    }
    println!("{}", render_summary_line(&outcome));

    Ok(())
}
