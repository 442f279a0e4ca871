//! Stratus CLI - Deploy and bootstrap network controller appliances

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stratus_cli::cli::Cli;

#[tokio::main]
async fn main() {
    // Logs go to stderr so progress output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stratus_cli=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
