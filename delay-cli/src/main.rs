//! Flight Delay CLI
//!
//! Command-line interface for the realtime flight delay classifier.

mod commands;
mod config;
mod view;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use delay_client::config::DEFAULT_BASE_URL;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "flight-delay")]
#[command(about = "Realtime flight delay prediction CLI", long_about = None)]
struct Cli {
    /// Prediction service URL
    #[arg(long, env = "FLIGHT_DELAY_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Delay between status polls, in milliseconds
    #[arg(long, env = "FLIGHT_DELAY_POLL_INTERVAL_MS", default_value_t = 1000)]
    poll_interval_ms: u64,

    /// Give up after this many status polls
    #[arg(long, env = "FLIGHT_DELAY_MAX_ATTEMPTS", default_value_t = 300)]
    max_attempts: u32,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, env = "FLIGHT_DELAY_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    request_timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the results view
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "delay_cli=info,delay_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        base_url: cli.base_url,
        poll_interval_ms: cli.poll_interval_ms,
        max_attempts: cli.max_attempts,
        request_timeout_secs: cli.request_timeout_secs,
    };

    handle_command(cli.command, &config).await
}
