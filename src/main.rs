//! AI Stats CLI
//!
//! Command-line client for the AI Stats gateway.
//!
//! ## Usage
//!
//! ```bash
//! # Check that the gateway is reachable
//! ai-stats health
//!
//! # One-shot chat completion
//! AI_STATS_API_KEY=... ai-stats chat -m "Hello" -M openai/gpt-4o-mini
//!
//! # Call any operation by its identifier
//! ai-stats call getVideo --path video_id=abc123
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod output;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.json);

    cli.execute().await
}

/// Initialize tracing based on verbosity and format. Logs go to stderr so
/// they never mix with command output.
fn init_tracing(verbose: u8, json: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_target(verbose > 1).with_writer(std::io::stderr))
            .init();
    }
}
