//! Health check command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::time::Instant;

use crate::cli::Context;
use crate::output::{self, CommandResult};

/// Arguments for the health command.
#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Show the full health report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Health check response for output.
#[derive(Debug, Serialize)]
pub struct HealthOutput {
    pub status: String,
    pub base_url: String,
    pub response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Execute the health command.
pub async fn execute(args: HealthArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    let spinner = (!ctx.is_json()).then(|| output::spinner("Checking gateway health..."));
    let start = Instant::now();
    let result = client.health().await;
    let elapsed = start.elapsed();
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match result {
        Ok(body) => {
            let status = body
                .get("status")
                .and_then(|v| v.as_str())
                .unwrap_or("ok")
                .to_string();

            if ctx.is_json() {
                CommandResult::success(HealthOutput {
                    status,
                    base_url: ctx.base_url.clone(),
                    response_time_ms: elapsed.as_millis() as u64,
                    details: args.detailed.then_some(body),
                })
                .print(ctx.format)?;
            } else {
                output::success("Gateway is healthy");
                output::key_value("Gateway", &ctx.base_url);
                output::key_value("Status", &status);
                output::key_value("Response Time", &output::format_duration(elapsed));
                if args.detailed {
                    output::section("Details");
                    output::json(&body)?;
                }
            }
        }
        Err(e) => {
            let result: CommandResult<HealthOutput> =
                CommandResult::failure(format!("Health check failed: {}", output::describe_error(&e)));
            result.print(ctx.format)?;
        }
    }

    Ok(())
}
