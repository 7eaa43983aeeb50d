//! Call command - invoke any operation by its identifier.

use ai_stats_sdk::find_operation;
use anyhow::{anyhow, bail, Context as _, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use super::{parse_key_value, to_params};
use crate::cli::Context;
use crate::output::{self, CommandResult};

/// Arguments for the call command.
#[derive(Args, Debug)]
pub struct CallArgs {
    /// Operation identifier, e.g. listModels or getVideo
    pub operation: String,

    /// Path parameter (repeatable)
    #[arg(short, long = "path", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub path_params: Vec<(String, String)>,

    /// Query parameter (repeatable)
    #[arg(short, long, value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub query: Vec<(String, String)>,

    /// Extra request header (repeatable)
    #[arg(short = 'H', long = "header", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub headers: Vec<(String, String)>,

    /// JSON request body
    #[arg(short = 'd', long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the JSON request body from a file
    #[arg(long, value_name = "PATH")]
    pub body_file: Option<PathBuf>,

    /// Write the raw response to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Result of a call for JSON output.
#[derive(Debug, Serialize)]
pub struct CallOutput {
    pub operation: String,
    pub response: serde_json::Value,
}

/// Load and validate the request body, if any.
fn load_body(args: &CallArgs) -> Result<Option<String>> {
    let body = match (&args.body, &args.body_file) {
        (Some(body), _) => body.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read body file {}", path.display()))?,
        (None, None) => return Ok(None),
    };
    serde_json::from_str::<serde_json::Value>(&body).context("request body is not valid JSON")?;
    Ok(Some(body))
}

/// Execute the call command.
pub async fn execute(args: CallArgs, ctx: &Context) -> Result<()> {
    let operation = find_operation(&args.operation)
        .ok_or_else(|| anyhow!("unknown operation '{}', see `ai-stats operations`", args.operation))?;

    let body = load_body(&args)?;
    let path = to_params(&args.path_params);
    let query = to_params(&args.query);
    let headers = to_params(&args.headers);

    let client = ctx.client()?;
    let transport = client.transport();
    debug!(
        operation = operation.name,
        method = %operation.method,
        path = operation.path,
        "Dispatching operation"
    );

    if let Some(target) = &args.output {
        let bytes = operation
            .call_bytes(transport, &path, &query, &headers, body.as_deref())
            .await
            .map_err(|e| anyhow!(output::describe_error(&e)))?;
        std::fs::write(target, &bytes)
            .with_context(|| format!("failed to write {}", target.display()))?;

        let message = format!(
            "Wrote {} to {}",
            output::format_bytes(bytes.len() as u64),
            target.display()
        );
        let result: CommandResult<()> = CommandResult::success_message(message);
        return result.print(ctx.format);
    }

    let text = match operation
        .call(transport, &path, &query, &headers, body.as_deref())
        .await
    {
        Ok(text) => text,
        Err(e) => {
            if ctx.is_json() {
                let result: CommandResult<()> =
                    CommandResult::failure(output::describe_error(&e));
                result.print(ctx.format)?;
            }
            bail!("{} failed: {}", operation.name, output::describe_error(&e));
        }
    };

    if ctx.is_json() {
        let response = serde_json::from_str(&text)
            .unwrap_or_else(|_| serde_json::Value::String(text.clone()));
        return CommandResult::success(CallOutput {
            operation: operation.name.to_string(),
            response,
        })
        .print(ctx.format);
    }

    println!("{}", text);
    Ok(())
}
