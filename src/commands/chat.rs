//! Chat command - send one chat completion request.

use ai_stats_sdk::{ChatCompletionsRequest, ChatMessage};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::{self, Read};

use crate::cli::Context;
use crate::output::{self, CommandResult};

/// Arguments for the chat command.
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Message to send (if not provided, reads from stdin)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Model to use
    #[arg(short = 'M', long, default_value = "openai/gpt-4o-mini")]
    pub model: String,

    /// System prompt
    #[arg(short, long)]
    pub system: Option<String>,

    /// Temperature (0.0 to 2.0)
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Maximum tokens to generate
    #[arg(long)]
    pub max_tokens: Option<i64>,

    /// Top-p sampling parameter
    #[arg(long)]
    pub top_p: Option<f64>,

    /// Seed for deterministic outputs
    #[arg(long)]
    pub seed: Option<i64>,

    /// Show token usage
    #[arg(long)]
    pub show_usage: bool,
}

/// Chat response for output.
#[derive(Debug, Serialize)]
pub struct ChatOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub model: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<ai_stats_sdk::Usage>,
}

/// Build the request from the flags and the message text.
fn build_request(args: &ChatArgs, message: String) -> ChatCompletionsRequest {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = &args.system {
        messages.push(ChatMessage::system(system.clone()));
    }
    messages.push(ChatMessage::user(message));

    let mut request = ChatCompletionsRequest::new(args.model.clone(), messages);
    request.temperature = args.temperature;
    request.max_output_tokens = args.max_tokens;
    request.top_p = args.top_p;
    request.seed = args.seed;
    if args.show_usage {
        request.usage = Some(true);
    }
    request
}

/// Execute the chat command.
pub async fn execute(args: ChatArgs, ctx: &Context) -> Result<()> {
    let message = match &args.message {
        Some(msg) => msg.clone(),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            input.trim().to_string()
        }
    };

    if message.is_empty() {
        let result: CommandResult<()> = CommandResult::failure("No message provided");
        return result.print(ctx.format);
    }

    let client = ctx.client()?;
    let request = build_request(&args, message);

    let spinner = (!ctx.is_json()).then(|| output::spinner("Generating response..."));
    let result = client.chat_completion(&request).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            let result: CommandResult<ChatOutput> =
                CommandResult::failure(format!("Request failed: {}", output::describe_error(&e)));
            return result.print(ctx.format);
        }
    };

    let content = response.content().unwrap_or_default().to_string();

    if ctx.is_json() {
        let finish_reason = response
            .choices
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.finish_reason.clone());
        return CommandResult::success(ChatOutput {
            id: response.id.clone(),
            model: response.model.clone().unwrap_or(args.model),
            content,
            finish_reason,
            usage: response.usage,
        })
        .print(ctx.format);
    }

    println!("{}", content);

    if args.show_usage {
        if let Some(usage) = &response.usage {
            let count = |n: Option<i64>| n.map_or_else(|| "-".to_string(), |n| n.to_string());
            output::section("Token Usage");
            output::key_value("Prompt", &count(usage.prompt_tokens));
            output::key_value("Completion", &count(usage.completion_tokens));
            output::key_value("Total", &count(usage.total_tokens));
        }
    }

    Ok(())
}
