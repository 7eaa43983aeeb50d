//! CLI argument definitions using clap.

use ai_stats_sdk::{Client, DevtoolsConfig, DEFAULT_BASE_URL};
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::time::Duration;

use crate::commands;
use crate::output::OutputFormat;

/// AI Stats - one API for every model provider
#[derive(Parser, Debug)]
#[command(name = "ai-stats")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Gateway base URL
    #[arg(short = 'u', long, env = "AI_STATS_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// API key for authentication
    #[arg(short = 'k', long, env = "AI_STATS_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Request timeout, e.g. 30s or 2m
    #[arg(long, value_parser = humantime::parse_duration, global = true)]
    pub timeout: Option<Duration>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check gateway health
    Health(commands::health::HealthArgs),

    /// List catalog models
    Models(commands::models::ModelsArgs),

    /// Send a chat completion request
    Chat(commands::chat::ChatArgs),

    /// List the operations the gateway exposes
    #[command(visible_alias = "ops")]
    Operations(commands::operations::OperationsArgs),

    /// Call any operation by its identifier
    Call(commands::call::CallArgs),

    /// Manage provisioning keys
    Keys(commands::keys::KeysArgs),

    /// Manage uploaded files
    Files(commands::files::FilesArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}

/// Connection settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Option<Duration>,
    pub format: OutputFormat,
}

impl Context {
    /// Build an SDK client from the global flags.
    pub fn client(&self) -> Result<Client> {
        let mut builder = Client::builder()
            .base_url(&self.base_url)
            .devtools(DevtoolsConfig::from_env());
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            builder = builder.api_key(key);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().context("failed to create gateway client")
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

impl Cli {
    /// Execute the CLI command.
    pub async fn execute(self) -> Result<()> {
        let ctx = Context {
            base_url: self.base_url,
            api_key: self.api_key,
            timeout: self.timeout,
            format: OutputFormat::from_json_flag(self.json),
        };

        match self.command {
            Commands::Health(args) => commands::health::execute(args, &ctx).await,
            Commands::Models(args) => commands::models::execute(args, &ctx).await,
            Commands::Chat(args) => commands::chat::execute(args, &ctx).await,
            Commands::Operations(args) => commands::operations::execute(args, &ctx),
            Commands::Call(args) => commands::call::execute(args, &ctx).await,
            Commands::Keys(args) => commands::keys::execute(args, &ctx).await,
            Commands::Files(args) => commands::files::execute(args, &ctx).await,
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
