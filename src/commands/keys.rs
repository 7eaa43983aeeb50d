//! Keys command - manage provisioning keys.

use ai_stats_sdk::{KeyStatus, Params, ProvisioningKey, ProvisioningKeyRequest};
use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use tabled::Tabled;

use crate::cli::Context;
use crate::output::{self, CommandResult};

/// Arguments for the keys command.
#[derive(Args, Debug)]
pub struct KeysArgs {
    #[command(subcommand)]
    pub command: KeysCommand,
}

#[derive(Subcommand, Debug)]
pub enum KeysCommand {
    /// List provisioning keys
    List {
        /// Maximum number of keys to return
        #[arg(short, long)]
        limit: Option<u32>,
        /// Offset into the key list
        #[arg(long)]
        offset: Option<u32>,
    },

    /// Show one provisioning key
    Get {
        /// Key identifier
        id: String,
    },

    /// Create a provisioning key
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Scopes as a JSON array, e.g. '["read"]'
        #[arg(short, long)]
        scopes: Option<String>,
    },

    /// Update a provisioning key
    Update {
        /// Key identifier
        id: String,
        /// New display name
        #[arg(short, long)]
        name: Option<String>,
        /// New status
        #[arg(short, long, value_enum)]
        status: Option<StatusArg>,
        /// Soft-block or unblock the key
        #[arg(long)]
        soft_blocked: Option<bool>,
    },

    /// Delete a provisioning key
    Delete {
        /// Key identifier
        id: String,
    },
}

/// Key status as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Active,
    Disabled,
    Revoked,
}

impl From<StatusArg> for KeyStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => Self::Active,
            StatusArg::Disabled => Self::Disabled,
            StatusArg::Revoked => Self::Revoked,
        }
    }
}

/// Key information for table display.
#[derive(Debug, Tabled)]
pub struct KeyRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Prefix")]
    pub prefix: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Last Used")]
    pub last_used: String,
}

impl From<&ProvisioningKey> for KeyRow {
    fn from(key: &ProvisioningKey) -> Self {
        Self {
            id: key.id.clone().unwrap_or_default(),
            name: key.name.clone().unwrap_or_default(),
            prefix: key.prefix.clone().unwrap_or_else(|| "-".to_string()),
            status: key.status.map_or_else(|| "-".to_string(), |s| s.to_string()),
            last_used: key
                .last_used_at
                .as_deref()
                .map_or_else(|| "never".to_string(), |t| output::format_date(Some(t))),
        }
    }
}

fn update_request(
    name: Option<String>,
    status: Option<StatusArg>,
    soft_blocked: Option<bool>,
) -> ProvisioningKeyRequest {
    ProvisioningKeyRequest {
        name,
        scopes: None,
        soft_blocked,
        status: status.map(KeyStatus::from),
    }
}

fn failure(action: &str, e: &ai_stats_sdk::Error, ctx: &Context) -> Result<()> {
    let result: CommandResult<()> = CommandResult::failure(format!(
        "Failed to {}: {}",
        action,
        output::describe_error(e)
    ));
    result.print(ctx.format)
}

/// Execute the keys command.
pub async fn execute(args: KeysArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    match args.command {
        KeysCommand::List { limit, offset } => {
            let mut query = Params::new();
            if let Some(limit) = limit {
                query.insert("limit".to_string(), limit.to_string());
            }
            if let Some(offset) = offset {
                query.insert("offset".to_string(), offset.to_string());
            }

            let list = match client.list_provisioning_keys(&query).await {
                Ok(list) => list,
                Err(e) => return failure("list keys", &e, ctx),
            };

            if ctx.is_json() {
                return CommandResult::success(list).print(ctx.format);
            }

            let rows: Vec<KeyRow> = list.keys.iter().map(KeyRow::from).collect();
            if rows.is_empty() {
                output::warning("No provisioning keys found");
            } else {
                output::table(&rows);
                if let Some(total) = list.total {
                    println!("\n{} of {} keys", rows.len(), total);
                }
            }
            Ok(())
        }

        KeysCommand::Get { id } => {
            let key = match client.get_provisioning_key(&id).await {
                Ok(key) => key,
                Err(e) => return failure("fetch key", &e, ctx),
            };

            if ctx.is_json() {
                return CommandResult::success(key).print(ctx.format);
            }

            let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
            output::section(key.name.as_deref().unwrap_or(&id));
            output::key_value("ID", &or_dash(&key.id));
            output::key_value("Prefix", &or_dash(&key.prefix));
            output::key_value(
                "Status",
                &key.status.map_or_else(|| "-".to_string(), |s| s.to_string()),
            );
            output::key_value("Scopes", &or_dash(&key.scopes));
            output::key_value("Soft blocked", &key.soft_blocked.unwrap_or(false).to_string());
            output::key_value("Created", &output::format_date(key.created_at.as_deref()));
            output::key_value("Last used", &output::format_date(key.last_used_at.as_deref()));
            Ok(())
        }

        KeysCommand::Create { name, scopes } => {
            let request = ProvisioningKeyRequest {
                name: Some(name),
                scopes,
                ..Default::default()
            };
            let key = match client.create_provisioning_key(&request).await {
                Ok(key) => key,
                Err(e) => return failure("create key", &e, ctx),
            };

            if ctx.is_json() {
                return CommandResult::success(key).print(ctx.format);
            }

            output::success("Provisioning key created");
            output::key_value("ID", key.id.as_deref().unwrap_or("-"));
            output::key_value("Key", key.key.as_deref().unwrap_or("-"));
            output::warning("Store the key now; it will not be shown again");
            Ok(())
        }

        KeysCommand::Update {
            id,
            name,
            status,
            soft_blocked,
        } => {
            let request = update_request(name, status, soft_blocked);
            if request == ProvisioningKeyRequest::default() {
                output::warning("Nothing to update; pass --name, --status or --soft-blocked");
                return Ok(());
            }
            match client.update_provisioning_key(&id, &request).await {
                Ok(reply) => {
                    let message = reply
                        .message
                        .unwrap_or_else(|| format!("Key {} updated", id));
                    let result: CommandResult<()> = CommandResult::success_message(message);
                    result.print(ctx.format)
                }
                Err(e) => failure("update key", &e, ctx),
            }
        }

        KeysCommand::Delete { id } => match client.delete_provisioning_key(&id).await {
            Ok(reply) => {
                let message = reply
                    .message
                    .unwrap_or_else(|| format!("Key {} deleted", id));
                let result: CommandResult<()> = CommandResult::success_message(message);
                result.print(ctx.format)
            }
            Err(e) => failure("delete key", &e, ctx),
        },
    }
}
