//! Operations command - list the gateway's operation table.

use ai_stats_sdk::{Operation, OPERATIONS};
use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::Context;
use crate::output::{self, CommandResult};

/// HTTP verb filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodFilter {
    Get,
    Post,
    Patch,
    Delete,
}

impl MethodFilter {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Arguments for the operations command.
#[derive(Args, Debug)]
pub struct OperationsArgs {
    /// Only operations whose identifier or path contains this text
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Only operations using this HTTP method
    #[arg(short, long, value_enum)]
    pub method: Option<MethodFilter>,
}

/// One operation, for both table and JSON output.
#[derive(Debug, Serialize, Tabled)]
pub struct OperationRow {
    #[tabled(rename = "Operation ID")]
    pub name: &'static str,
    #[tabled(rename = "Method")]
    pub method: &'static str,
    #[tabled(rename = "Path")]
    pub path: &'static str,
}

impl From<&Operation> for OperationRow {
    fn from(op: &Operation) -> Self {
        Self {
            name: op.name,
            method: op.method.as_str(),
            path: op.path,
        }
    }
}

fn select(args: &OperationsArgs) -> Vec<OperationRow> {
    let filter = args.filter.as_deref().map(str::to_lowercase);
    OPERATIONS
        .iter()
        .filter(|op| {
            args.method
                .map_or(true, |m| op.method.as_str() == m.as_str())
        })
        .filter(|op| {
            filter.as_deref().map_or(true, |f| {
                op.name.to_lowercase().contains(f) || op.path.to_lowercase().contains(f)
            })
        })
        .map(OperationRow::from)
        .collect()
}

/// Execute the operations command.
pub fn execute(args: OperationsArgs, ctx: &Context) -> Result<()> {
    let rows = select(&args);

    if ctx.is_json() {
        return CommandResult::success(rows).print(ctx.format);
    }

    if rows.is_empty() {
        output::warning("No operations match the criteria");
        return Ok(());
    }

    output::table(&rows);
    println!("\n{} operations", rows.len());
    Ok(())
}
