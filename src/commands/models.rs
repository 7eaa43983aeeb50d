//! Models command - list catalog models.

use ai_stats_sdk::{Model, Params};
use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use crate::cli::Context;
use crate::output::{self, CommandResult};

/// Arguments for the models command.
#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Only models from this organisation (openai, anthropic, ...)
    #[arg(short, long)]
    pub organisation: Option<String>,

    /// Filter models by id or name
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Maximum number of models to fetch
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Offset into the catalog
    #[arg(long)]
    pub offset: Option<u32>,
}

/// Model information for table display.
#[derive(Debug, Tabled)]
pub struct ModelRow {
    #[tabled(rename = "Model ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Organisation")]
    pub organisation: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Released")]
    pub released: String,
}

impl From<&Model> for ModelRow {
    fn from(m: &Model) -> Self {
        Self {
            id: m.model_id.clone().unwrap_or_default(),
            name: m.name.clone().unwrap_or_default(),
            organisation: m.organisation_id.clone().unwrap_or_default(),
            status: m.status.clone().unwrap_or_else(|| "-".to_string()),
            released: output::format_date(m.release_date.as_deref()),
        }
    }
}

/// Build the `listModels` query from the flags.
fn query(args: &ModelsArgs) -> Params {
    let mut query = Params::new();
    if let Some(org) = &args.organisation {
        query.insert("organisation".to_string(), org.clone());
    }
    if let Some(limit) = args.limit {
        query.insert("limit".to_string(), limit.to_string());
    }
    if let Some(offset) = args.offset {
        query.insert("offset".to_string(), offset.to_string());
    }
    query
}

fn matches_filter(model: &Model, filter: &str) -> bool {
    let filter = filter.to_lowercase();
    [&model.model_id, &model.name]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&filter))
}

/// Execute the models command.
pub async fn execute(args: ModelsArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    let spinner = (!ctx.is_json()).then(|| output::spinner("Fetching models..."));
    let result = client.list_models(&query(&args)).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let mut models = match result {
        Ok(response) => response.models,
        Err(e) => {
            let result: CommandResult<Vec<Model>> = CommandResult::failure(format!(
                "Failed to fetch models: {}",
                output::describe_error(&e)
            ));
            return result.print(ctx.format);
        }
    };

    if let Some(filter) = &args.filter {
        models.retain(|m| matches_filter(m, filter));
    }

    if ctx.is_json() {
        return CommandResult::success(models).print(ctx.format);
    }

    let mut rows: Vec<ModelRow> = models.iter().map(ModelRow::from).collect();
    rows.sort_by(|a, b| a.id.cmp(&b.id));

    if rows.is_empty() {
        output::warning("No models found matching the criteria");
    } else {
        output::success(&format!("Found {} models", rows.len()));
        println!();
        output::table(&rows);
    }

    Ok(())
}
