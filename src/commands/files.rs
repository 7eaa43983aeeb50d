//! Files command - upload and inspect stored files.

use ai_stats_sdk::{FileResponse, FileUploadRequest};
use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use tabled::Tabled;

use crate::cli::Context;
use crate::output::{self, CommandResult};

/// Arguments for the files command.
#[derive(Args, Debug)]
pub struct FilesArgs {
    #[command(subcommand)]
    pub command: FilesCommand,
}

#[derive(Subcommand, Debug)]
pub enum FilesCommand {
    /// List uploaded files
    List,

    /// Show one file's metadata
    Get {
        /// File identifier
        id: String,
    },

    /// Upload a file
    Upload {
        /// Path of the file to upload
        path: PathBuf,
        /// Intended use of the file
        #[arg(short, long, default_value = "batch")]
        purpose: String,
    },
}

/// File information for table display.
#[derive(Debug, Tabled)]
pub struct FileRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Filename")]
    pub filename: String,
    #[tabled(rename = "Size")]
    pub size: String,
    #[tabled(rename = "Purpose")]
    pub purpose: String,
    #[tabled(rename = "Created")]
    pub created: String,
}

impl From<&FileResponse> for FileRow {
    fn from(file: &FileResponse) -> Self {
        Self {
            id: file.id.clone().unwrap_or_default(),
            filename: file.filename.clone().unwrap_or_default(),
            size: file
                .bytes
                .map_or_else(|| "-".to_string(), |b| output::format_bytes(b.max(0) as u64)),
            purpose: file.purpose.clone().unwrap_or_else(|| "-".to_string()),
            created: file
                .created_at
                .map_or_else(|| "-".to_string(), output::format_timestamp),
        }
    }
}

fn print_file(file: &FileResponse) {
    let row = FileRow::from(file);
    output::key_value("ID", &row.id);
    output::key_value("Filename", &row.filename);
    output::key_value("Size", &row.size);
    output::key_value("Purpose", &row.purpose);
    output::key_value("Status", file.status.as_deref().unwrap_or("-"));
    output::key_value("Created", &row.created);
}

/// Read a file from disk into an upload request named after the file.
fn upload_request(path: &Path, purpose: String) -> Result<FileUploadRequest> {
    let contents =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(FileUploadRequest::new(filename, contents, purpose))
}

/// Execute the files command.
pub async fn execute(args: FilesArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    let result = match args.command {
        FilesCommand::List => client.list_files().await.map(|list| {
            let files = list.data.unwrap_or_default();
            if ctx.is_json() {
                return CommandResult::success(files).print(ctx.format);
            }
            let rows: Vec<FileRow> = files.iter().map(FileRow::from).collect();
            if rows.is_empty() {
                output::warning("No files uploaded");
            } else {
                output::table(&rows);
            }
            Ok(())
        }),

        FilesCommand::Get { id } => client.get_file(&id).await.map(|file| {
            if ctx.is_json() {
                return CommandResult::success(file).print(ctx.format);
            }
            print_file(&file);
            Ok(())
        }),

        FilesCommand::Upload { path, purpose } => {
            let request = upload_request(&path, purpose)?;
            let size = request.file.len() as u64;

            let spinner = (!ctx.is_json()).then(|| {
                output::spinner(&format!("Uploading {}...", output::format_bytes(size)))
            });
            let uploaded = client.upload_file(&request).await;
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            uploaded.map(|file| {
                if ctx.is_json() {
                    return CommandResult::success(file).print(ctx.format);
                }
                output::success(&format!("Uploaded {}", request.filename));
                print_file(&file);
                Ok(())
            })
        }
    };

    match result {
        Ok(printed) => printed,
        Err(e) => {
            let result: CommandResult<()> =
                CommandResult::failure(format!("Files request failed: {}", output::describe_error(&e)));
            result.print(ctx.format)
        }
    }
}
