//! Local request recording for the AI Stats devtools viewer.
//!
//! When enabled, every typed [`Client`](crate::Client) call appends one JSON
//! line to `<directory>/generations.jsonl` holding the request, the decoded
//! response or the error, timing, and usage. `<directory>/metadata.json`
//! describes the session and is written once.
//!
//! Recording never changes the outcome of a call: write failures are logged
//! and dropped.
//!
//! ```rust,no_run
//! use ai_stats_sdk::{Client, DevtoolsConfig};
//!
//! # fn example() -> Result<(), ai_stats_sdk::Error> {
//! let client = Client::builder()
//!     .devtools(DevtoolsConfig::new("/tmp/ai-stats-devtools"))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use crate::error::Error;
use crate::models::JsonValue;
use crate::operations::Operation;
use chrono::Utc;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;
use tracing::{debug, warn};
use uuid::Uuid;

/// Environment variable that turns recording on (`1`, `true`, `yes` or `on`).
pub const DEVTOOLS_ENV: &str = "AI_STATS_DEVTOOLS";
/// Environment variable overriding the recording directory.
pub const DEVTOOLS_DIR_ENV: &str = "AI_STATS_DEVTOOLS_DIR";
/// Recording directory used when none is configured.
pub const DEFAULT_DEVTOOLS_DIR: &str = ".ai-stats-devtools";

const SDK_NAME: &str = "rust";
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
const GENERATIONS_FILE: &str = "generations.jsonl";
const METADATA_FILE: &str = "metadata.json";
const ASSET_KINDS: [&str; 3] = ["images", "audio", "video"];

/// Devtools recording settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevtoolsConfig {
    /// Whether calls are recorded.
    pub enabled: bool,
    /// Directory holding `metadata.json`, `generations.jsonl` and `assets/`.
    pub directory: PathBuf,
    /// Store binary responses (speech, video) under `assets/`.
    pub save_assets: bool,
}

impl Default for DevtoolsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: PathBuf::from(DEFAULT_DEVTOOLS_DIR),
            save_assets: true,
        }
    }
}

impl DevtoolsConfig {
    /// Recording enabled into `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            enabled: true,
            directory: directory.into(),
            save_assets: true,
        }
    }

    /// Read `AI_STATS_DEVTOOLS` and `AI_STATS_DEVTOOLS_DIR`. Recording stays
    /// off unless the flag is set.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(DEVTOOLS_ENV).ok().as_deref(),
            std::env::var(DEVTOOLS_DIR_ENV).ok(),
        )
    }

    fn from_vars(flag: Option<&str>, directory: Option<String>) -> Self {
        let directory = directory
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty())
            .unwrap_or_else(|| DEFAULT_DEVTOOLS_DIR.to_string());
        Self {
            enabled: flag.is_some_and(flag_enabled),
            directory: PathBuf::from(directory),
            save_assets: true,
        }
    }

    /// Toggle asset storage.
    pub fn save_assets(mut self, save: bool) -> Self {
        self.save_assets = save;
        self
    }
}

fn flag_enabled(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Map an operation to the endpoint type the viewer groups by.
pub fn endpoint_type(operation: &str) -> &str {
    match operation {
        "createChatCompletion" => "chat.completions",
        "createAnthropicMessage" => "messages",
        "createImage" => "images.generations",
        "createImageEdit" => "images.edits",
        "createSpeech" => "audio.speech",
        "createTranscription" => "audio.transcriptions",
        "createTranslation" => "audio.translations",
        "createVideo" => "video.generations",
        "createEmbedding" => "embeddings",
        "createModeration" => "moderations",
        "createResponse" => "responses",
        "createBatch" => "batches.create",
        "retrieveBatch" => "batches.retrieve",
        "listFiles" => "files.list",
        "retrieveFile" => "files.retrieve",
        "uploadFile" => "files.upload",
        "listModels" => "models.list",
        "listProviders" => "providers",
        "getCredits" => "credits",
        "getActivity" => "activity",
        "healthz" => "health",
        "getAnalytics" => "analytics",
        "getGeneration" => "generations.retrieve",
        "listProvisioningKeys" => "provisioning.keys.list",
        "createProvisioningKey" => "provisioning.keys.create",
        "getProvisioningKey" => "provisioning.keys.get",
        "updateProvisioningKey" => "provisioning.keys.update",
        "deleteProvisioningKey" => "provisioning.keys.delete",
        other => other,
    }
}

/// Timing of one call, taken before it is sent.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Capture {
    timestamp: i64,
    started: Instant,
}

impl Capture {
    pub(crate) fn start() -> Self {
        Self {
            timestamp: Utc::now().timestamp_millis(),
            started: Instant::now(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SessionMetadata {
    session_id: Uuid,
    started_at: i64,
    sdk: &'static str,
    sdk_version: &'static str,
    platform: String,
}

#[derive(Debug, Serialize)]
struct Entry<'a> {
    id: Uuid,
    #[serde(rename = "type")]
    kind: &'a str,
    timestamp: i64,
    duration_ms: u64,
    request: &'a JsonValue,
    response: Option<&'a JsonValue>,
    error: Option<EntryError>,
    metadata: EntryMetadata,
}

#[derive(Debug, Serialize)]
struct EntryError {
    message: String,
    code: &'static str,
    status: Option<u16>,
}

#[derive(Debug, Serialize)]
struct EntryMetadata {
    sdk: &'static str,
    sdk_version: &'static str,
    stream: bool,
    status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    usage: Option<EntryUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<String>,
}

#[derive(Debug, Serialize)]
struct EntryUsage {
    prompt_tokens: Option<u64>,
    completion_tokens: Option<u64>,
    total_tokens: Option<u64>,
}

/// Appends call records to a devtools directory.
pub(crate) struct Recorder {
    directory: PathBuf,
    save_assets: bool,
    generations: Mutex<File>,
}

impl Recorder {
    /// Create the directory layout, write session metadata if absent and open
    /// `generations.jsonl` for appending.
    pub(crate) fn open(config: &DevtoolsConfig) -> io::Result<Self> {
        fs::create_dir_all(&config.directory)?;
        if config.save_assets {
            for kind in ASSET_KINDS {
                fs::create_dir_all(config.directory.join("assets").join(kind))?;
            }
        }

        let metadata_path = config.directory.join(METADATA_FILE);
        if !metadata_path.exists() {
            let metadata = SessionMetadata {
                session_id: Uuid::new_v4(),
                started_at: Utc::now().timestamp_millis(),
                sdk: SDK_NAME,
                sdk_version: SDK_VERSION,
                platform: format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
            };
            let text = serde_json::to_string_pretty(&metadata).map_err(io::Error::other)?;
            fs::write(&metadata_path, text)?;
        }

        let generations = OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.directory.join(GENERATIONS_FILE))?;

        debug!(directory = %config.directory.display(), "Devtools recording enabled");
        Ok(Self {
            directory: config.directory.clone(),
            save_assets: config.save_assets,
            generations: Mutex::new(generations),
        })
    }

    /// Recording directory.
    pub(crate) fn directory(&self) -> &Path {
        &self.directory
    }

    /// Append one record for a finished call.
    pub(crate) fn record(
        &self,
        operation: &Operation,
        capture: Capture,
        request: &JsonValue,
        outcome: Result<&JsonValue, &Error>,
    ) {
        let line = entry_line(operation, capture, request, outcome);
        if let Err(e) = self.append(&line) {
            warn!(operation = operation.name, error = %e, "Failed to write devtools record");
        }
    }

    /// Record a call whose reply is binary. The payload is stored under
    /// `assets/` when asset storage is on.
    pub(crate) fn record_bytes(
        &self,
        operation: &Operation,
        capture: Capture,
        request: &JsonValue,
        outcome: Result<&[u8], &Error>,
    ) {
        match outcome {
            Ok(bytes) => {
                let mut summary = serde_json::json!({ "bytes": bytes.len() });
                if let Some(asset) = self.save_asset(operation, bytes) {
                    summary["asset"] = JsonValue::String(asset);
                }
                self.record(operation, capture, request, Ok(&summary));
            }
            Err(e) => self.record(operation, capture, request, Err(e)),
        }
    }

    fn save_asset(&self, operation: &Operation, bytes: &[u8]) -> Option<String> {
        if !self.save_assets {
            return None;
        }
        let kind = match operation.name {
            "createSpeech" => "audio",
            "getVideoContent" => "video",
            _ => return None,
        };
        let relative = format!("assets/{}/{}.bin", kind, Uuid::new_v4());
        match fs::write(self.directory.join(&relative), bytes) {
            Ok(()) => Some(relative),
            Err(e) => {
                warn!(operation = operation.name, error = %e, "Failed to save devtools asset");
                None
            }
        }
    }

    fn append(&self, line: &str) -> io::Result<()> {
        let mut file = self
            .generations
            .lock()
            .map_err(|_| io::Error::other("devtools writer lock poisoned"))?;
        writeln!(file, "{}", line)
    }
}

fn entry_line(
    operation: &Operation,
    capture: Capture,
    request: &JsonValue,
    outcome: Result<&JsonValue, &Error>,
) -> String {
    let (response, error, status_code) = match outcome {
        Ok(response) => (Some(response), None, None),
        Err(e) => (
            None,
            Some(EntryError {
                message: e.to_string(),
                code: error_code(e),
                status: e.status_code(),
            }),
            e.status_code(),
        ),
    };

    let model = response
        .and_then(|r| r.get("model"))
        .and_then(JsonValue::as_str)
        .or_else(|| request.get("model").and_then(JsonValue::as_str))
        .map(str::to_string);
    let provider = response
        .and_then(|r| r.get("provider"))
        .and_then(JsonValue::as_str)
        .map(str::to_string);

    let entry = Entry {
        id: Uuid::new_v4(),
        kind: endpoint_type(operation.name),
        timestamp: capture.timestamp,
        duration_ms: capture.started.elapsed().as_millis() as u64,
        request,
        response,
        error,
        metadata: EntryMetadata {
            sdk: SDK_NAME,
            sdk_version: SDK_VERSION,
            stream: false,
            status_code,
            usage: response.and_then(usage_of),
            model,
            provider,
        },
    };

    // Every field is plain data; serialization cannot fail.
    serde_json::to_string(&entry).unwrap_or_default()
}

fn usage_of(response: &JsonValue) -> Option<EntryUsage> {
    let usage = response.get("usage")?.as_object()?;
    let count = |names: &[&str]| {
        names
            .iter()
            .find_map(|name| usage.get(*name).and_then(JsonValue::as_u64))
    };
    Some(EntryUsage {
        prompt_tokens: count(&["prompt_tokens", "input_tokens"]),
        completion_tokens: count(&["completion_tokens", "output_tokens"]),
        total_tokens: count(&["total_tokens"]),
    })
}

fn error_code(error: &Error) -> &'static str {
    match error {
        Error::RequestFailed { .. } => "request_failed",
        Error::Http(_) => "http",
        Error::MissingPathParameter { .. } => "missing_path_parameter",
        Error::InvalidPathParameter { .. } => "invalid_path_parameter",
        Error::Configuration { .. } => "configuration",
        Error::Serialization(_) => "serialization",
    }
}
