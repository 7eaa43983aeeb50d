use serde::{Deserialize, Serialize};

use super::{JsonObject, JsonValue};

/// Request body for `generateMusic`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MusicGenerateRequest {
    /// Gateway debug options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<JsonValue>,
    /// Length in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Echo the upstream provider request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo_upstream_request: Option<bool>,
    /// Provider-specific options for ElevenLabs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevenlabs: Option<JsonValue>,
    /// Output audio format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Model identifier.
    pub model: String,
    /// Description of the music.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Provider routing preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<JsonValue>,
    /// Provider-specific options for Suno.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suno: Option<JsonValue>,
}

/// Music job. The gateway does not pin down its shape, so every field is
/// kept as returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MusicGenerateResponse {
    /// Response fields as returned.
    #[serde(flatten)]
    pub fields: JsonObject,
}

impl MusicGenerateResponse {
    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }
}
