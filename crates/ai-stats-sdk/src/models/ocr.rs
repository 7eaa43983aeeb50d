use serde::{Deserialize, Serialize};

use super::{JsonObject, JsonValue};

/// Request body for `createOcr`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrRequest {
    /// Gateway debug options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<JsonValue>,
    /// Echo the upstream provider request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo_upstream_request: Option<bool>,
    /// Image URL or base64 data URI.
    pub image: String,
    /// Language hint (ISO-639-1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Model identifier.
    pub model: String,
    /// Provider routing preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<JsonValue>,
}

/// OCR result, kept as returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrResponse {
    /// Response fields as returned.
    #[serde(flatten)]
    pub fields: JsonObject,
}

impl OcrResponse {
    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }
}
