use serde::{Deserialize, Serialize};

use super::JsonValue;

/// Request body for `createEmbedding`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingsRequest {
    /// Gateway debug options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<JsonValue>,
    /// Requested vector size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<i64>,
    /// Provider-specific embedding options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_options: Option<JsonValue>,
    /// `float` or `base64`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_format: Option<String>,
    /// A string or an array of strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<JsonValue>,
    /// Alias of `input` accepted by the gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<JsonValue>,
    /// Model identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Provider routing preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<JsonValue>,
    /// End-user identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// One embedding vector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    /// Embedding vector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f64>>,
    /// Position in the result list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    /// Always `embedding`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
}

/// Response body of `createEmbedding`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingsResponse {
    /// One embedding per input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Embedding>>,
    /// Model identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Object kind, e.g. `list`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// Token usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<JsonValue>,
}
