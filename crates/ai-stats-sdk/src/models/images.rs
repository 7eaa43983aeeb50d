use serde::{Deserialize, Serialize};

use super::JsonValue;

/// Request body for `createImage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagesGenerationRequest {
    /// Model identifier.
    pub model: String,
    /// Number of outputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<i64>,
    /// Image description.
    pub prompt: String,
    /// Provider routing preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<JsonValue>,
    /// Quality preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    /// `url` or `b64_json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<String>,
    /// Output dimensions, e.g. `1024x1024`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Style preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// End-user identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Fields of a `createImageEdit` multipart form.
///
/// `image` and `mask` are sent as form text fields holding a URL or a
/// base64 data URI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagesEditRequest {
    /// Source image.
    pub image: String,
    /// Mask marking the area to edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    /// Include gateway metadata in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<bool>,
    /// Model identifier.
    pub model: String,
    /// Number of outputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<i64>,
    /// Edit instructions.
    pub prompt: String,
    /// Provider routing preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<JsonValue>,
    /// Output dimensions, e.g. `1024x1024`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Include usage in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<bool>,
    /// End-user identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// A generated image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Base64-encoded image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b64_json: Option<String>,
    /// Prompt after provider rewriting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
    /// Hosted output URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Response body of `createImage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagesGenerationResponse {
    /// Unix timestamp of creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Generated images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Image>>,
}

/// Response body of `createImageEdit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagesEditResponse {
    /// Unix timestamp of creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Edited images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Image>>,
}
