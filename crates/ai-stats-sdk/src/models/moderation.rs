use serde::{Deserialize, Serialize};

use super::JsonValue;

/// Request body for `createModeration`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModerationsRequest {
    /// Gateway debug options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<JsonValue>,
    /// A string, or an array of text and image inputs.
    pub input: JsonValue,
    /// Include gateway metadata in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<bool>,
    /// Model identifier.
    pub model: String,
    /// Provider routing preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<JsonValue>,
}

/// `{"type": "text"}` moderation input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextModerationInput {
    /// Text to classify.
    pub text: String,
    /// Always `text`.
    #[serde(rename = "type")]
    pub r#type: String,
}

/// `{"type": "image_url"}` moderation input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageModerationInput {
    /// Image reference.
    pub image_url: JsonValue,
    /// Always `image_url`.
    #[serde(rename = "type")]
    pub r#type: String,
}

/// Flags per moderation category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModerationCategories {
    /// Harassment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harassment: Option<bool>,
    /// Threatening harassment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harassment_threatening: Option<bool>,
    /// Hate speech.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hate: Option<bool>,
    /// Threatening hate speech.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hate_threatening: Option<bool>,
    /// Self-harm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_harm: Option<bool>,
    /// Self-harm instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_harm_instructions: Option<bool>,
    /// Self-harm intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_harm_intent: Option<bool>,
    /// Sexual content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sexual: Option<bool>,
    /// Sexual content involving minors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sexual_minors: Option<bool>,
    /// Violence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violence: Option<bool>,
    /// Graphic violence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violence_graphic: Option<bool>,
}

/// Scores per moderation category, in `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModerationCategoryScores {
    /// Harassment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harassment: Option<f64>,
    /// Threatening harassment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harassment_threatening: Option<f64>,
    /// Hate speech.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hate: Option<f64>,
    /// Threatening hate speech.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hate_threatening: Option<f64>,
    /// Self-harm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_harm: Option<f64>,
    /// Self-harm instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_harm_instructions: Option<f64>,
    /// Self-harm intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_harm_intent: Option<f64>,
    /// Sexual content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sexual: Option<f64>,
    /// Sexual content involving minors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sexual_minors: Option<f64>,
    /// Violence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violence: Option<f64>,
    /// Graphic violence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violence_graphic: Option<f64>,
}

/// Classification of one input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModerationResult {
    /// Per-category flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<ModerationCategories>,
    /// Per-category scores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_scores: Option<ModerationCategoryScores>,
    /// Any category was flagged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flagged: Option<bool>,
}

/// Response body of `createModeration`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModerationsResponse {
    /// Identifier assigned by the gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Model that classified the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// One result per input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ModerationResult>>,
}

impl ModerationsResponse {
    /// Whether any result was flagged.
    pub fn flagged(&self) -> bool {
        self.results
            .iter()
            .flatten()
            .any(|r| r.flagged.unwrap_or(false))
    }
}
