//! Speech synthesis, transcription and translation records.

use serde::{Deserialize, Serialize};

use super::JsonValue;

/// Request body for `createSpeech`. The reply is raw audio bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioSpeechRequest {
    /// `mp3`, `wav`, `ogg` or `aac`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Text to speak.
    pub input: String,
    /// Model identifier.
    pub model: String,
    /// Provider routing preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<JsonValue>,
    /// Voice preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
}

/// Request body for `createTranscription`.
///
/// Audio is passed either inline (`audio_b64`) or by reference (`audio_url`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioTranscriptionRequest {
    /// Base64-encoded audio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_b64: Option<String>,
    /// URL of the audio to process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Language hint (ISO-639-1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Model identifier.
    pub model: String,
    /// Provider routing preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<JsonValue>,
}

/// Response body of `createTranscription`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioTranscriptionResponse {
    /// Transcribed text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Request body for `createTranslation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioTranslationRequest {
    /// Base64-encoded audio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_b64: Option<String>,
    /// URL of the audio to process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Language hint (ISO-639-1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Model identifier.
    pub model: String,
    /// Style hint for the translation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Provider routing preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<JsonValue>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Response body of `createTranslation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioTranslationResponse {
    /// Translated text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
