//! Chat completion records.

use serde::{Deserialize, Serialize};

use super::{JsonValue, Usage};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Instructions that steer the assistant.
    System,
    /// End-user turn.
    #[default]
    User,
    /// Model turn.
    Assistant,
    /// Tool result.
    Tool,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
            Self::Tool => write!(f, "tool"),
        }
    }
}

/// One message of a chat conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Plain text or an array of content parts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<JsonValue>,
    /// Optional participant name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Who wrote the message.
    pub role: ChatRole,
    /// Tool call this message answers (role `tool`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    /// Tool calls requested by the assistant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

impl ChatMessage {
    /// Create a text message.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(JsonValue::String(content.into())),
            ..Default::default()
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    /// Text of the message when the content is a plain string.
    pub fn text(&self) -> Option<&str> {
        self.content.as_ref().and_then(JsonValue::as_str)
    }
}

/// Request body for `createChatCompletion`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionsRequest {
    /// Gateway debug options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<JsonValue>,
    /// Frequency penalty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    /// Token bias map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logit_bias: Option<JsonValue>,
    /// Return log-probabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<bool>,
    /// Output token limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i64>,
    /// Maximum tool calls per turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tool_calls: Option<i64>,
    /// Conversation so far.
    pub messages: Vec<ChatMessage>,
    /// Ask the gateway to attach routing metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<bool>,
    /// Model identifier, e.g. `openai/gpt-4o-mini-2024-07-18`.
    pub model: String,
    /// Allow parallel tool calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_tool_calls: Option<bool>,
    /// Presence penalty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    /// Provider routing preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<JsonValue>,
    /// Reasoning effort options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<JsonValue>,
    /// Output format constraints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<JsonValue>,
    /// Deterministic sampling seed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// `flex`, `standard` or `priority`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_tier: Option<String>,
    /// Stream the response as server-sent events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    /// System prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Tool selection policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<JsonValue>,
    /// Tools the model may call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<JsonValue>>,
    /// Top-k sampling cutoff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i64>,
    /// Number of top log-probabilities per token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_logprobs: Option<i64>,
    /// Nucleus sampling mass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Ask for token usage in the reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<bool>,
    /// End-user identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl ChatCompletionsRequest {
    /// Create a request for `model` with the given messages.
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            ..Default::default()
        }
    }
}

/// One candidate completion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    /// `stop`, `length`, `tool_calls` or `content_filter`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    /// Position in the result list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    /// Generated message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<ChatMessage>,
}

/// Response body of `createChatCompletion`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionsResponse {
    /// Generated choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ChatChoice>>,
    /// Unix timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Identifier assigned by the gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Model identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Object kind, e.g. `list`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// Token usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl ChatCompletionsResponse {
    /// Text of the first choice, if it is plain text.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .as_ref()?
            .first()?
            .message
            .as_ref()?
            .text()
    }
}

/// A function call requested by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Function name and JSON-encoded arguments.
    pub function: JsonValue,
    /// Tool call identifier.
    pub id: String,
    /// Always `function`.
    #[serde(rename = "type")]
    pub r#type: String,
}

/// `{"type": "text"}` content part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextContentPart {
    /// Text content.
    pub text: String,
    /// Always `text`.
    #[serde(rename = "type")]
    pub r#type: String,
}

/// `{"type": "image_url"}` content part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageContentPart {
    /// Image reference.
    pub image_url: JsonValue,
    /// Always `image_url`.
    #[serde(rename = "type")]
    pub r#type: String,
}

/// `{"type": "input_audio"}` content part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioContentPart {
    /// Inline audio payload.
    pub input_audio: JsonValue,
    /// Always `input_audio`.
    #[serde(rename = "type")]
    pub r#type: String,
}

/// `{"type": "input_video"}` content part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoContentPart {
    /// Always `video_url`.
    #[serde(rename = "type")]
    pub r#type: String,
    /// Video reference.
    pub video_url: String,
}

/// `{"type": "tool_call"}` content part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolCallContentPart {
    /// Function call details.
    pub function: JsonValue,
    /// Tool call identifier.
    pub id: String,
    /// Always `tool_call`.
    #[serde(rename = "type")]
    pub r#type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_only_set_fields() {
        let req = ChatCompletionsRequest::new(
            "openai/gpt-4o-mini",
            vec![ChatMessage::system("be brief"), ChatMessage::user("hi")],
        );
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "openai/gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hi"}
                ]
            })
        );
    }

    #[test]
    fn test_response_content() {
        let body = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "finish_reason": "stop",
                "message": {"role": "assistant", "content": "Hello!"}
            }],
            "usage": {"prompt_tokens": 3, "completion_tokens": 2, "total_tokens": 5}
        });
        let resp: ChatCompletionsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.content(), Some("Hello!"));
        assert_eq!(resp.usage.and_then(|u| u.total_tokens), Some(5));
    }

    #[test]
    fn test_multipart_content_is_preserved() {
        let body = json!({
            "role": "user",
            "content": [
                {"type": "text", "text": "what is this?"},
                {"type": "image_url", "image_url": {"url": "https://x/y.png"}}
            ]
        });
        let msg: ChatMessage = serde_json::from_value(body.clone()).unwrap();
        assert!(msg.text().is_none());
        assert_eq!(serde_json::to_value(&msg).unwrap(), body);
    }

    #[test]
    fn test_tool_call_type_field() {
        let call: ToolCall = serde_json::from_value(json!({
            "id": "call_1",
            "type": "function",
            "function": {"name": "lookup", "arguments": "{}"}
        }))
        .unwrap();
        assert_eq!(call.r#type, "function");
        assert_eq!(call.function["name"], "lookup");
    }
}
