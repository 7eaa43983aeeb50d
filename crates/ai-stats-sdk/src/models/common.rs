use serde::{Deserialize, Serialize};

/// Token accounting attached to most generation responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens in the generated output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_tokens: Option<i64>,
    /// Tokens in the prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_tokens: Option<i64>,
    /// Prompt plus completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<i64>,
}

/// Gateway debugging switches accepted by most generation endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugOptions {
    /// Turn debugging on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Echo the request sent to the upstream provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_upstream_request: Option<bool>,
    /// Echo the raw upstream response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_upstream_response: Option<bool>,
    /// Attach a routing trace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<bool>,
    /// `summary` or `full`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_level: Option<String>,
}

/// Constraints on which upstream providers may serve a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderRoutingOptions {
    /// Providers never to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Vec<String>>,
    /// Allow providers still in alpha.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_alpha: Option<bool>,
    /// Restrict routing to these providers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only: Option<Vec<String>>,
    /// Preferred provider order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<String>>,
}

/// Reasoning effort controls for models that support it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReasoningConfig {
    /// `none`, `minimal`, `low`, `medium`, `high` or `xhigh`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort: Option<String>,
    /// `auto`, `concise` or `detailed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Error envelope returned by the gateway on failure.
///
/// The transport never parses failure bodies; callers can decode
/// [`crate::Error::response_body`] into this record themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Always `false` on errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
}
