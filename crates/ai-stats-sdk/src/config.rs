//! Client configuration for the AI Stats SDK.

use crate::devtools::DevtoolsConfig;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use url::Url;

/// Production gateway endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.phaseo.app/v1";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "AI_STATS_API_KEY";
/// Fallback environment variable for the API key.
pub const API_KEY_ENV_FALLBACK: &str = "GATEWAY_API_KEY";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "AI_STATS_BASE_URL";
/// Fallback environment variable for the base URL.
pub const BASE_URL_ENV_FALLBACK: &str = "GATEWAY_BASE_URL";

/// Configuration for the AI Stats client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the gateway, including any path prefix such as `/v1`.
    pub(crate) base_url: Url,
    /// API key sent as a bearer token.
    pub(crate) api_key: Option<Secret<String>>,
    /// Whole-request timeout. None waits as long as the server does.
    pub(crate) timeout: Option<Duration>,
    /// Connection timeout.
    pub(crate) connect_timeout: Option<Duration>,
    /// User agent string.
    pub(crate) user_agent: String,
    /// Extra headers sent with every request.
    pub(crate) custom_headers: Vec<(String, String)>,
    /// Local call recording. None disables it.
    pub(crate) devtools: Option<DevtoolsConfig>,
}

impl ClientConfig {
    /// Default user agent.
    pub const DEFAULT_USER_AGENT: &'static str =
        concat!("ai-stats-rust/", env!("CARGO_PKG_VERSION"));

    /// Create a new configuration with default values.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
            timeout: None,
            connect_timeout: None,
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
            custom_headers: Vec::new(),
            devtools: None,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Check if an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub(crate) fn api_key_value(&self) -> Option<&str> {
        self.api_key.as_ref().map(|s| s.expose_secret().as_str())
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Get the connection timeout.
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    /// Get the user agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Get custom headers.
    pub fn custom_headers(&self) -> &[(String, String)] {
        &self.custom_headers
    }

    /// Get the devtools recording settings, if recording is on.
    pub fn devtools(&self) -> Option<&DevtoolsConfig> {
        self.devtools.as_ref()
    }
}

/// Read the first non-empty variable among `names`.
pub(crate) fn env_var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
