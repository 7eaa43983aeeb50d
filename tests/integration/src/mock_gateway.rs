//! Mock AI Stats gateway for integration testing
//!
//! Wraps a wiremock server whose routes live under `/v1`, like the real gateway.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock gateway server
pub struct MockGateway {
    pub server: MockServer,
}

impl MockGateway {
    /// Start a new mock gateway
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL including the `/v1` prefix
    pub fn base_url(&self) -> String {
        format!("{}/v1", self.server.uri())
    }

    /// Respond to `verb route` with a JSON body
    pub async fn mock_json(&self, verb: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond to `verb route` with a plain text body
    pub async fn mock_text(&self, verb: &str, route: &str, status: u16, body: &str) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Requests received so far
    pub async fn received(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// The only request received; panics otherwise
    pub async fn single_request(&self) -> wiremock::Request {
        let mut requests = self.received().await;
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }
}

/// Create a chat completion response body
pub fn chat_response(model: &str, content: &str) -> Value {
    json!({
        "id": "chatcmpl-test123",
        "object": "chat.completion",
        "created": 1_704_067_200,
        "model": model,
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 10,
            "completion_tokens": 20,
            "total_tokens": 30
        }
    })
}

/// Create a gateway error body
pub fn error_response(code: &str, message: &str) -> Value {
    json!({
        "error": code,
        "message": message
    })
}
