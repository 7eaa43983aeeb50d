//! Transport integration tests
//!
//! URL building, header merging, body handling and status classification
//! against a live mock server.

use crate::helpers::*;
use crate::mock_gateway::*;
use ai_stats_sdk::{operations, Error, HttpMethod, Params};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_chat_completion_posts_body_with_json_content_type() {
    init_tracing();
    let gateway = MockGateway::start().await;
    let payload = json!({
        "model": "openai/gpt-4o-mini",
        "messages": [{"role": "user", "content": "Hello"}]
    });

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("content-type", "application/json"))
        .and(body_json(payload.clone()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_response("openai/gpt-4o-mini", "Hi!")),
        )
        .expect(1)
        .mount(&gateway.server)
        .await;

    let transport = transport(&gateway.base_url(), &[]);
    let body = operations::create_chat_completion(
        &transport,
        &Params::new(),
        &Params::new(),
        &Params::new(),
        Some(&payload.to_string()),
    )
    .await
    .unwrap();

    let parsed: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["choices"][0]["message"]["content"], "Hi!");
}

#[tokio::test]
async fn test_delete_substitutes_path_parameter() {
    let gateway = MockGateway::start().await;
    gateway
        .mock_json("DELETE", "/v1/videos/abc123", 200, json!({"id": "abc123", "deleted": true}))
        .await;

    let transport = transport(&gateway.base_url(), &[]);
    let body = operations::delete_video(
        &transport,
        &params(&[("video_id", "abc123")]),
        &Params::new(),
        &Params::new(),
        None,
    )
    .await
    .unwrap();
    assert!(body.contains("\"deleted\":true"));

    let request = gateway.single_request().await;
    assert_eq!(request.method.as_str(), "DELETE");
    assert!(request.body.is_empty());
    assert!(request.headers.get("content-type").is_none());
}

#[tokio::test]
async fn test_get_without_query_has_no_query_string() {
    let gateway = MockGateway::start().await;
    gateway
        .mock_json("GET", "/v1/models", 200, json!({"models": []}))
        .await;

    let transport = transport(&gateway.base_url(), &[]);
    operations::list_models(&transport, &Params::new(), &Params::new(), &Params::new(), None)
        .await
        .unwrap();

    let request = gateway.single_request().await;
    assert_eq!(request.url.path(), "/v1/models");
    assert_eq!(request.url.query(), None);
}

#[tokio::test]
async fn test_query_parameters_are_form_encoded() {
    let gateway = MockGateway::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/activity"))
        .and(query_param("from", "2025-01-01T00:00:00Z"))
        .and(query_param("model", "openai/gpt 4o"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"activity": []})))
        .expect(1)
        .mount(&gateway.server)
        .await;

    let transport = transport(&gateway.base_url(), &[]);
    operations::get_activity(
        &transport,
        &Params::new(),
        &params(&[("model", "openai/gpt 4o"), ("from", "2025-01-01T00:00:00Z")]),
        &Params::new(),
        None,
    )
    .await
    .unwrap();

    let request = gateway.single_request().await;
    assert_eq!(
        request.url.query(),
        Some("from=2025-01-01T00%3A00%3A00Z&model=openai%2Fgpt+4o")
    );
}

#[tokio::test]
async fn test_status_399_is_success() {
    let gateway = MockGateway::start().await;
    gateway.mock_text("GET", "/v1/credits", 399, "odd but fine").await;

    let transport = transport(&gateway.base_url(), &[]);
    let body =
        operations::get_credits(&transport, &Params::new(), &Params::new(), &Params::new(), None)
            .await
            .unwrap();
    assert_eq!(body, "odd but fine");
}

#[tokio::test]
async fn test_status_400_carries_raw_body() {
    let gateway = MockGateway::start().await;
    gateway
        .mock_json(
            "POST",
            "/v1/embeddings",
            400,
            error_response("invalid_request", "input is required"),
        )
        .await;

    let transport = transport(&gateway.base_url(), &[]);
    let err = operations::create_embedding(
        &transport,
        &Params::new(),
        &Params::new(),
        &Params::new(),
        Some("{}"),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status_code(), Some(400));
    assert!(err.is_client_error());
    let body: Value = serde_json::from_str(err.response_body().unwrap()).unwrap();
    assert_eq!(body["message"], "input is required");
}

#[tokio::test]
async fn test_status_500_is_server_error() {
    let gateway = MockGateway::start().await;
    gateway
        .mock_text("GET", "/v1/health", 503, "upstream unavailable")
        .await;

    let transport = transport(&gateway.base_url(), &[]);
    let err = operations::healthz(&transport, &Params::new(), &Params::new(), &Params::new(), None)
        .await
        .unwrap_err();

    match err {
        Error::RequestFailed { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_path_parameter_sends_nothing() {
    let gateway = MockGateway::start().await;
    let transport = transport(&gateway.base_url(), &[]);

    let err = operations::get_video(&transport, &Params::new(), &Params::new(), &Params::new(), None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::MissingPathParameter { operation: "getVideo", ref parameter } if parameter == "video_id"
    ));
    assert!(gateway.received().await.is_empty());
}

#[tokio::test]
async fn test_per_call_header_overrides_default() {
    let gateway = MockGateway::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/providers"))
        .and(header("x-title", "override"))
        .and(header("authorization", "Bearer default-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"providers": []})))
        .expect(1)
        .mount(&gateway.server)
        .await;

    let transport = transport(
        &gateway.base_url(),
        &[("Authorization", "Bearer default-key"), ("X-Title", "default")],
    );
    operations::list_providers(
        &transport,
        &Params::new(),
        &Params::new(),
        &params(&[("X-Title", "override")]),
        None,
    )
    .await
    .unwrap();

    let request = gateway.single_request().await;
    let titles: Vec<_> = request.headers.get_all("x-title").iter().collect();
    assert_eq!(titles.len(), 1);
}

#[tokio::test]
async fn test_request_bytes_returns_binary_body() {
    let gateway = MockGateway::start().await;
    let audio = vec![0x49, 0x44, 0x33, 0x04, 0x00, 0xff];
    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(audio.clone()))
        .mount(&gateway.server)
        .await;

    let transport = transport(&gateway.base_url(), &[]);
    let bytes = transport
        .request_bytes(
            HttpMethod::Post,
            "/audio/speech",
            &Params::new(),
            &Params::new(),
            Some(r#"{"model":"openai/tts-1","input":"hi"}"#),
        )
        .await
        .unwrap();
    assert_eq!(bytes.as_ref(), audio.as_slice());
}

#[tokio::test]
async fn test_connection_failure_is_http_error() {
    // Port 9 (discard) is not served by anything in the test environment.
    let transport = transport("http://127.0.0.1:9/v1", &[]);
    let err = transport
        .request(HttpMethod::Get, "/models", &Params::new(), &Params::new(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert_eq!(err.status_code(), None);
}

/// In-memory log sink for asserting on emitted events.
#[derive(Clone, Default)]
struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

/// Serve one request with a 500 whose body is cut short of its declared length.
async fn truncated_error_server() -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }
        socket
            .write_all(
                b"HTTP/1.1 500 Internal Server Error\r\n\
                  content-type: text/plain\r\n\
                  content-length: 100\r\n\r\nshort",
            )
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{addr}/v1")
}

#[tokio::test]
async fn test_unreadable_error_body_is_logged() {
    use tracing_subscriber::util::SubscriberInitExt;

    let logs = LogBuffer::default();
    let sink = logs.clone();
    let _guard = tracing_subscriber::fmt()
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish()
        .set_default();

    let base_url = truncated_error_server().await;
    let transport = transport(&base_url, &[]);
    let err = operations::get_credits(
        &transport,
        &Params::new(),
        &Params::new(),
        &Params::new(),
        None,
    )
    .await
    .unwrap_err();

    match err {
        Error::RequestFailed { status, ref body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "");
        }
        other => panic!("unexpected error: {other}"),
    }

    let output = logs.contents();
    assert!(output.contains("Failed to read error body"), "{output}");
    assert!(output.contains("status=500"), "{output}");
    assert!(output.contains("error="), "{output}");
}
