//! Typed client integration tests

use crate::helpers::*;
use crate::mock_gateway::*;
use ai_stats_sdk::{
    AudioSpeechRequest, ChatCompletionsRequest, ChatMessage, Client, DevtoolsConfig, Error,
    FileUploadRequest, ImagesEditRequest, KeyStatus, Params, ProvisioningKeyRequest,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_chat_completion_forces_stream_off() {
    init_tracing();
    let gateway = MockGateway::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", format!("Bearer {TEST_API_KEY}").as_str()))
        .and(body_partial_json(json!({"stream": false, "model": "openai/gpt-4o-mini"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_response("openai/gpt-4o-mini", "Hello there")),
        )
        .expect(1)
        .mount(&gateway.server)
        .await;

    let mut request =
        ChatCompletionsRequest::new("openai/gpt-4o-mini", vec![ChatMessage::user("Hi")]);
    request.stream = Some(true);

    let response = client(&gateway.base_url())
        .chat_completion(&request)
        .await
        .unwrap();

    assert_eq!(response.content(), Some("Hello there"));
    assert_eq!(response.usage.and_then(|u| u.total_tokens), Some(30));
}

#[tokio::test]
async fn test_user_agent_and_custom_headers() {
    let gateway = MockGateway::start().await;
    gateway.mock_json("GET", "/v1/health", 200, json!({"status": "ok"})).await;

    let client = Client::builder()
        .base_url(gateway.base_url())
        .user_agent("ci-runner/1.0")
        .header("X-Title", "integration")
        .build()
        .unwrap();
    let health = client.health().await.unwrap();
    assert_eq!(health["status"], "ok");

    let request = gateway.single_request().await;
    assert_eq!(request.headers.get("user-agent").unwrap(), "ci-runner/1.0");
    assert_eq!(request.headers.get("x-title").unwrap(), "integration");
    assert!(request.headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_error_status_surfaces_through_typed_call() {
    let gateway = MockGateway::start().await;
    gateway
        .mock_json("GET", "/v1/files/file_missing", 404, error_response("not_found", "no such file"))
        .await;

    let err = client(&gateway.base_url())
        .get_file("file_missing")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert!(err.response_body().unwrap().contains("no such file"));
}

#[tokio::test]
async fn test_undecodable_reply_is_serialization_error() {
    let gateway = MockGateway::start().await;
    gateway.mock_text("GET", "/v1/files", 200, "<html>proxy</html>").await;

    let err = client(&gateway.base_url()).list_files().await.unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[tokio::test]
async fn test_upload_file_sends_multipart_form() {
    let gateway = MockGateway::start().await;
    gateway
        .mock_json(
            "POST",
            "/v1/files",
            200,
            json!({"id": "file_1", "filename": "batch.jsonl", "bytes": 18, "purpose": "batch"}),
        )
        .await;

    let upload = FileUploadRequest::new("batch.jsonl", b"{\"custom_id\":\"1\"}\n".to_vec(), "batch");
    let file = client(&gateway.base_url()).upload_file(&upload).await.unwrap();
    assert_eq!(file.id.as_deref(), Some("file_1"));

    let request = gateway.single_request().await;
    let content_type = request.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"purpose\""));
    assert!(body.contains("name=\"file\"; filename=\"batch.jsonl\""));
    assert!(body.contains("{\"custom_id\":\"1\"}"));
}

#[tokio::test]
async fn test_edit_image_sends_form_fields() {
    let gateway = MockGateway::start().await;
    gateway
        .mock_json("POST", "/v1/images/edits", 200, json!({"created": 1, "data": []}))
        .await;

    let request = ImagesEditRequest {
        image: "https://example.com/cat.png".to_string(),
        model: "openai/gpt-image-1".to_string(),
        prompt: "add a hat".to_string(),
        n: Some(2),
        ..Default::default()
    };
    let response = client(&gateway.base_url()).edit_image(&request).await.unwrap();
    assert_eq!(response.created, Some(1));

    let received = gateway.single_request().await;
    let body = String::from_utf8_lossy(&received.body);
    assert!(body.contains("name=\"prompt\"\r\n\r\nadd a hat"));
    assert!(body.contains("name=\"n\"\r\n\r\n2"));
    assert!(!body.contains("name=\"mask\""));
}

#[tokio::test]
async fn test_create_speech_returns_audio_bytes() {
    let gateway = MockGateway::start().await;
    let audio = vec![0xff, 0xfb, 0x90, 0x44, 0x00];
    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .and(body_partial_json(json!({"input": "Hello", "voice": "alloy"})))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(audio.clone()))
        .mount(&gateway.server)
        .await;

    let request = AudioSpeechRequest {
        input: "Hello".to_string(),
        model: "openai/tts-1".to_string(),
        voice: Some("alloy".to_string()),
        ..Default::default()
    };
    let bytes = client(&gateway.base_url()).create_speech(&request).await.unwrap();
    assert_eq!(bytes.as_ref(), audio.as_slice());
}

#[tokio::test]
async fn test_video_lifecycle() {
    let gateway = MockGateway::start().await;
    gateway
        .mock_json("GET", "/v1/videos/vid_9", 200, json!({"id": "vid_9", "status": "completed"}))
        .await;
    gateway
        .mock_json("DELETE", "/v1/videos/vid_9", 200, json!({"id": "vid_9", "deleted": true}))
        .await;

    let client = client(&gateway.base_url());
    let video = client.get_video("vid_9").await.unwrap();
    assert_eq!(video.status.as_deref(), Some("completed"));

    let deleted = client.delete_video("vid_9").await.unwrap();
    assert_eq!(deleted.deleted, Some(true));
}

#[tokio::test]
async fn test_get_generation_passes_id_as_query() {
    let gateway = MockGateway::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/generations"))
        .and(query_param("id", "gen_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "request_id": "gen_123",
            "model_id": "openai/gpt-4o",
            "success": true
        })))
        .expect(1)
        .mount(&gateway.server)
        .await;

    let generation = client(&gateway.base_url())
        .get_generation("gen_123")
        .await
        .unwrap();
    assert_eq!(generation.request_id.as_deref(), Some("gen_123"));
}

#[tokio::test]
async fn test_list_models_forwards_query() {
    let gateway = MockGateway::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{"model_id": "a/one"}, {"model_id": "b/two"}],
            "total": 40,
            "limit": 2,
            "offset": 0
        })))
        .mount(&gateway.server)
        .await;

    let list = client(&gateway.base_url())
        .list_models(&params(&[("limit", "2")]))
        .await
        .unwrap();
    assert_eq!(list.models.len(), 2);
    assert_eq!(list.total, Some(40));
}

#[tokio::test]
async fn test_provisioning_key_crud() {
    let gateway = MockGateway::start().await;
    gateway
        .mock_json(
            "POST",
            "/v1/management/keys",
            201,
            json!({"ok": true, "key": {"id": "k_1", "name": "ci", "key": "aistats_v1_secret", "status": "active"}}),
        )
        .await;
    gateway
        .mock_json(
            "GET",
            "/v1/management/keys",
            200,
            json!({"ok": true, "keys": [{"id": "k_1", "name": "ci", "status": "active"}], "total": 1}),
        )
        .await;
    gateway
        .mock_json(
            "GET",
            "/v1/management/keys/k_1",
            200,
            json!({"ok": true, "key": {"id": "k_1", "name": "ci", "status": "active", "soft_blocked": false}}),
        )
        .await;
    Mock::given(method("PATCH"))
        .and(path("/v1/management/keys/k_1"))
        .and(body_partial_json(json!({"status": "disabled"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"ok": true, "message": "Key updated"})),
        )
        .expect(1)
        .mount(&gateway.server)
        .await;
    gateway
        .mock_json("DELETE", "/v1/management/keys/k_1", 200, json!({"ok": true, "message": "Key deleted"}))
        .await;

    let client = client(&gateway.base_url());

    let created = client
        .create_provisioning_key(&ProvisioningKeyRequest {
            name: Some("ci".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.key.as_deref(), Some("aistats_v1_secret"));

    let list = client.list_provisioning_keys(&Params::new()).await.unwrap();
    assert_eq!(list.keys.len(), 1);
    assert_eq!(list.keys[0].status, Some(KeyStatus::Active));

    let detail = client.get_provisioning_key("k_1").await.unwrap();
    assert_eq!(detail.soft_blocked, Some(false));

    let updated = client
        .update_provisioning_key(
            "k_1",
            &ProvisioningKeyRequest {
                status: Some(KeyStatus::Disabled),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.message.as_deref(), Some("Key updated"));

    let deleted = client.delete_provisioning_key("k_1").await.unwrap();
    assert_eq!(deleted.ok, Some(true));

    let requests = gateway.received().await;
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent, json!({"name": "ci"}));
}

#[tokio::test]
async fn test_analytics_is_posted() {
    let gateway = MockGateway::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/analytics"))
        .and(body_partial_json(json!({"group_by": "model"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": []})))
        .expect(1)
        .mount(&gateway.server)
        .await;

    let reply = client(&gateway.base_url())
        .get_analytics(&json!({"group_by": "model"}))
        .await
        .unwrap();
    assert!(reply["rows"].is_array());
}

fn devtools_client(base_url: &str, directory: &std::path::Path) -> Client {
    Client::builder()
        .base_url(base_url)
        .api_key(TEST_API_KEY)
        .devtools(DevtoolsConfig::new(directory))
        .build()
        .unwrap()
}

fn recorded(directory: &std::path::Path) -> Vec<Value> {
    std::fs::read_to_string(directory.join("generations.jsonl"))
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_devtools_records_successful_chat() {
    let gateway = MockGateway::start().await;
    gateway
        .mock_json(
            "POST",
            "/v1/chat/completions",
            200,
            chat_response("openai/gpt-4o-mini", "Hello there"),
        )
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = devtools_client(&gateway.base_url(), dir.path());
    let request =
        ChatCompletionsRequest::new("openai/gpt-4o-mini", vec![ChatMessage::user("Hi")]);
    let response = client.chat_completion(&request).await.unwrap();
    assert_eq!(response.content(), Some("Hello there"));

    let metadata: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("metadata.json")).unwrap())
            .unwrap();
    assert_eq!(metadata["sdk"], "rust");

    let entries = recorded(dir.path());
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry["type"], "chat.completions");
    assert_eq!(entry["request"]["model"], "openai/gpt-4o-mini");
    assert_eq!(entry["request"]["stream"], false);
    assert_eq!(entry["response"]["choices"][0]["message"]["content"], "Hello there");
    assert!(entry["error"].is_null());
    assert_eq!(entry["metadata"]["model"], "openai/gpt-4o-mini");
    assert_eq!(
        entry["metadata"]["usage"],
        json!({"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30})
    );
}

#[tokio::test]
async fn test_devtools_records_failed_call() {
    let gateway = MockGateway::start().await;
    gateway
        .mock_json("GET", "/v1/credits", 500, error_response("internal", "boom"))
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = devtools_client(&gateway.base_url(), dir.path());
    let err = client.get_credits().await.unwrap_err();
    assert_eq!(err.status_code(), Some(500));

    let entries = recorded(dir.path());
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry["type"], "credits");
    assert!(entry["response"].is_null());
    assert_eq!(entry["error"]["status"], 500);
    assert_eq!(entry["error"]["code"], "request_failed");
    assert_eq!(entry["metadata"]["status_code"], 500);
    assert!(entry["duration_ms"].is_u64());
}

#[tokio::test]
async fn test_devtools_off_writes_nothing() {
    let gateway = MockGateway::start().await;
    gateway.mock_json("GET", "/v1/health", 200, json!({"status": "ok"})).await;

    let dir = tempfile::tempdir().unwrap();
    let client = Client::builder()
        .base_url(gateway.base_url())
        .devtools(DevtoolsConfig {
            enabled: false,
            ..DevtoolsConfig::new(dir.path())
        })
        .build()
        .unwrap();
    client.health().await.unwrap();

    assert!(!dir.path().join("generations.jsonl").exists());
}
