//! Operation table integration tests
//!
//! Every table entry is dispatched against the mock gateway and the
//! received method and path are checked.

use crate::helpers::*;
use crate::mock_gateway::*;
use ai_stats_sdk::{find_operation, operations, Params, OPERATIONS};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_every_operation_hits_its_route() {
    init_tracing();
    let gateway = MockGateway::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&gateway.server)
        .await;

    let transport = transport(&gateway.base_url(), &[]);

    for op in OPERATIONS {
        let path: Params = op
            .path_parameters()
            .into_iter()
            .map(|name| (name.to_string(), format!("{name}-1")))
            .collect();
        let body = (op.method.as_str() != "GET" && op.method.as_str() != "DELETE").then_some("{}");

        op.call(&transport, &path, &Params::new(), &Params::new(), body)
            .await
            .unwrap_or_else(|e| panic!("{} failed: {e}", op.name));
    }

    let requests = gateway.received().await;
    assert_eq!(requests.len(), OPERATIONS.len());

    for (op, request) in OPERATIONS.iter().zip(&requests) {
        let expected = op
            .path_parameters()
            .into_iter()
            .fold(op.path.to_string(), |p, name| {
                p.replace(&format!("{{{name}}}"), &format!("{name}-1"))
            });
        assert_eq!(request.method.as_str(), op.method.as_str(), "{}", op.name);
        assert_eq!(request.url.path(), format!("/v1{expected}"), "{}", op.name);
    }
}

#[tokio::test]
async fn test_batch_alias_uses_its_own_route() {
    let gateway = MockGateway::start().await;
    gateway
        .mock_json("GET", "/v1/batch/b_1", 200, json!({"id": "b_1", "status": "completed"}))
        .await;

    let transport = transport(&gateway.base_url(), &[]);
    let body = operations::retrieve_batch_alias(
        &transport,
        &params(&[("id", "b_1")]),
        &Params::new(),
        &Params::new(),
        None,
    )
    .await
    .unwrap();
    assert!(body.contains("completed"));

    // The primary route names its placeholder differently.
    let err = operations::retrieve_batch(
        &transport,
        &params(&[("id", "b_1")]),
        &Params::new(),
        &Params::new(),
        None,
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("batch_id"));
}

#[tokio::test]
async fn test_provisioning_key_routes_share_semantics() {
    let gateway = MockGateway::start().await;
    for route in ["/v1/management/keys/k_1", "/v1/provisioning/keys/k_1"] {
        gateway
            .mock_json("PATCH", route, 200, json!({"ok": true, "message": "updated"}))
            .await;
    }

    let transport = transport(&gateway.base_url(), &[]);
    let path = params(&[("id", "k_1")]);
    let body = Some(r#"{"status":"disabled"}"#);

    for name in ["updateProvisioningKey", "updateProvisioningKeyAlias"] {
        let op = find_operation(name).unwrap();
        let reply = op
            .call(&transport, &path, &Params::new(), &Params::new(), body)
            .await
            .unwrap();
        assert!(reply.contains("updated"));
    }

    let requests = gateway.received().await;
    let paths: Vec<_> = requests.iter().map(|r| r.url.path().to_string()).collect();
    assert_eq!(paths, vec!["/v1/management/keys/k_1", "/v1/provisioning/keys/k_1"]);
}

#[tokio::test]
async fn test_plain_path_values_pass_through() {
    let gateway = MockGateway::start().await;
    gateway
        .mock_json("GET", "/v1/health/providers/openai/derank", 200, json!({"deranked": false}))
        .await;

    let transport = transport(&gateway.base_url(), &[]);
    operations::get_provider_derank_status(
        &transport,
        &params(&[("provider_id", "openai")]),
        &Params::new(),
        &Params::new(),
        None,
    )
    .await
    .unwrap();

    let request = gateway.single_request().await;
    assert_eq!(request.url.path(), "/v1/health/providers/openai/derank");
}

#[tokio::test]
async fn test_traversal_in_path_value_stays_in_its_segment() {
    let gateway = MockGateway::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .mount(&gateway.server)
        .await;

    let transport = transport(&gateway.base_url(), &[]);
    operations::delete_video(
        &transport,
        &params(&[("video_id", "../management/keys")]),
        &Params::new(),
        &Params::new(),
        None,
    )
    .await
    .unwrap();

    operations::get_video(
        &transport,
        &params(&[("video_id", "a?admin=1")]),
        &Params::new(),
        &Params::new(),
        None,
    )
    .await
    .unwrap();

    let requests = gateway.received().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method.as_str(), "DELETE");
    assert_eq!(requests[0].url.path(), "/v1/videos/..%2Fmanagement%2Fkeys");
    assert_eq!(requests[1].url.path(), "/v1/videos/a%3Fadmin%3D1");
    assert_eq!(requests[1].url.query(), None);
}

#[tokio::test]
async fn test_dot_segment_value_is_refused_before_sending() {
    let gateway = MockGateway::start().await;
    let transport = transport(&gateway.base_url(), &[]);

    let err = operations::delete_video(
        &transport,
        &params(&[("video_id", "..")]),
        &Params::new(),
        &Params::new(),
        None,
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        ai_stats_sdk::Error::InvalidPathParameter { operation: "deleteVideo", .. }
    ));
    assert!(gateway.received().await.is_empty());
}
