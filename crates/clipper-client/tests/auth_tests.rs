/*
[INPUT]:  Mock server plus various token providers
[OUTPUT]: Test results for bearer token injection
[POS]:    Integration tests - pre-request authentication hook
[UPDATE]: When token provider contract or header format changes
*/

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use clipper_client::{
    ApiClient, ClientConfig, ClipperClient, StaticToken, TokenProvider, TokenStore,
};
use common::{authorization_headers, counting_provider, setup_mock_server};
use serde_json::{Value, json};
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_ok(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "usr_1",
            "username": "alice"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_no_provider_sends_no_authorization() {
    let server = setup_mock_server().await;
    mount_ok(&server).await;

    let client = assert_ok!(ClipperClient::new(&ClientConfig::new(server.uri())));
    assert_ok!(client.users().get_me().await);
    assert_ok!(client.users().get_me().await);

    assert_eq!(authorization_headers(&server).await, vec![None, None]);
}

#[tokio::test]
async fn test_static_token_sets_bearer_header() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "usr_1",
            "username": "alice"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(server.uri()).with_token_provider(StaticToken::new("abc123"));
    let client = assert_ok!(ClipperClient::new(&config));
    let me = assert_ok!(client.users().get_me().await);
    assert_eq!(me.id, "usr_1");
}

#[tokio::test]
async fn test_provider_returning_none_sends_no_header() {
    let server = setup_mock_server().await;
    mount_ok(&server).await;

    let config =
        ClientConfig::new(server.uri()).with_token_provider(|| async { None::<String> });
    let client = assert_ok!(ClipperClient::new(&config));
    assert_ok!(client.users().get_me().await);

    assert_eq!(authorization_headers(&server).await, vec![None]);
}

#[tokio::test]
async fn test_provider_is_called_once_per_request() {
    let server = setup_mock_server().await;
    mount_ok(&server).await;

    let calls = Arc::new(AtomicUsize::new(0));
    let config =
        ClientConfig::new(server.uri()).with_token_provider(counting_provider(calls.clone()));
    let client = assert_ok!(ClipperClient::new(&config));

    for _ in 0..3 {
        assert_ok!(client.users().get_me().await);
    }

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(
        authorization_headers(&server).await,
        vec![
            Some("Bearer token-1".to_string()),
            Some("Bearer token-2".to_string()),
            Some("Bearer token-3".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_provider_is_called_even_when_request_fails() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "code": "UNAUTHORIZED", "message": "Invalid token" }
        })))
        .mount(&server)
        .await;

    let calls = Arc::new(AtomicUsize::new(0));
    let config =
        ClientConfig::new(server.uri()).with_token_provider(counting_provider(calls.clone()));
    let client = assert_ok!(ClipperClient::new(&config));

    let err = client.users().get_me().await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(err.status, 401);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_token_store_rotation_is_picked_up() {
    let server = setup_mock_server().await;
    mount_ok(&server).await;

    let store = TokenStore::new();
    let config = ClientConfig::new(server.uri()).with_token_provider(store.clone());
    let client = assert_ok!(ClipperClient::new(&config));

    assert_ok!(client.users().get_me().await);
    store.set_token("first", 3600);
    assert_ok!(client.users().get_me().await);
    store.set_token("second", 3600);
    assert_ok!(client.users().get_me().await);
    store.clear();
    assert_ok!(client.users().get_me().await);

    assert_eq!(
        authorization_headers(&server).await,
        vec![
            None,
            Some("Bearer first".to_string()),
            Some("Bearer second".to_string()),
            None,
        ]
    );
}

#[tokio::test]
async fn test_shared_provider_across_resource_clients() {
    let server = setup_mock_server().await;
    mount_ok(&server).await;
    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "available": 1 })))
        .mount(&server)
        .await;

    let provider: Arc<dyn TokenProvider> = Arc::new(StaticToken::new("shared"));
    let config = ClientConfig::new(server.uri()).with_shared_token_provider(provider);

    let users = assert_ok!(clipper_client::UsersClient::new(&config));
    let balance = assert_ok!(clipper_client::BalanceClient::new(&config));
    assert_ok!(users.get_me().await);
    assert_ok!(balance.get_balance().await);

    assert_eq!(
        authorization_headers(&server).await,
        vec![
            Some("Bearer shared".to_string()),
            Some("Bearer shared".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_raw_pipeline_uses_provider() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/notifications/ntf_1"))
        .and(header("authorization", "Bearer raw"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(server.uri()).with_token_provider(StaticToken::new("raw"));
    let client = assert_ok!(ApiClient::new(&config));
    let body: Value = assert_ok!(client.delete("/notifications/ntf_1", None).await);
    assert!(body.is_null());
}
