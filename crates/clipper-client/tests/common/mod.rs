/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for clipper-client tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use clipper_client::{ApiClient, ClientConfig};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Pipeline pointed at the mock server with no token provider
#[allow(dead_code)]
pub fn anonymous_client(server: &MockServer) -> ApiClient {
    ApiClient::new(&ClientConfig::new(server.uri())).expect("client init")
}

/// Token provider that hands out `token-1`, `token-2`, ... and counts calls
#[allow(dead_code)]
pub fn counting_provider(
    calls: Arc<AtomicUsize>,
) -> impl Fn() -> std::future::Ready<Option<String>> + Send + Sync + 'static {
    move || {
        let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
        std::future::ready(Some(format!("token-{n}")))
    }
}

/// Address that refuses connections
#[allow(dead_code)]
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Authorization header values seen by the server, in arrival order
#[allow(dead_code)]
pub async fn authorization_headers(server: &MockServer) -> Vec<Option<String>> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .iter()
        .map(|request| {
            request
                .headers
                .get("authorization")
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        })
        .collect()
}
