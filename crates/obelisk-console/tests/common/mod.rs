/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for obelisk-console tests

use obelisk_adapter::{ClientConfig, ObeliskClient};
use std::sync::Arc;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the mock server
pub fn console_client(server: &MockServer) -> Arc<ObeliskClient> {
    Arc::new(
        ObeliskClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init"),
    )
}

/// A status body in the shape `GET /tasks/{id}` returns
#[allow(dead_code)]
pub fn status_body(id: &str, status: &str, result: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "agent": "IdeasAgent",
        "status": status,
        "result": result
    })
}
