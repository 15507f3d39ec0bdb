/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for obelisk-adapter tests

use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// A task record body in the shape the service returns
#[allow(dead_code)]
pub fn task_record_json(id: &str, agent: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "agent": agent,
        "status": status,
        "result": null
    })
}
