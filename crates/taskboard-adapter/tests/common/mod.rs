/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskboard-adapter tests

use wiremock::MockServer;

use taskboard_adapter::TaskboardClient;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at a mock server, with the usual `/api` base path
pub fn client_for(server: &MockServer) -> TaskboardClient {
    TaskboardClient::new(&format!("{}/api", server.uri())).expect("client init")
}

/// Canonical task JSON body used across tests
#[allow(dead_code)]
pub fn task_body(id: i64, title: &str, completed: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": "",
        "completed": completed,
        "createdAt": "2024-01-01T00:00:00Z"
    })
}
