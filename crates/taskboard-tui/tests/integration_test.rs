/*
[INPUT]:  Mock task API served by wiremock
[OUTPUT]: End-to-end board lifecycle verification
[POS]:    Integration test layer - full synchronization flow
[UPDATE]: When adding new integration scenarios
*/

use taskboard_adapter::TaskboardClient;
use taskboard_tui::TaskBoard;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn board_for(server: &MockServer) -> TaskBoard {
    let client = TaskboardClient::new(&format!("{}/api", server.uri())).expect("client init");
    TaskBoard::new(client)
}

/// Full lifecycle: empty list, create, toggle, delete.
#[tokio::test]
async fn test_full_board_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "message": "service healthy",
            "timestamp": "2024-01-01T00:00:00Z",
            "environment": "test"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let created = serde_json::json!({
        "id": 1,
        "title": "Buy milk",
        "description": "",
        "completed": false,
        "createdAt": "2024-01-01T00:00:00Z"
    });
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(body_json(serde_json::json!({
            "title": "Buy milk",
            "description": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(created.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let toggled = serde_json::json!({
        "id": 1,
        "title": "Buy milk",
        "description": "",
        "completed": true,
        "createdAt": "2024-01-01T00:00:00Z"
    });
    Mock::given(method("PUT"))
        .and(path("/api/tasks/1"))
        .and(body_json(serde_json::json!({ "completed": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(toggled))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut board = board_for(&server);

    board.refresh().await;
    assert!(board.state().tasks().is_empty());
    assert_eq!(
        board.state().health().map(|h| h.status.as_str()),
        Some("ok")
    );

    board.state_mut().set_draft_title("Buy milk".to_string());
    board.add_task().await;
    assert_eq!(board.state().tasks().len(), 1);
    assert_eq!(board.state().tasks()[0].title, "Buy milk");
    assert_eq!(board.state().draft_title(), "");

    board.toggle_task(1).await;
    assert!(board.state().tasks()[0].completed);

    board.delete_task(1).await;
    assert!(board.state().tasks().is_empty());
    assert_eq!(board.state().error_message(), None);
}

/// A failed delete raises the banner; the next successful add clears it.
#[tokio::test]
async fn test_error_banner_clears_on_next_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": 1,
            "title": "Buy milk",
            "description": "",
            "completed": false,
            "createdAt": "2024-01-01T00:00:00Z"
        }])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 2,
            "title": "Ship release",
            "description": "",
            "completed": false,
            "createdAt": "2024-01-02T00:00:00Z"
        })))
        .mount(&server)
        .await;

    let mut board = board_for(&server);
    board.load_tasks().await;

    board.delete_task(1).await;
    assert_eq!(board.state().error_message(), Some("Failed to delete task"));
    assert_eq!(board.state().tasks().len(), 1);

    board.state_mut().set_draft_title("Ship release".to_string());
    board.add_task().await;
    assert_eq!(board.state().error_message(), None);
    assert_eq!(board.state().tasks().len(), 2);
}

/// Health and list loading are independent: the probe failing leaves health
/// absent while the task list still populates, with no error banner.
#[tokio::test]
async fn test_mount_with_unhealthy_backend() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": 1,
            "title": "Buy milk",
            "description": "",
            "completed": false,
            "createdAt": "2024-01-01T00:00:00Z"
        }])))
        .mount(&server)
        .await;

    let mut board = board_for(&server);
    board.refresh().await;

    assert!(board.state().health().is_none());
    assert_eq!(board.state().tasks().len(), 1);
    assert_eq!(board.state().error_message(), None);
}
