/*
[INPUT]:  Task identifiers and mutation payloads
[OUTPUT]: Task collection data and per-task mutation results
[POS]:    HTTP layer - task CRUD endpoints
[UPDATE]: When adding new task endpoints or changing response format
*/

use crate::http::{Result, TaskboardClient};
use crate::types::{CreateTaskRequest, Task, UpdateTaskRequest};
use reqwest::Method;

impl TaskboardClient {
    /// Fetch the full task collection
    ///
    /// GET {base}/tasks
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.request(Method::GET, "/tasks")?;
        self.send_json(builder).await
    }

    /// Create a task; the server assigns id and creation timestamp
    ///
    /// POST {base}/tasks
    pub async fn create_task(&self, title: &str, description: &str) -> Result<Task> {
        let body = CreateTaskRequest {
            title: title.to_string(),
            description: description.to_string(),
        };
        let builder = self.request(Method::POST, "/tasks")?.json(&body);
        self.send_json(builder).await
    }

    /// Partially update a task's completion flag, returning the full record
    ///
    /// PUT {base}/tasks/{id}
    pub async fn update_task(&self, id: i64, completed: bool) -> Result<Task> {
        let endpoint = format!("/tasks/{}", id);
        let body = UpdateTaskRequest { completed };
        let builder = self.request(Method::PUT, &endpoint)?.json(&body);
        self.send_json(builder).await
    }

    /// Delete a task. Any response body is ignored.
    ///
    /// DELETE {base}/tasks/{id}
    pub async fn delete_task(&self, id: i64) -> Result<()> {
        let endpoint = format!("/tasks/{}", id);
        let builder = self.request(Method::DELETE, &endpoint)?;
        self.send_expect_ok(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::TaskboardClient;
    use crate::types::Task;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn task_json(id: i64, title: &str, completed: bool) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": title,
            "description": "",
            "completed": completed,
            "createdAt": "2024-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                task_json(1, "Buy milk", false),
                task_json(2, "Ship release", true),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            TaskboardClient::new(&format!("{}/api", server.uri())).expect("client init");

        let tasks = client.list_tasks().await.expect("list_tasks failed");

        let expected = vec![
            Task {
                id: 1,
                title: "Buy milk".to_string(),
                description: "".to_string(),
                completed: false,
                created_at: "2024-01-01T00:00:00Z".to_string(),
            },
            Task {
                id: 2,
                title: "Ship release".to_string(),
                description: "".to_string(),
                completed: true,
                created_at: "2024-01-01T00:00:00Z".to_string(),
            },
        ];
        assert_eq!(tasks, expected);
    }

    #[tokio::test]
    async fn test_create_task_sends_title_and_description() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/api/tasks"))
            .and(body_json(serde_json::json!({
                "title": "Buy milk",
                "description": "2 liters"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 1,
                "title": "Buy milk",
                "description": "2 liters",
                "completed": false,
                "createdAt": "2024-01-01T00:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            TaskboardClient::new(&format!("{}/api", server.uri())).expect("client init");

        let task = client
            .create_task("Buy milk", "2 liters")
            .await
            .expect("create_task failed");

        assert_eq!(task.id, 1);
        assert_eq!(task.description, "2 liters");
        assert!(!task.completed);
    }

    #[tokio::test]
    async fn test_update_task_sends_only_completed() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("PUT"))
            .and(path("/api/tasks/7"))
            .and(body_json(serde_json::json!({ "completed": true })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(task_json(7, "Water plants", true)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client =
            TaskboardClient::new(&format!("{}/api", server.uri())).expect("client init");

        let task = client.update_task(7, true).await.expect("update_task failed");
        assert_eq!(task.id, 7);
        assert!(task.completed);
    }

    #[tokio::test]
    async fn test_delete_task_ignores_response_body() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("DELETE"))
            .and(path("/api/tasks/7"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("deleted, goodbye"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client =
            TaskboardClient::new(&format!("{}/api", server.uri())).expect("client init");

        client.delete_task(7).await.expect("delete_task failed");
    }

    #[tokio::test]
    async fn test_malformed_task_list_is_rejected() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "title": "no id here", "completed": false }
            ])))
            .mount(&server)
            .await;

        let client =
            TaskboardClient::new(&format!("{}/api", server.uri())).expect("client init");

        let err = client.list_tasks().await.expect_err("expected decode failure");
        assert!(matches!(
            err,
            crate::http::TaskboardError::MalformedResponse(_)
        ));
    }
}
