/*
[INPUT]:  Client-side mutation parameters
[OUTPUT]: Typed request bodies for task mutations
[POS]:    Data layer - request body definitions
[UPDATE]: When mutation payloads change
*/

use serde::{Deserialize, Serialize};

/// Body for POST {base}/tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
}

/// Body for PUT {base}/tasks/{id}.
///
/// Carries only the completion flag; the update is partial by contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub completed: bool,
}
