/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// One unit of work as persisted by the server.
///
/// `id` and `created_at` are server-assigned; the client never constructs
/// either. Unknown response fields are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Backend liveness snapshot.
///
/// Replaced wholesale on each successful probe, never merged field-by-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
    pub timestamp: String,
    pub environment: String,
}
