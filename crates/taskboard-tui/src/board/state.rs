/*
[INPUT]:  Request outcomes from the task API (typed results)
[OUTPUT]: Local board state kept consistent with the server collection
[POS]:    Board layer - state container and pure transitions
[UPDATE]: When the synchronization contract changes
*/

use taskboard_adapter::{HealthCheck, Task, TaskboardError};

const FETCH_FAILED: &str = "Failed to fetch tasks";
const ADD_FAILED: &str = "Failed to add task";
const UPDATE_FAILED: &str = "Failed to update task";
const DELETE_FAILED: &str = "Failed to delete task";

/// Local mirror of the server-side task collection plus transient UI buffers.
///
/// All mutations are pessimistic: state changes only when a transition is fed
/// a successful server outcome. Transitions are pure with respect to I/O,
/// which keeps the state machine testable without a rendering surface or a
/// live backend.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    tasks: Vec<Task>,
    health: Option<HealthCheck>,
    draft_title: String,
    draft_description: String,
    is_loading: bool,
    error_message: Option<String>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered task sequence as of the last successful response
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Latest health snapshot, absent until a probe succeeds
    pub fn health(&self) -> Option<&HealthCheck> {
        self.health.as_ref()
    }

    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    pub fn draft_description(&self) -> &str {
        &self.draft_description
    }

    /// Whether the bulk list fetch is in flight. Never set by per-item mutations.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Most recent user-visible failure, cleared by the next successful operation
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn set_draft_title(&mut self, title: String) {
        self.draft_title = title;
    }

    pub fn set_draft_description(&mut self, description: String) {
        self.draft_description = description;
    }

    /// A draft is submittable when the title is non-empty after trimming
    pub fn draft_is_submittable(&self) -> bool {
        !self.draft_title.trim().is_empty()
    }

    /// Completion flag to request for a toggle: the negation of the
    /// locally-held value. `None` when no task with that id exists locally,
    /// in which case the toggle is a no-op.
    pub fn toggle_target(&self, id: i64) -> Option<bool> {
        self.tasks.iter().find(|t| t.id == id).map(|t| !t.completed)
    }

    pub fn begin_tasks_load(&mut self) {
        self.is_loading = true;
    }

    /// Outcome of a list fetch. Success replaces the collection wholesale and
    /// clears the error; failure leaves the collection untouched. The loading
    /// flag drops on both arms.
    pub fn finish_tasks_load(&mut self, outcome: Result<Vec<Task>, TaskboardError>) {
        self.is_loading = false;
        match outcome {
            Ok(tasks) => {
                self.tasks = tasks;
                self.error_message = None;
            }
            Err(_) => {
                self.error_message = Some(FETCH_FAILED.to_string());
            }
        }
    }

    /// Outcome of a health probe. Success replaces the snapshot wholesale;
    /// failure leaves it as-is and never touches the error banner.
    pub fn apply_health_probe(&mut self, outcome: Result<HealthCheck, TaskboardError>) {
        if let Ok(health) = outcome {
            self.health = Some(health);
        }
    }

    /// Outcome of a create. The server-returned record is appended at the end
    /// and both draft buffers clear; on failure the typed input is preserved
    /// so the user can retry.
    pub fn finish_add(&mut self, outcome: Result<Task, TaskboardError>) {
        match outcome {
            Ok(task) => {
                self.tasks.push(task);
                self.draft_title.clear();
                self.draft_description.clear();
                self.error_message = None;
            }
            Err(_) => {
                self.error_message = Some(ADD_FAILED.to_string());
            }
        }
    }

    /// Outcome of a completion toggle. The matching task is replaced in place
    /// with the full server-returned record; all other tasks are untouched.
    pub fn finish_toggle(&mut self, id: i64, outcome: Result<Task, TaskboardError>) {
        match outcome {
            Ok(updated) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    *task = updated;
                }
                self.error_message = None;
            }
            Err(_) => {
                self.error_message = Some(UPDATE_FAILED.to_string());
            }
        }
    }

    /// Outcome of a delete. The task leaves local state only on confirmation.
    pub fn finish_delete(&mut self, id: i64, outcome: Result<(), TaskboardError>) {
        match outcome {
            Ok(()) => {
                self.tasks.retain(|t| t.id != id);
                self.error_message = None;
            }
            Err(_) => {
                self.error_message = Some(DELETE_FAILED.to_string());
            }
        }
    }
}
