/*
[INPUT]:  User-triggered operations and the task API client
[OUTPUT]: Board state updated from authoritative server responses
[POS]:    Board layer - synchronization driver between client and state
[UPDATE]: When operations or their failure handling change
*/

use taskboard_adapter::TaskboardClient;
use tracing::{debug, warn};

use super::state::BoardState;

/// Drives the board state machine against the remote task service.
///
/// The driver owns both the client and the state, so operations run one at a
/// time per `&mut self` borrow and each state transition is applied atomically
/// between awaits. Overlapping in-flight calls cannot arise in-process; if
/// they did (several drivers against one backend), the later-arriving response
/// would win.
pub struct TaskBoard {
    client: TaskboardClient,
    state: BoardState,
}

impl TaskBoard {
    pub fn new(client: TaskboardClient) -> Self {
        Self {
            client,
            state: BoardState::new(),
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BoardState {
        &mut self.state
    }

    /// Mount behavior: probe health and fetch the list in parallel.
    /// The two requests are independent and their failures are isolated.
    pub async fn refresh(&mut self) {
        self.state.begin_tasks_load();
        let (health, tasks) = tokio::join!(self.client.get_health(), self.client.list_tasks());

        if let Err(err) = &health {
            warn!(error = %err, "health probe failed");
        }
        if let Err(err) = &tasks {
            warn!(error = %err, "fetch tasks failed");
        }

        self.state.apply_health_probe(health);
        self.state.finish_tasks_load(tasks);
    }

    /// Single health probe. Failures are logged only, never surfaced in the
    /// error banner.
    pub async fn load_health(&mut self) {
        let outcome = self.client.get_health().await;
        if let Err(err) = &outcome {
            warn!(error = %err, "health probe failed");
        }
        self.state.apply_health_probe(outcome);
    }

    /// Fetch the full task list, replacing local state wholesale on success
    pub async fn load_tasks(&mut self) {
        self.state.begin_tasks_load();
        let outcome = self.client.list_tasks().await;
        if let Err(err) = &outcome {
            warn!(error = %err, "fetch tasks failed");
        }
        self.state.finish_tasks_load(outcome);
    }

    /// Create a task from the draft buffers.
    ///
    /// A whitespace-only title is a silent no-op: no request is sent and no
    /// error is shown. The title is sent as typed (validation trims, the
    /// payload does not).
    pub async fn add_task(&mut self) {
        if !self.state.draft_is_submittable() {
            debug!("add task skipped: empty title");
            return;
        }

        let outcome = self
            .client
            .create_task(self.state.draft_title(), self.state.draft_description())
            .await;
        if let Err(err) = &outcome {
            warn!(error = %err, "add task failed");
        }
        self.state.finish_add(outcome);
    }

    /// Toggle a task's completion flag, sending the negation of the
    /// locally-held value. No-op when the id is unknown locally.
    pub async fn toggle_task(&mut self, id: i64) {
        let Some(completed) = self.state.toggle_target(id) else {
            debug!(id, "toggle skipped: task not in local state");
            return;
        };

        let outcome = self.client.update_task(id, completed).await;
        if let Err(err) = &outcome {
            warn!(error = %err, id, "update task failed");
        }
        self.state.finish_toggle(id, outcome);
    }

    /// Delete a task; local removal happens only on server confirmation
    pub async fn delete_task(&mut self, id: i64) {
        let outcome = self.client.delete_task(id).await;
        if let Err(err) = &outcome {
            warn!(error = %err, id, "delete task failed");
        }
        self.state.finish_delete(id, outcome);
    }
}
