/*
[INPUT]:  Board driver, log buffer, list selection, add-task form
[OUTPUT]: App helpers for TUI rendering and board control
[POS]:    TUI app state and selection management
[UPDATE]: When adding tabs, forms, or selection behavior
*/

use ratatui::widgets::ListState;

use crate::board::TaskBoard;

use super::logs::LogBufferHandle;
use super::ui::task_form::TaskForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    Board,
    Logs,
}

pub(super) struct App {
    pub(super) board: TaskBoard,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) list_state: ListState,
    pub(super) current_tab: Tab,
    pub(super) form: Option<TaskForm>,
}

impl App {
    pub(super) fn new(board: TaskBoard, log_buffer: LogBufferHandle) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            board,
            log_buffer,
            list_state,
            current_tab: Tab::Board,
            form: None,
        }
    }

    pub(super) fn selected_task_id(&self) -> Option<i64> {
        let idx = self.list_state.selected()?;
        self.board.state().tasks().get(idx).map(|task| task.id)
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let len = self.board.state().tasks().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        self.list_state.select(Some(next));
    }

    /// Re-align selection after the task collection changed underneath it
    pub(super) fn clamp_selection(&mut self) {
        let len = self.board.state().tasks().len();
        if len == 0 {
            self.list_state.select(None);
        } else if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        } else if let Some(selected) = self.list_state.selected() {
            if selected >= len {
                self.list_state.select(Some(len - 1));
            }
        }
    }

    pub(super) fn next_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Board => Tab::Logs,
            Tab::Logs => Tab::Board,
        };
    }

    /// Open the add-task form, seeded from the draft buffers so typed input
    /// from an earlier attempt survives
    pub(super) fn open_form(&mut self) {
        let state = self.board.state();
        self.form = Some(TaskForm::new(
            state.draft_title(),
            state.draft_description(),
        ));
    }

    /// Close the form, stashing its text into the draft buffers
    pub(super) fn stash_form(&mut self) {
        if let Some(form) = self.form.take() {
            self.board.state_mut().set_draft_title(form.title().to_string());
            self.board
                .state_mut()
                .set_draft_description(form.description());
        }
    }

    /// Submit the form: copy its text into the drafts and run the add
    /// operation. The form closes only when the add succeeded (drafts
    /// cleared); a validation no-op or a failed request keeps it open with
    /// the typed input intact.
    pub(super) async fn submit_form(&mut self) {
        let Some(form) = &self.form else {
            return;
        };

        let title = form.title().to_string();
        let description = form.description();
        self.board.state_mut().set_draft_title(title);
        self.board.state_mut().set_draft_description(description);

        let submittable = self.board.state().draft_is_submittable();
        self.board.add_task().await;

        if submittable && self.board.state().error_message().is_none() {
            self.form = None;
            self.clamp_selection();
        }
    }

    pub(super) async fn refresh_all(&mut self) {
        self.board.refresh().await;
        self.clamp_selection();
    }

    pub(super) async fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        self.board.toggle_task(id).await;
    }

    pub(super) async fn delete_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        self.board.delete_task(id).await;
        self.clamp_selection();
    }
}
