/*
[INPUT]:  Crossterm key events
[OUTPUT]: TUI event routing into app and form actions
[POS]:    TUI key handling
[UPDATE]: When changing keybindings or form flow
*/

use crossterm::event::{KeyCode, KeyEvent};

use super::app::App;
use super::ui::task_form::FormAction;

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) async fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if app.form.is_some() {
        return handle_form_key(app, key).await;
    }

    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('r') => {
            app.refresh_all().await;
            false
        }
        KeyCode::Char('a') => {
            app.open_form();
            false
        }
        KeyCode::Char('d') => {
            app.delete_selected().await;
            false
        }
        KeyCode::Char(' ') => {
            app.toggle_selected().await;
            false
        }
        KeyCode::Tab => {
            app.next_tab();
            false
        }
        KeyCode::Up => {
            app.move_selection(-1);
            false
        }
        KeyCode::Down => {
            app.move_selection(1);
            false
        }
        _ => false,
    }
}

async fn handle_form_key(app: &mut App, key: KeyEvent) -> bool {
    let action = match app.form.as_mut() {
        Some(form) => form.handle_key(key),
        None => return false,
    };

    match action {
        FormAction::Cancel => app.stash_form(),
        FormAction::Submit => app.submit_form().await,
        FormAction::None => {}
    }

    false
}
