/*
[INPUT]:  Board driver, log buffer, crossterm input events
[OUTPUT]: Ratatui run loop with render tick and key routing
[POS]:    TUI runtime loop
[UPDATE]: When changing the event loop or startup behavior
*/

use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::board::TaskBoard;

use super::app::App;
use super::events::handle_key_event;
use super::logs::LogBufferHandle;
use super::terminal::TerminalGuard;
use super::ui;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

enum UiEvent {
    Input(CrosstermEvent),
}

pub async fn run(board: TaskBoard, log_buffer: LogBufferHandle) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = event_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let mut app = App::new(board, log_buffer);

    // mount: health probe and list fetch run in parallel
    app.refresh_all().await;

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                if let Some(UiEvent::Input(CrosstermEvent::Key(key))) = maybe_event {
                    should_quit = handle_key_event(&mut app, key).await;
                }
            }
        }

        terminal.draw(|frame| ui::draw(frame, &mut app))?;
    }

    input_shutdown.cancel();
    Ok(())
}
