/*
[INPUT]:  Board driver and log buffer
[OUTPUT]: Ratatui-based TUI for the task board
[POS]:    TUI module wiring
[UPDATE]: When TUI modules change
*/

mod app;
mod events;
pub mod logs;
mod runtime;
mod terminal;
mod ui;

pub use logs::{LogBuffer, LogBufferHandle, LogWriterFactory, log_buffer};
pub use runtime::run;
