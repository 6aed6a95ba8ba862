/*
[INPUT]:  Public API exports for taskboard-tui crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod board;
pub mod config;
pub mod tui;

// Re-export main types for convenience
pub use board::{BoardState, TaskBoard};
pub use config::AppConfig;
