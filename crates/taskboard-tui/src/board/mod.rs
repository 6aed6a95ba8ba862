/*
[INPUT]:  Task API client and user-triggered operations
[OUTPUT]: Board state machine and synchronization driver
[POS]:    Board layer - module wiring
[UPDATE]: When board modules change
*/

pub mod state;
pub mod sync;

pub use state::BoardState;
pub use sync::TaskBoard;
