/*
[INPUT]:  Public API exports for obelisk-console crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod history;
pub mod session;

// Re-export main types for convenience
pub use config::ConsoleConfig;
pub use history::HistoryViewer;
pub use session::{ObservePhase, TaskHandle, TaskSession, TaskView, wait_for_terminal};
