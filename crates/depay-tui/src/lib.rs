/*
[INPUT]:  Public API exports for depay-tui crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod dashboard;
pub mod nav;
pub mod pin;
pub mod tui;

// Re-export main types for convenience
pub use config::AppConfig;
pub use dashboard::DashboardData;
pub use tui::{run_tui_with_log, LogBuffer, LogBufferHandle, LogWriterFactory};
