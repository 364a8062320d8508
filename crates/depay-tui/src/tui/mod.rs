/*
[INPUT]:  Terminal events, app state, and screen renderers
[OUTPUT]: TUI entry point plus the log capture exports
[POS]:    TUI module for the depay binary
[UPDATE]: 2026-02-10 Move runtime logic out of tui/mod.rs
[UPDATE]: 2026-08-14 Wire the screen-based module tree
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{
    run_tui_with_log, LogBuffer, LogBufferHandle, LogWriter, LogWriterFactory,
    LOG_BUFFER_CAPACITY,
};
