/*
[INPUT]:  TUI app state and rendering snapshots for UI components
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding screens or shared renderers
*/

mod dashboard;
mod layout;
mod logs;
mod pin;
mod transfer;

pub(in crate::tui) mod form;

pub(in crate::tui) use dashboard::{draw_dashboard, draw_transactions};
pub(in crate::tui) use layout::draw_header;
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use pin::{draw_pin_setup, draw_pin_verify};
pub(in crate::tui) use transfer::draw_transfer;
