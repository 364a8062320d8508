/*
[INPUT]:  Crossterm key events from the input poll task
[OUTPUT]: Mutations on AppState plus a quit signal back to the run loop
[POS]:    Keyboard routing layer between runtime.rs and app.rs
[UPDATE]: 2026-02-09 Extract key handling match logic from run_tui_with_log
[UPDATE]: 2026-08-14 Route per-screen instead of per-tab
[UPDATE]: 2026-08-15 Wire PIN entry keys and transfer form submission
*/

use std::time::Instant;

use crossterm::event::KeyCode;

use crate::nav::routes;
use crate::pin::{SetupStep, VerifyCommand};

use super::app::{AppState, Screen};
use super::ui::form::{handle_form_key, FormAction};

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) async fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    match app.screen {
        Screen::Home => handle_home_key(app, key).await,
        Screen::Login => handle_login_key(app, key).await,
        Screen::Signup => handle_signup_key(app, key).await,
        Screen::SetPin => handle_set_pin_key(app, key).await,
        Screen::VerifyPin => handle_verify_pin_key(app, key).await,
        Screen::Dashboard => handle_dashboard_key(app, key).await,
        Screen::Transactions => handle_transactions_key(app, key).await,
        Screen::Transfer => handle_transfer_key(app, key).await,
        Screen::Logs => handle_logs_key(app, key).await,
    }
}

async fn handle_home_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Char('d') => app.navigate(routes::DASHBOARD).await,
        KeyCode::Char('t') => app.navigate(routes::TRANSACTIONS).await,
        KeyCode::Char('p') => app.navigate(routes::PAY).await,
        KeyCode::Char('g') => app.show_logs(),
        KeyCode::Char('o') => app.sign_out().await,
        _ => {}
    }
    false
}

async fn handle_login_key(app: &mut AppState, key: KeyCode) -> bool {
    if key == KeyCode::Esc {
        app.navigate(routes::SIGNUP).await;
        return false;
    }
    if handle_form_key(&mut app.login_form, key) == FormAction::Submit {
        app.submit_login().await;
    }
    false
}

async fn handle_signup_key(app: &mut AppState, key: KeyCode) -> bool {
    if key == KeyCode::Esc {
        app.navigate(routes::LOGIN).await;
        return false;
    }
    if handle_form_key(&mut app.signup_form, key) == FormAction::Submit {
        app.submit_signup().await;
    }
    false
}

async fn handle_set_pin_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Esc => app.setup.back(),
        KeyCode::Backspace => app.setup.backspace(),
        KeyCode::Left => app.setup.move_left(),
        KeyCode::Right => app.setup.move_right(),
        KeyCode::Char('c') => app.setup.reset(),
        KeyCode::Enter => {
            if let Some(command) = app.setup.done() {
                app.run_setup_command(command).await;
            }
        }
        KeyCode::Char('t') if app.setup.step() == SetupStep::Success => {
            app.setup.toggle_pin_for_transactions();
        }
        KeyCode::Char('l') if app.setup.step() == SetupStep::Success => {
            app.setup.toggle_pin_for_login();
        }
        KeyCode::Char('b') if app.setup.step() == SetupStep::Success => {
            app.setup.toggle_biometric();
        }
        KeyCode::Char(c) => app.setup.push_digit(c, Instant::now()),
        _ => {}
    }
    false
}

async fn handle_verify_pin_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Esc => app.navigate(routes::HOME).await,
        KeyCode::Backspace => app.verify.backspace(),
        KeyCode::Left => app.verify.move_left(),
        KeyCode::Right => app.verify.move_right(),
        KeyCode::Char('c') => app.verify.reset(),
        KeyCode::Enter => {
            if let Some(VerifyCommand::Verify(code)) = app.verify.submit() {
                app.verify_pin(code, Instant::now()).await;
            }
        }
        KeyCode::Char(c) => {
            if let Some(VerifyCommand::Verify(code)) = app.verify.push_digit(c) {
                app.verify_pin(code, Instant::now()).await;
            }
        }
        _ => {}
    }
    false
}

async fn handle_dashboard_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Char('r') => app.refresh_dashboard().await,
        KeyCode::Char('t') => app.navigate(routes::TRANSACTIONS).await,
        KeyCode::Char('p') => app.navigate(routes::PAY).await,
        KeyCode::Char('g') => app.show_logs(),
        KeyCode::Char('o') => app.sign_out().await,
        KeyCode::Esc => app.navigate(routes::HOME).await,
        _ => {}
    }
    false
}

async fn handle_transactions_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Char('r') => app.refresh_dashboard().await,
        KeyCode::Char('g') => app.show_logs(),
        KeyCode::Esc => app.navigate(routes::DASHBOARD).await,
        _ => {}
    }
    false
}

async fn handle_transfer_key(app: &mut AppState, key: KeyCode) -> bool {
    if key == KeyCode::Esc {
        app.navigate(routes::HOME).await;
        return false;
    }
    match handle_form_key(&mut app.transfer.form, key) {
        FormAction::Secondary => app.lookup_recipient().await,
        FormAction::Submit => app.submit_transfer().await,
        FormAction::None => {}
    }
    false
}

async fn handle_logs_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Esc => {
            // The log view never changes the routed path, so resolving the
            // current path again lands back on the screen underneath.
            let path = app.path.clone();
            app.navigate(&path).await;
        }
        _ => {}
    }
    false
}
