/*
[INPUT]:  Keystrokes, verification outcomes and the requested redirect
[OUTPUT]: Verify commands plus error/shake presentation state
[POS]:    PIN domain logic - verification gate state machine
[UPDATE]: When verification feedback or redirect handling changes
*/

use std::time::{Duration, Instant};

use crate::nav::routes;
use crate::pin::input::PinEntry;

/// How long the entry row shakes after a rejected PIN
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// Side effects the flow asks its caller to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyCommand {
    /// Check the entered PIN against the server
    Verify(String),
}

/// Single-sequence PIN check gating the protected area
#[derive(Debug, Clone)]
pub struct VerifyFlow {
    entry: PinEntry,
    error: Option<String>,
    shake_until: Option<Instant>,
    redirect_to: Option<String>,
    verifying: bool,
}

impl VerifyFlow {
    /// `redirect_to` is the path to continue to once verified, as
    /// carried by the guard's redirect
    pub fn new(redirect_to: Option<String>) -> Self {
        Self {
            entry: PinEntry::new(),
            error: None,
            shake_until: None,
            redirect_to,
            verifying: false,
        }
    }

    pub fn entry(&self) -> &PinEntry {
        &self.entry
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_verifying(&self) -> bool {
        self.verifying
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_until.is_some()
    }

    /// Where to go after a successful check
    pub fn redirect_target(&self) -> &str {
        self.redirect_to.as_deref().unwrap_or(routes::DASHBOARD)
    }

    /// Type a digit; a completed sequence submits on its own
    pub fn push_digit(&mut self, c: char) -> Option<VerifyCommand> {
        self.error = None;
        self.entry.push_digit(c);
        if self.entry.is_complete() && !self.verifying {
            self.verifying = true;
            return Some(VerifyCommand::Verify(self.entry.code()));
        }
        None
    }

    pub fn backspace(&mut self) {
        self.error = None;
        self.entry.backspace();
    }

    pub fn move_left(&mut self) {
        self.entry.move_left();
    }

    pub fn move_right(&mut self) {
        self.entry.move_right();
    }

    /// Explicit submit, sent with whatever digits are present
    pub fn submit(&mut self) -> Option<VerifyCommand> {
        if self.verifying {
            return None;
        }
        self.verifying = true;
        Some(VerifyCommand::Verify(self.entry.code()))
    }

    /// Server rejected the PIN: message, shake, and a fresh entry
    pub fn verification_failed(&mut self, server_message: Option<&str>, now: Instant) {
        self.verifying = false;
        self.error = Some(server_message.unwrap_or("Invalid PIN").to_string());
        self.shake_until = Some(now + SHAKE_DURATION);
        self.entry.clear();
    }

    /// The request never reached the server: keep the digits for retry
    pub fn network_failed(&mut self) {
        self.verifying = false;
        self.error = Some("Network error. Please try again.".to_string());
    }

    pub fn verification_succeeded(&mut self) {
        self.verifying = false;
    }

    /// Expire the shake once its window has passed
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.shake_until {
            if now >= deadline {
                self.shake_until = None;
            }
        }
    }

    pub fn reset(&mut self) {
        self.entry.clear();
        self.error = None;
        self.shake_until = None;
        self.verifying = false;
    }
}
