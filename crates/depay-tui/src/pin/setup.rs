/*
[INPUT]:  Keystrokes, tick deadlines and PIN persistence outcomes
[OUTPUT]: Create/confirm/success step transitions plus emitted commands
[POS]:    PIN domain logic - setup flow state machine
[UPDATE]: When setup steps or failure handling change
*/

use std::time::{Duration, Instant};

use crate::pin::input::PinEntry;

/// Pause between completing a sequence and acting on it, so the user
/// sees the fourth digit land before the step changes
pub const STEP_ADVANCE_DELAY: Duration = Duration::from_millis(300);

/// Steps of the PIN setup flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    Create,
    Confirm,
    Success,
}

/// Side effects the flow asks its caller to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupCommand {
    /// Send the chosen PIN to the server
    PersistPin(String),
    /// Leave the flow for the application root
    NavigateHome,
}

/// Client-local toggles offered on the success step
///
/// Nothing here is persisted to the server; `biometric_enabled` stays
/// `None` when the platform reports no capability, which hides the
/// toggle entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinPreferences {
    pub pin_for_transactions: bool,
    pub pin_for_login: bool,
    pub biometric_enabled: Option<bool>,
}

impl PinPreferences {
    fn new(biometric_available: bool) -> Self {
        Self {
            pin_for_transactions: true,
            pin_for_login: true,
            biometric_enabled: biometric_available.then_some(false),
        }
    }
}

/// Two-pass PIN setup: create, confirm, persist
#[derive(Debug, Clone)]
pub struct SetupFlow {
    step: SetupStep,
    create: PinEntry,
    confirm: PinEntry,
    error: Option<String>,
    advance_at: Option<Instant>,
    persisting: bool,
    prefs: PinPreferences,
}

impl SetupFlow {
    pub fn new(biometric_available: bool) -> Self {
        Self {
            step: SetupStep::Create,
            create: PinEntry::new(),
            confirm: PinEntry::new(),
            error: None,
            advance_at: None,
            persisting: false,
            prefs: PinPreferences::new(biometric_available),
        }
    }

    pub fn step(&self) -> SetupStep {
        self.step
    }

    pub fn create_entry(&self) -> &PinEntry {
        &self.create
    }

    pub fn confirm_entry(&self) -> &PinEntry {
        &self.confirm
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_persisting(&self) -> bool {
        self.persisting
    }

    pub fn preferences(&self) -> &PinPreferences {
        &self.prefs
    }

    fn active_entry(&mut self) -> Option<&mut PinEntry> {
        match self.step {
            SetupStep::Create => Some(&mut self.create),
            SetupStep::Confirm => Some(&mut self.confirm),
            SetupStep::Success => None,
        }
    }

    /// Type a digit into the step's entry
    ///
    /// Completing a sequence arms the advance deadline; the transition
    /// itself happens in `tick`.
    pub fn push_digit(&mut self, c: char, now: Instant) {
        self.error = None;
        let Some(entry) = self.active_entry() else {
            return;
        };

        entry.push_digit(c);
        if entry.is_complete() {
            self.advance_at = Some(now + STEP_ADVANCE_DELAY);
        }
    }

    pub fn backspace(&mut self) {
        self.error = None;
        if let Some(entry) = self.active_entry() {
            entry.backspace();
        }
    }

    pub fn move_left(&mut self) {
        if let Some(entry) = self.active_entry() {
            entry.move_left();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(entry) = self.active_entry() {
            entry.move_right();
        }
    }

    /// Fire due deadlines
    ///
    /// In `create` a complete sequence advances to `confirm`. In
    /// `confirm` a complete sequence is compared against the original:
    /// a match emits `PersistPin`, a mismatch clears the confirm
    /// sequence and reports the error inline.
    pub fn tick(&mut self, now: Instant) -> Option<SetupCommand> {
        let due = match self.advance_at {
            Some(deadline) => now >= deadline,
            None => return None,
        };
        if !due {
            return None;
        }
        self.advance_at = None;

        match self.step {
            SetupStep::Create if self.create.is_complete() => {
                self.step = SetupStep::Confirm;
                None
            }
            SetupStep::Confirm if self.confirm.is_complete() => {
                if self.create.code() == self.confirm.code() {
                    self.persisting = true;
                    Some(SetupCommand::PersistPin(self.create.code()))
                } else {
                    self.error = Some("PINs don't match. Please try again.".to_string());
                    self.confirm.clear();
                    None
                }
            }
            _ => None,
        }
    }

    /// Server accepted the PIN
    pub fn persist_succeeded(&mut self) {
        self.persisting = false;
        self.step = SetupStep::Success;
    }

    /// Server rejected the PIN: surface its message and start over
    pub fn persist_failed(&mut self, server_message: Option<&str>) {
        self.persisting = false;
        self.reset_sequences();
        self.error = Some(
            server_message
                .unwrap_or("Failed to save PIN.")
                .to_string(),
        );
    }

    /// The request never reached the server: generic message, start over
    pub fn network_failed(&mut self) {
        self.persisting = false;
        self.reset_sequences();
        self.error = Some("Network error. Please try again.".to_string());
    }

    /// User-invoked reset: both sequences, the error, and the step
    ///
    /// Also serves as "Change PIN" on the success step.
    pub fn reset(&mut self) {
        self.reset_sequences();
        self.error = None;
    }

    /// Leave the flow once the PIN is saved
    pub fn done(&self) -> Option<SetupCommand> {
        (self.step == SetupStep::Success).then_some(SetupCommand::NavigateHome)
    }

    /// Return from `confirm` to `create`, keeping the create sequence
    pub fn back(&mut self) {
        if self.step == SetupStep::Confirm {
            self.step = SetupStep::Create;
            self.confirm.clear();
            self.error = None;
            self.advance_at = None;
        }
    }

    fn reset_sequences(&mut self) {
        self.create.clear();
        self.confirm.clear();
        self.step = SetupStep::Create;
        self.advance_at = None;
    }

    pub fn toggle_pin_for_transactions(&mut self) {
        self.prefs.pin_for_transactions = !self.prefs.pin_for_transactions;
    }

    pub fn toggle_pin_for_login(&mut self) {
        self.prefs.pin_for_login = !self.prefs.pin_for_login;
    }

    pub fn toggle_biometric(&mut self) {
        if let Some(enabled) = self.prefs.biometric_enabled {
            self.prefs.biometric_enabled = Some(!enabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_code(flow: &mut SetupFlow, code: &str, now: Instant) {
        for c in code.chars() {
            flow.push_digit(c, now);
        }
    }

    fn advance(flow: &mut SetupFlow, now: Instant) -> Option<SetupCommand> {
        flow.tick(now + STEP_ADVANCE_DELAY)
    }

    #[test]
    fn test_create_advances_to_confirm_after_delay() {
        let now = Instant::now();
        let mut flow = SetupFlow::new(false);

        type_code(&mut flow, "1234", now);
        assert_eq!(flow.step(), SetupStep::Create);

        // not due yet
        assert_eq!(flow.tick(now), None);
        assert_eq!(flow.step(), SetupStep::Create);

        assert_eq!(advance(&mut flow, now), None);
        assert_eq!(flow.step(), SetupStep::Confirm);
        assert_eq!(flow.confirm_entry().focus(), 0);
    }

    #[test]
    fn test_matching_confirm_emits_persist() {
        let now = Instant::now();
        let mut flow = SetupFlow::new(false);

        type_code(&mut flow, "1234", now);
        advance(&mut flow, now);
        type_code(&mut flow, "1234", now);

        let command = advance(&mut flow, now);
        assert_eq!(command, Some(SetupCommand::PersistPin("1234".to_string())));
        assert!(flow.is_persisting());
    }

    #[test]
    fn test_mismatch_clears_confirm_only() {
        let now = Instant::now();
        let mut flow = SetupFlow::new(false);

        type_code(&mut flow, "1234", now);
        advance(&mut flow, now);
        type_code(&mut flow, "9999", now);

        assert_eq!(advance(&mut flow, now), None);
        assert_eq!(flow.error(), Some("PINs don't match. Please try again."));
        assert_eq!(flow.step(), SetupStep::Confirm);
        assert_eq!(flow.confirm_entry().code(), "");
        assert_eq!(flow.create_entry().code(), "1234");
    }

    #[test]
    fn test_mismatch_never_emits_persist() {
        let now = Instant::now();
        let mut flow = SetupFlow::new(false);

        type_code(&mut flow, "1234", now);
        advance(&mut flow, now);
        type_code(&mut flow, "1235", now);

        assert_eq!(advance(&mut flow, now), None);
        assert!(!flow.is_persisting());
    }

    #[test]
    fn test_persist_success_reaches_success_step() {
        let now = Instant::now();
        let mut flow = SetupFlow::new(false);

        type_code(&mut flow, "1234", now);
        advance(&mut flow, now);
        type_code(&mut flow, "1234", now);
        advance(&mut flow, now);

        flow.persist_succeeded();
        assert_eq!(flow.step(), SetupStep::Success);
    }

    #[test]
    fn test_persist_failure_resets_with_server_message() {
        let now = Instant::now();
        let mut flow = SetupFlow::new(false);

        type_code(&mut flow, "1234", now);
        advance(&mut flow, now);
        type_code(&mut flow, "1234", now);
        advance(&mut flow, now);

        flow.persist_failed(Some("PIN must be a 4-digit number"));
        assert_eq!(flow.step(), SetupStep::Create);
        assert_eq!(flow.create_entry().code(), "");
        assert_eq!(flow.confirm_entry().code(), "");
        assert_eq!(flow.error(), Some("PIN must be a 4-digit number"));
    }

    #[test]
    fn test_network_failure_resets_with_generic_message() {
        let now = Instant::now();
        let mut flow = SetupFlow::new(false);

        type_code(&mut flow, "1234", now);
        advance(&mut flow, now);
        type_code(&mut flow, "1234", now);
        advance(&mut flow, now);

        flow.network_failed();
        assert_eq!(flow.step(), SetupStep::Create);
        assert_eq!(flow.error(), Some("Network error. Please try again."));
    }

    #[test]
    fn test_reset_clears_everything() {
        let now = Instant::now();
        let mut flow = SetupFlow::new(false);

        type_code(&mut flow, "1234", now);
        advance(&mut flow, now);
        type_code(&mut flow, "9999", now);
        advance(&mut flow, now);

        flow.reset();
        assert_eq!(flow.step(), SetupStep::Create);
        assert_eq!(flow.create_entry().code(), "");
        assert_eq!(flow.confirm_entry().code(), "");
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn test_back_keeps_create_sequence() {
        let now = Instant::now();
        let mut flow = SetupFlow::new(false);

        type_code(&mut flow, "1234", now);
        advance(&mut flow, now);
        type_code(&mut flow, "99", now);

        flow.back();
        assert_eq!(flow.step(), SetupStep::Create);
        assert_eq!(flow.create_entry().code(), "1234");
        assert_eq!(flow.confirm_entry().code(), "");
    }

    #[test]
    fn test_keystroke_clears_error() {
        let now = Instant::now();
        let mut flow = SetupFlow::new(false);

        type_code(&mut flow, "1234", now);
        advance(&mut flow, now);
        type_code(&mut flow, "9999", now);
        advance(&mut flow, now);
        assert!(flow.error().is_some());

        flow.push_digit('1', now);
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn test_incomplete_sequence_at_deadline_does_not_advance() {
        let now = Instant::now();
        let mut flow = SetupFlow::new(false);

        type_code(&mut flow, "1234", now);
        flow.backspace();
        assert_eq!(advance(&mut flow, now), None);
        assert_eq!(flow.step(), SetupStep::Create);
    }

    #[test]
    fn test_done_only_from_success_step() {
        let now = Instant::now();
        let mut flow = SetupFlow::new(false);
        assert_eq!(flow.done(), None);

        type_code(&mut flow, "1234", now);
        advance(&mut flow, now);
        type_code(&mut flow, "1234", now);
        advance(&mut flow, now);
        flow.persist_succeeded();

        assert_eq!(flow.done(), Some(SetupCommand::NavigateHome));

        flow.reset();
        assert_eq!(flow.step(), SetupStep::Create);
        assert_eq!(flow.done(), None);
    }

    #[test]
    fn test_biometric_toggle_only_when_available() {
        let mut without = SetupFlow::new(false);
        without.toggle_biometric();
        assert_eq!(without.preferences().biometric_enabled, None);

        let mut with = SetupFlow::new(true);
        assert_eq!(with.preferences().biometric_enabled, Some(false));
        with.toggle_biometric();
        assert_eq!(with.preferences().biometric_enabled, Some(true));
    }
}
