/*
[INPUT]:  HTTP client, cookie jar, log buffer, and screen flow state
[OUTPUT]: AppState helpers for TUI rendering and backend actions
[POS]:    TUI app state and navigation management
[UPDATE]: 2026-08-14 Route all screen changes through the access guard
[UPDATE]: When adding screens or backend actions
*/

use std::str::FromStr;
use std::time::Instant;

use rust_decimal::Decimal;
use tracing::{info, warn};

use depay_adapter::session::cookies::CookieJar;
use depay_adapter::{DepayClient, DepayError, TransferResponse};

use crate::dashboard::DashboardData;
use crate::nav::guard;
use crate::nav::routes;
use crate::nav::RouteDecision;
use crate::pin::{SetupCommand, SetupFlow, VerifyFlow};
use crate::tui::LogBufferHandle;
use crate::tui::ui::form::{Form, FormAction, button, masked_input, text_input};

pub(super) const LOGIN_EMAIL: usize = 0;
pub(super) const LOGIN_PASSWORD: usize = 1;

pub(super) const SIGNUP_FIRST_NAME: usize = 0;
pub(super) const SIGNUP_LAST_NAME: usize = 1;
pub(super) const SIGNUP_EMAIL: usize = 2;
pub(super) const SIGNUP_PASSWORD: usize = 3;

pub(super) const TRANSFER_RECIPIENT: usize = 0;
pub(super) const TRANSFER_AMOUNT: usize = 1;
pub(super) const TRANSFER_NOTE: usize = 2;
pub(super) const TRANSFER_PIN: usize = 3;

/// One screen per route the client serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Screen {
    Home,
    Login,
    Signup,
    SetPin,
    VerifyPin,
    Dashboard,
    Transactions,
    Transfer,
    /// Local diagnostics view, not addressable as a route
    Logs,
}

impl Screen {
    fn for_path(path: &str) -> Option<Self> {
        match path {
            routes::HOME => Some(Self::Home),
            routes::LOGIN => Some(Self::Login),
            routes::SIGNUP => Some(Self::Signup),
            routes::SET_PIN => Some(Self::SetPin),
            routes::VERIFY_PIN => Some(Self::VerifyPin),
            routes::DASHBOARD => Some(Self::Dashboard),
            routes::TRANSACTIONS => Some(Self::Transactions),
            routes::PAY => Some(Self::Transfer),
            _ => None,
        }
    }
}

/// Result of resolving a recipient account number
pub(super) enum RecipientLookup {
    Found { full_name: String },
    NotFound { message: String },
}

pub(super) struct TransferState {
    pub(super) form: Form,
    pub(super) lookup: Option<RecipientLookup>,
    pub(super) receipt: Option<TransferResponse>,
}

impl TransferState {
    fn new() -> Self {
        Self {
            form: Form::new(
                "Send Money",
                vec![
                    text_input("Recipient account"),
                    text_input("Amount"),
                    text_input("Note"),
                    masked_input("PIN"),
                    button("Look Up", FormAction::Secondary),
                    button("Send", FormAction::Submit),
                ],
            ),
            lookup: None,
            receipt: None,
        }
    }
}

pub(super) struct AppState {
    pub(super) client: DepayClient,
    pub(super) cookies: CookieJar,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) screen: Screen,
    pub(super) path: String,
    pub(super) status_message: String,
    pub(super) login_form: Form,
    pub(super) signup_form: Form,
    pub(super) setup: SetupFlow,
    pub(super) verify: VerifyFlow,
    pub(super) dashboard: Option<DashboardData>,
    pub(super) transfer: TransferState,
    biometric_available: bool,
    bell_pending: bool,
}

impl AppState {
    pub(super) fn new(
        client: DepayClient,
        biometric_available: bool,
        log_buffer: LogBufferHandle,
    ) -> Self {
        Self {
            client,
            cookies: CookieJar::default(),
            log_buffer,
            screen: Screen::Login,
            path: routes::LOGIN.to_string(),
            status_message: "Ready".to_string(),
            login_form: login_form(),
            signup_form: signup_form(),
            setup: SetupFlow::new(biometric_available),
            verify: VerifyFlow::new(None),
            dashboard: None,
            transfer: TransferState::new(),
            biometric_available,
            bell_pending: false,
        }
    }

    pub(super) fn session_email(&self) -> Option<String> {
        self.client.session().email()
    }

    /// True once per requested bell, consumed by the run loop
    pub(super) fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    /// Switch screens, honoring guard redirects
    ///
    /// Entering the PIN screens rebuilds their flow state, mirroring a
    /// fresh page mount; entering the dashboard area refetches its data.
    pub(super) async fn navigate(&mut self, target: &str) {
        let mut target = target.to_string();
        loop {
            match guard::evaluate(&target, &self.cookies) {
                RouteDecision::Allow => break,
                RouteDecision::Redirect(url) => {
                    info!(from = %target, to = %url, "guard redirect");
                    target = url;
                }
            }
        }

        let path = routes::path_only(&target).to_string();
        let Some(screen) = Screen::for_path(&path) else {
            self.status_message = format!("no screen at {path}");
            return;
        };

        match screen {
            Screen::SetPin => {
                self.setup = SetupFlow::new(self.biometric_available);
            }
            Screen::VerifyPin => {
                self.verify = VerifyFlow::new(routes::redirect_target(&target));
            }
            Screen::Dashboard | Screen::Transactions => {
                self.refresh_dashboard().await;
            }
            _ => {}
        }

        self.path = path;
        self.screen = screen;
    }

    /// Jump to the diagnostics view without touching the route
    pub(super) fn show_logs(&mut self) {
        self.screen = Screen::Logs;
    }

    pub(super) async fn refresh_dashboard(&mut self) {
        self.dashboard = Some(DashboardData::load(&self.client).await);
    }

    async fn perform_login(&mut self, email: &str, password: &str) -> Result<(), DepayError> {
        let response = self.client.login(email, password).await?;
        self.cookies.set_auth_token(&response.token);
        self.status_message = format!("signed in as {email}");

        let target = if response.has_set_pin == Some(false) {
            routes::SET_PIN
        } else {
            routes::HOME
        };
        self.navigate(target).await;
        Ok(())
    }

    pub(super) async fn submit_login(&mut self) {
        let email = self.login_form.text_value(LOGIN_EMAIL).trim().to_string();
        let password = self.login_form.text_value(LOGIN_PASSWORD).to_string();

        if let Err(err) = self.perform_login(&email, &password).await {
            warn!(error = %err, "login failed");
            self.login_form
                .set_error(err.server_message().unwrap_or("Something went wrong"));
        }
    }

    /// Non-interactive sign-in with configured credentials
    pub(super) async fn auto_login(&mut self, email: &str, password: &str) {
        if let Err(err) = self.perform_login(email, password).await {
            warn!(error = %err, "configured sign-in failed");
            self.status_message = format!(
                "sign-in failed: {}",
                err.server_message().unwrap_or("Something went wrong")
            );
        }
    }

    pub(super) async fn submit_signup(&mut self) {
        let first_name = self
            .signup_form
            .text_value(SIGNUP_FIRST_NAME)
            .trim()
            .to_string();
        let last_name = self
            .signup_form
            .text_value(SIGNUP_LAST_NAME)
            .trim()
            .to_string();
        let email = self.signup_form.text_value(SIGNUP_EMAIL).trim().to_string();
        let password = self.signup_form.text_value(SIGNUP_PASSWORD).to_string();

        match self
            .client
            .signup(&first_name, &last_name, &email, &password)
            .await
        {
            Ok(response) => {
                self.cookies.set_auth_token(&response.token);
                self.status_message = format!("account {} created", response.account_number);
                // fresh accounts have no PIN yet
                self.navigate(routes::SET_PIN).await;
            }
            Err(err) => {
                warn!(error = %err, "signup failed");
                self.signup_form
                    .set_error(err.server_message().unwrap_or("Something went wrong"));
            }
        }
    }

    pub(super) async fn persist_pin(&mut self, pin: String) {
        match self.client.set_pin(&pin).await {
            Ok(response) => {
                info!("PIN saved");
                self.status_message = response.message;
                self.setup.persist_succeeded();
            }
            Err(err) => {
                warn!(error = %err, "PIN save failed");
                if is_network_error(&err) {
                    self.setup.network_failed();
                } else {
                    self.setup.persist_failed(err.server_message());
                }
            }
        }
    }

    pub(super) async fn verify_pin(&mut self, code: String, now: Instant) {
        match self.client.verify_pin(&code).await {
            Ok(_) => {
                self.verify.verification_succeeded();
                self.cookies.mark_pin_verified();
                let target = self.verify.redirect_target().to_string();
                info!(target = %target, "PIN verified");
                self.navigate(&target).await;
            }
            Err(err) => {
                warn!(error = %err, "PIN verification failed");
                if is_network_error(&err) {
                    self.verify.network_failed();
                } else {
                    self.verify.verification_failed(err.server_message(), now);
                    self.bell_pending = true;
                }
            }
        }
    }

    pub(super) async fn lookup_recipient(&mut self) {
        let account = self
            .transfer
            .form
            .text_value(TRANSFER_RECIPIENT)
            .trim()
            .to_string();
        if account.is_empty() {
            self.transfer.form.set_error("Enter a recipient account number");
            return;
        }

        match self.client.lookup_account(&account).await {
            Ok(response) => {
                let full_name = response.full_name.unwrap_or(account);
                self.transfer.lookup = Some(RecipientLookup::Found { full_name });
            }
            Err(err) => {
                warn!(error = %err, "recipient lookup failed");
                let message = err
                    .server_message()
                    .unwrap_or("Error verifying account")
                    .to_string();
                self.transfer.lookup = Some(RecipientLookup::NotFound { message });
            }
        }
    }

    pub(super) async fn submit_transfer(&mut self) {
        let recipient = self
            .transfer
            .form
            .text_value(TRANSFER_RECIPIENT)
            .trim()
            .to_string();
        if recipient.is_empty() {
            self.transfer.form.set_error("Enter a recipient account number");
            return;
        }

        let amount_raw = self.transfer.form.text_value(TRANSFER_AMOUNT).trim();
        let Ok(amount) = Decimal::from_str(amount_raw) else {
            self.transfer.form.set_error("Enter a valid amount");
            return;
        };

        let note = self.transfer.form.text_value(TRANSFER_NOTE).trim().to_string();
        let note = (!note.is_empty()).then_some(note);
        let pin = self.transfer.form.text_value(TRANSFER_PIN).to_string();

        match self
            .client
            .submit_transaction(&recipient, amount, note.as_deref(), &pin)
            .await
        {
            Ok(receipt) => {
                info!(txn_id = %receipt.txn_id, "transfer accepted");
                self.transfer.receipt = Some(receipt);
                self.transfer.form.clear_values();
                self.transfer.form.clear_error();
            }
            Err(err) => {
                warn!(error = %err, "transfer failed");
                self.transfer.form.set_error(
                    err.server_message()
                        .unwrap_or("Network error. Please try again."),
                );
            }
        }
    }

    pub(super) async fn sign_out(&mut self) {
        self.client.logout();
        self.cookies.clear();
        self.dashboard = None;
        self.login_form = login_form();
        self.status_message = "signed out".to_string();
        self.navigate(routes::LOGIN).await;
    }

    pub(super) async fn run_setup_command(&mut self, command: SetupCommand) {
        match command {
            SetupCommand::PersistPin(pin) => self.persist_pin(pin).await,
            SetupCommand::NavigateHome => self.navigate(routes::HOME).await,
        }
    }

    /// Fire due flow deadlines; called every UI tick
    pub(super) async fn tick(&mut self, now: Instant) {
        if let Some(command) = self.setup.tick(now) {
            self.run_setup_command(command).await;
        }
        self.verify.tick(now);
    }
}

fn login_form() -> Form {
    Form::new(
        "Sign In",
        vec![
            text_input("Email"),
            masked_input("Password"),
            button("Sign In", FormAction::Submit),
        ],
    )
}

fn signup_form() -> Form {
    Form::new(
        "Create Account",
        vec![
            text_input("First name"),
            text_input("Last name"),
            text_input("Email"),
            masked_input("Password"),
            button("Create Account", FormAction::Submit),
        ],
    )
}

fn is_network_error(err: &DepayError) -> bool {
    matches!(err, DepayError::Http(_) | DepayError::Timeout { .. })
}
