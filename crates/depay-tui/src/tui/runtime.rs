/*
[INPUT]:  DePay HTTP client, configured credentials, log buffer, and key events
[OUTPUT]: Ratatui-based TUI run loop, rendering, and log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
[UPDATE]: 2026-02-09 Extract TerminalGuard into terminal.rs and add tui module layout
[UPDATE]: 2026-02-10 Move runtime logic out of tui/mod.rs
[UPDATE]: 2026-08-14 Dispatch rendering per screen instead of per tab
[UPDATE]: 2026-08-15 Ring the terminal bell on rejected PIN checks
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::fmt::MakeWriter;

use depay_adapter::{DepayClient, Direction as TxDirection};

use super::app::{AppState, Screen};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::form::draw_form;
use super::ui::*;
use crate::config::AccountConfig;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let chunk = String::from_utf8_lossy(buf);
        self.partial.push_str(&chunk);
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial = self.partial[pos + 1..].to_string();
            let buffer = self.buffer.clone();
            let mut guard = buffer.lock().expect("log buffer lock");
            guard.push_line(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            let buffer = self.buffer.clone();
            let mut guard = buffer.lock().expect("log buffer lock");
            guard.push_line(line);
        }
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

enum UiEvent {
    Input(CrosstermEvent),
}

pub async fn run_tui_with_log(
    client: DepayClient,
    account: Option<AccountConfig>,
    biometric_available: bool,
    log_buffer: LogBufferHandle,
) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = event_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let mut app = AppState::new(client, biometric_available, log_buffer);
    if let Some(account) = account {
        app.auto_login(&account.email, &account.password).await;
    }

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {
                app.tick(Instant::now()).await;
            }
            maybe_event = event_rx.recv() => {
                if let Some(event) = maybe_event {
                    match event {
                        UiEvent::Input(CrosstermEvent::Key(key)) => {
                            if handle_key_event(&mut app, key.code).await {
                                should_quit = true;
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.take_bell() {
            terminal.bell();
        }
        terminal.draw(|frame| draw_ui(frame, &app))?;
    }

    input_shutdown.cancel();
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(4),
        ])
        .split(area);

    let email = app.session_email();
    draw_header(frame, layout[0], &app.path, email.as_deref());

    let content = layout[1];
    match app.screen {
        Screen::Home => draw_home(frame, content, app),
        Screen::Login => draw_form(frame, centered_rect(content, 50, 60), &app.login_form),
        Screen::Signup => draw_form(frame, centered_rect(content, 50, 80), &app.signup_form),
        Screen::SetPin => draw_pin_setup(frame, centered_rect(content, 60, 80), &app.setup),
        Screen::VerifyPin => draw_pin_verify(frame, centered_rect(content, 60, 70), &app.verify),
        Screen::Dashboard => match app.dashboard.as_ref() {
            Some(data) => draw_dashboard(frame, content, data),
            None => draw_loading(frame, content),
        },
        Screen::Transactions => match app.dashboard.as_ref() {
            Some(data) => draw_transactions(frame, content, data),
            None => draw_loading(frame, content),
        },
        Screen::Transfer => draw_transfer(frame, content, &app.transfer),
        Screen::Logs => draw_logs(frame, content, &app.log_buffer),
    }

    draw_footer(frame, layout[2], app);
}

fn draw_home(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let greeting = match app.dashboard.as_ref() {
        Some(data) if !data.name.is_empty() => format!("Welcome back, {}", data.name),
        _ => String::from("Welcome to DePay"),
    };
    let text = format!("{greeting}\n\nPress [d] to open your dashboard or [p] to send money.");

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("DePay");
    let widget = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn draw_loading(frame: &mut ratatui::Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Account");
    let widget = Paragraph::new("Loading account data...")
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn hint_line(pairs: &[(&str, &str)]) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    for (key, label) in pairs {
        spans.push(Span::styled(format!("[{key}]"), key_style));
        spans.push(Span::raw(format!(" {label}  ")));
    }
    Line::from(spans)
}

pub(super) fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let hints: &[(&str, &str)] = match app.screen {
        Screen::Home => &[
            ("d", "Dashboard"),
            ("t", "Transactions"),
            ("p", "Send Money"),
            ("g", "Logs"),
            ("o", "Sign Out"),
            ("q", "Quit"),
        ],
        Screen::Login => &[
            ("Tab", "Next field"),
            ("Enter", "Activate"),
            ("Esc", "Create account"),
        ],
        Screen::Signup => &[
            ("Tab", "Next field"),
            ("Enter", "Activate"),
            ("Esc", "Sign in"),
        ],
        Screen::SetPin => &[
            ("0-9", "Type"),
            ("Backspace", "Erase"),
            ("c", "Start over"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ],
        Screen::VerifyPin => &[
            ("0-9", "Type"),
            ("Enter", "Submit"),
            ("c", "Clear"),
            ("Esc", "Home"),
            ("q", "Quit"),
        ],
        Screen::Dashboard => &[
            ("r", "Refresh"),
            ("t", "Transactions"),
            ("p", "Send Money"),
            ("g", "Logs"),
            ("o", "Sign Out"),
            ("Esc", "Home"),
            ("q", "Quit"),
        ],
        Screen::Transactions => &[
            ("r", "Refresh"),
            ("g", "Logs"),
            ("Esc", "Dashboard"),
            ("q", "Quit"),
        ],
        Screen::Transfer => &[
            ("Tab", "Next field"),
            ("Enter", "Activate"),
            ("Esc", "Home"),
        ],
        Screen::Logs => &[("Esc", "Back"), ("q", "Quit")],
    };

    let line1 = hint_line(hints);
    let line2 = Line::from(format!("Status: {}", app.status_message));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![line1, line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn direction_style(direction: TxDirection) -> Style {
    match direction {
        TxDirection::Received => Style::default().fg(Color::LightGreen),
        TxDirection::Send => Style::default().fg(Color::LightRed),
    }
}

pub(crate) fn format_decimal(value: Decimal, scale: u32) -> String {
    let mut rounded = value.round_dp(scale);
    rounded.rescale(scale);
    rounded.to_string()
}

/// Render a server GMT timestamp in compact form
///
/// The history endpoint sends RFC 2822 strings. Anything that fails to
/// parse is shown unchanged.
pub(crate) fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc2822(raw) {
        Ok(parsed) => parsed.format("%d %b %Y, %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
