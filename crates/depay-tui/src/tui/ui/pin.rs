/*
[INPUT]:  PIN setup/verify flow state
[OUTPUT]: PIN entry screens rendered into Ratatui frame
[POS]:    TUI UI PIN screens rendering
[UPDATE]: When PIN screen layout or feedback cues change
*/

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::pin::{PinEntry, SetupFlow, SetupStep, VerifyFlow};
use crate::tui::runtime::border_style;

fn entry_line(entry: &PinEntry, shaking: bool) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, digit) in entry.digits().iter().enumerate() {
        let cell = match digit {
            Some(_) => "[*]".to_string(),
            None => "[ ]".to_string(),
        };
        let mut style = if shaking {
            Style::default().fg(Color::LightRed)
        } else {
            Style::default()
        };
        if index == entry.focus() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(cell, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn error_line(error: &str) -> Line<'static> {
    Line::from(Span::styled(
        error.to_string(),
        Style::default().fg(Color::LightRed),
    ))
}

pub(in crate::tui) fn draw_pin_setup(frame: &mut ratatui::Frame, area: Rect, flow: &SetupFlow) {
    frame.render_widget(Clear, area);

    let title = match flow.step() {
        SetupStep::Create => "Create PIN",
        SetupStep::Confirm => "Confirm PIN",
        SetupStep::Success => "PIN Set",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    match flow.step() {
        SetupStep::Create => {
            lines.push(Line::from("Choose a 4-digit PIN"));
            lines.push(Line::from(""));
            lines.push(entry_line(flow.create_entry(), false));
        }
        SetupStep::Confirm => {
            lines.push(Line::from("Re-enter your PIN to confirm"));
            lines.push(Line::from(""));
            lines.push(entry_line(flow.confirm_entry(), false));
        }
        SetupStep::Success => {
            lines.push(Line::from(Span::styled(
                "PIN successfully set",
                Style::default().fg(Color::LightGreen),
            )));
            lines.push(Line::from(""));
            let prefs = flow.preferences();
            lines.push(pref_line(
                "[t] Require PIN for transactions",
                prefs.pin_for_transactions,
            ));
            lines.push(pref_line("[l] Require PIN for login", prefs.pin_for_login));
            if let Some(biometric) = prefs.biometric_enabled {
                lines.push(pref_line("[b] Biometric unlock", biometric));
            }
        }
    }

    if flow.is_persisting() {
        lines.push(Line::from(""));
        lines.push(Line::from("Saving PIN..."));
    }
    if let Some(error) = flow.error() {
        lines.push(Line::from(""));
        lines.push(error_line(error));
    }

    lines.push(Line::from(""));
    let hint = match flow.step() {
        SetupStep::Create => "[0-9] Type  [Backspace] Erase  [c] Reset  [Esc] Back",
        SetupStep::Confirm => "[0-9] Type  [Backspace] Erase  [c] Reset  [Esc] Back",
        SetupStep::Success => "[Enter] Done  [c] Change PIN",
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    frame.render_widget(widget, inner);
}

fn pref_line(label: &str, enabled: bool) -> Line<'static> {
    let state = if enabled { "on" } else { "off" };
    let state_style = if enabled {
        Style::default().fg(Color::LightGreen)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::raw(format!("{label}: ")),
        Span::styled(state.to_string(), state_style),
    ])
}

pub(in crate::tui) fn draw_pin_verify(frame: &mut ratatui::Frame, area: Rect, flow: &VerifyFlow) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Verify PIN");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    lines.push(Line::from("Enter your PIN to continue"));
    lines.push(Line::from(Span::styled(
        format!("Continuing to {}", flow.redirect_target()),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(entry_line(flow.entry(), flow.is_shaking()));

    if flow.is_verifying() {
        lines.push(Line::from(""));
        lines.push(Line::from("Verifying..."));
    }
    if let Some(error) = flow.error() {
        lines.push(Line::from(""));
        lines.push(error_line(error));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[0-9] Type  [Backspace] Erase  [Enter] Submit  [c] Reset",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    frame.render_widget(widget, inner);
}
