/*
[INPUT]:  Form state, fields, and key events
[OUTPUT]: Form rendering output and form action results
[POS]:    TUI UI shared form framework
[UPDATE]: When adding field kinds or changing focus handling
*/

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::runtime::border_style;

pub(in crate::tui) struct Form {
    pub(in crate::tui) title: String,
    pub(in crate::tui) focus_index: usize,
    pub(in crate::tui) fields: Vec<Field>,
    pub(in crate::tui) error: Option<String>,
}

pub(in crate::tui) enum Field {
    TextInput {
        label: String,
        value: String,
        masked: bool,
    },
    Button {
        label: String,
        action: FormAction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui) enum FormAction {
    Submit,
    /// Second button on forms that have one (e.g. recipient lookup)
    Secondary,
    None,
}

impl Form {
    pub(in crate::tui) fn new(title: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            title: title.into(),
            focus_index: 0,
            fields,
            error: None,
        }
    }

    pub(in crate::tui) fn text_value(&self, index: usize) -> &str {
        match self.fields.get(index) {
            Some(Field::TextInput { value, .. }) => value.as_str(),
            _ => "",
        }
    }

    pub(in crate::tui) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub(in crate::tui) fn clear_error(&mut self) {
        self.error = None;
    }

    pub(in crate::tui) fn clear_values(&mut self) {
        for field in &mut self.fields {
            if let Field::TextInput { value, .. } = field {
                value.clear();
            }
        }
        self.focus_index = 0;
    }
}

pub(in crate::tui) fn text_input(label: &str) -> Field {
    Field::TextInput {
        label: label.to_string(),
        value: String::new(),
        masked: false,
    }
}

pub(in crate::tui) fn masked_input(label: &str) -> Field {
    Field::TextInput {
        label: label.to_string(),
        value: String::new(),
        masked: true,
    }
}

pub(in crate::tui) fn button(label: &str, action: FormAction) -> Field {
    Field::Button {
        label: label.to_string(),
        action,
    }
}

/// Route a key into the form
///
/// Typing edits the focused text field; Enter on a button returns its
/// action, Enter elsewhere advances focus like Tab.
pub(in crate::tui) fn handle_form_key(form: &mut Form, key: KeyCode) -> FormAction {
    match key {
        KeyCode::Tab | KeyCode::Down => {
            if !form.fields.is_empty() {
                form.focus_index = (form.focus_index + 1) % form.fields.len();
            }
            FormAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            if !form.fields.is_empty() {
                form.focus_index = form
                    .focus_index
                    .checked_sub(1)
                    .unwrap_or(form.fields.len() - 1);
            }
            FormAction::None
        }
        KeyCode::Backspace => {
            if let Some(Field::TextInput { value, .. }) = form.fields.get_mut(form.focus_index) {
                value.pop();
                form.clear_error();
            }
            FormAction::None
        }
        KeyCode::Char(ch) => {
            if let Some(Field::TextInput { value, .. }) = form.fields.get_mut(form.focus_index) {
                value.push(ch);
                form.clear_error();
            }
            FormAction::None
        }
        KeyCode::Enter => {
            if let Some(Field::Button { action, .. }) = form.fields.get(form.focus_index) {
                return *action;
            }
            if !form.fields.is_empty() {
                form.focus_index = (form.focus_index + 1) % form.fields.len();
            }
            FormAction::None
        }
        _ => FormAction::None,
    }
}

pub(in crate::tui) fn draw_form(frame: &mut ratatui::Frame, area: Rect, form: &Form) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(form.title.as_str());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let content = match field {
                Field::TextInput {
                    label,
                    value,
                    masked,
                } => {
                    let shown = if *masked {
                        "*".repeat(value.chars().count())
                    } else {
                        value.clone()
                    };
                    format!("{label}: {shown}")
                }
                Field::Button { label, .. } => format!("[{label}]"),
            };
            let style = if index == form.focus_index {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(Span::styled(content, style))
        })
        .collect();

    if let Some(error) = form.error.as_ref() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::LightRed),
        )));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}
