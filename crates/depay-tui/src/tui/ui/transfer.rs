/*
[INPUT]:  Transfer form state, recipient lookup result, and receipt
[OUTPUT]: Send-money screen rendered into Ratatui frame
[POS]:    TUI UI transfer screen rendering
[UPDATE]: When transfer fields or receipt contents change
*/

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::app::{RecipientLookup, TransferState};
use crate::tui::runtime::border_style;
use crate::tui::ui::form::draw_form;

pub(in crate::tui) fn draw_transfer(frame: &mut ratatui::Frame, area: Rect, state: &TransferState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(6)])
        .split(area);

    draw_form(frame, layout[0], &state.form);
    draw_transfer_status(frame, layout[1], state);
}

fn draw_transfer_status(frame: &mut ratatui::Frame, area: Rect, state: &TransferState) {
    let mut lines = Vec::new();

    match state.lookup.as_ref() {
        Some(RecipientLookup::Found { full_name }) => {
            lines.push(Line::from(vec![
                Span::raw("Recipient: "),
                Span::styled(full_name.clone(), Style::default().fg(Color::LightGreen)),
            ]));
        }
        Some(RecipientLookup::NotFound { message }) => {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::LightRed),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Look up the recipient before sending",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    if let Some(receipt) = state.receipt.as_ref() {
        lines.push(Line::from(Span::styled(
            receipt.message.clone(),
            Style::default().fg(Color::LightGreen),
        )));
        lines.push(Line::from(format!(
            "Txn {} at {}",
            receipt.txn_id, receipt.time
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Status");
    let widget = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
