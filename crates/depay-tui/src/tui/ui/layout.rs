/*
[INPUT]:  Current route and session identity
[OUTPUT]: Header bar rendered into Ratatui frame
[POS]:    TUI UI layout helpers
[UPDATE]: When header contents change
*/

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_header(
    frame: &mut ratatui::Frame,
    area: Rect,
    path: &str,
    session_email: Option<&str>,
) {
    let session = match session_email {
        Some(email) => format!("signed in as {email}"),
        None => "not signed in".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(" DePay ", header_style()),
        Span::raw("  "),
        Span::raw(path.to_string()),
        Span::raw("  |  "),
        Span::raw(session),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style()),
    );
    frame.render_widget(widget, area);
}
