/*
[INPUT]:  Loaded dashboard snapshot and full transaction list
[OUTPUT]: Account overview and transaction tables rendered into Ratatui frame
[POS]:    TUI UI dashboard screens rendering
[UPDATE]: When dashboard panels or transaction columns change
*/

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};

use depay_adapter::{Direction as TxDirection, TransactionRecord};

use crate::dashboard::DashboardData;
use crate::tui::runtime::{
    border_style, direction_style, format_decimal, format_timestamp, header_style,
};

pub(in crate::tui) fn draw_dashboard(frame: &mut ratatui::Frame, area: Rect, data: &DashboardData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(6)])
        .split(area);

    draw_account_summary(frame, layout[0], data);
    draw_transaction_table(
        frame,
        layout[1],
        "Recent Transactions",
        data.recent_transactions(),
        data.errors.transactions.as_deref(),
    );
}

fn draw_account_summary(frame: &mut ratatui::Frame, area: Rect, data: &DashboardData) {
    let mut lines = Vec::new();

    if let Some(error) = data.errors.account.as_ref() {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Yellow),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::raw("Balance "),
            Span::styled(
                format!("${}", format_decimal(data.total_balance, 2)),
                Style::default().fg(Color::LightGreen),
            ),
        ]));
        lines.push(Line::from(format!(
            "Account {}  |  {}",
            data.account_number, data.email
        )));
    }

    let title = if data.full_name.is_empty() {
        "Account".to_string()
    } else {
        format!("Account | {}", data.full_name)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(title);
    let widget = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub(in crate::tui) fn draw_transactions(
    frame: &mut ratatui::Frame,
    area: Rect,
    data: &DashboardData,
) {
    draw_transaction_table(
        frame,
        area,
        "Transactions",
        &data.transactions,
        data.errors.transactions.as_deref(),
    );
}

fn draw_transaction_table(
    frame: &mut ratatui::Frame,
    area: Rect,
    title: &str,
    transactions: &[TransactionRecord],
    error: Option<&str>,
) {
    let mut rows = Vec::new();
    for transaction in transactions {
        let direction = match transaction.direction {
            TxDirection::Received => "Received",
            TxDirection::Send => "Sent",
        };
        let amount = format!("{:>12}", format_decimal(transaction.amount, 2));
        rows.push(Row::new(vec![
            Cell::from(Span::styled(
                direction,
                direction_style(transaction.direction),
            )),
            Cell::from(transaction.counterparty().to_string()),
            Cell::from(amount),
            Cell::from(transaction.note.clone()),
            Cell::from(format_timestamp(&transaction.timestamp)),
        ]));
    }

    if rows.is_empty() {
        let placeholder = error.unwrap_or("No transactions yet");
        rows.push(Row::new(vec![
            Cell::from(placeholder.to_string()),
            Cell::from(""),
            Cell::from(""),
            Cell::from(""),
            Cell::from(""),
        ]));
    }

    let header = Row::new(vec![
        Cell::from("Direction"),
        Cell::from("Counterparty"),
        Cell::from("Amount"),
        Cell::from("Note"),
        Cell::from("Date"),
    ])
    .style(header_style());

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(20),
            Constraint::Length(12),
            Constraint::Min(12),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(title.to_string()),
    );
    frame.render_widget(table, area);
}
