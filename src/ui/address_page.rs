use super::helper::*;

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::provider::AddressRecord;

pub fn draw_address(frame: &mut Frame, app: &App, record: &AddressRecord, area: Rect) {
    let theme = &app.theme;
    let ticker = app.selected_chain().map(|c| c.ticker()).unwrap_or_default();

    let lines = vec![
        format_kv(theme, "Address", &record.address),
        Line::from(""),
        format_kv(theme, "Balance", &format_coins(record.balance, &ticker)),
        format_kv(
            theme,
            "Total Received",
            &format_coins(record.total_received, &ticker),
        ),
        format_kv(theme, "Total Sent", &format_coins(record.total_sent, &ticker)),
        format_kv(theme, "Transactions", &record.tx_count.to_string()),
    ];

    let chunks = Layout::vertical([
        Constraint::Length(lines.len() as u16 + 2),
        Constraint::Min(4),
    ])
    .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(" 👤 Address ");
    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let history_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted))
        .title(" Recent Transactions ");

    let now = Utc::now();
    let mut items: Vec<ListItem> = vec![list_header(
        theme,
        format!(
            "{:<19}  {:>14}  {:>20}  {:>6}  {:>9}",
            "Tx ID", "Age", "Amount", "Conf", "Block"
        ),
    )];

    items.extend(record.transactions.iter().map(|t| {
        let amount_color = if t.amount < 0 {
            theme.withdrawal
        } else {
            theme.deposit
        };
        ListItem::new(Line::from(vec![
            Span::styled(
                format!("{:<19}", truncate_hash(&t.txid)),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                format!("  {:>14}", format_age(t.timestamp, now)),
                Style::default().fg(theme.muted),
            ),
            Span::styled(
                format!("  {:>20}", format_signed_coins(t.amount, &ticker)),
                Style::default().fg(amount_color),
            ),
            Span::styled(format!("  {:>6}", t.confirmations), Style::default().fg(theme.text)),
            Span::styled(format!("  {:>9}", t.block_height), Style::default().fg(theme.text)),
        ]))
    }));

    frame.render_widget(List::new(items).block(history_block), chunks[1]);
}
