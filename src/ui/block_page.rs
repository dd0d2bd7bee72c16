use super::helper::*;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block as Panel, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::provider::{Block, Transaction};
use crate::theme::Theme;

pub fn draw_block(frame: &mut Frame, app: &App, block: &Block, area: Rect) {
    let theme = &app.theme;
    let ticker = app.selected_chain().map(|c| c.ticker()).unwrap_or_default();

    let mut lines = vec![
        format_kv(theme, "Height", &format_number(block.height)),
        format_kv(theme, "Hash", &block.hash),
        format_kv(theme, "Timestamp", &format_timestamp(block.timestamp)),
        format_kv(theme, "Miner", &block.miner),
        format_kv(theme, "Difficulty", &format!("{:.2}", block.difficulty)),
        format_kv(theme, "Merkle Root", &block.merkle_root),
        format_kv(theme, "Nonce", &block.nonce.to_string()),
        format_kv(theme, "Bits", &block.bits),
        format_kv(theme, "Size", &format_kb(block.size)),
        format_kv(theme, "Transactions", &block.tx_count.to_string()),
    ];

    if let Some(chain) = app.selected_chain().filter(|c| !c.is_mainchain()) {
        lines.push(format_kv(theme, "Chain", &format!("{} (sidechain)", chain.display_name)));
    }

    let info_height = lines.len() as u16 + 2;
    let chunks = Layout::vertical([Constraint::Length(info_height), Constraint::Min(5)]).split(area);

    let info_block = Panel::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(format!(" 📦 Block #{} ", block.height));
    frame.render_widget(Paragraph::new(lines).block(info_block), chunks[0]);

    // Transaction list
    let tx_block = Panel::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(format!(" Transactions ({}) ", block.transactions.len()));

    if block.transactions.is_empty() {
        let empty_msg = Paragraph::new("No transactions in this block")
            .block(tx_block)
            .style(Style::default().fg(theme.muted));
        frame.render_widget(empty_msg, chunks[1]);
        return;
    }

    let visible_count = chunks[1].height.saturating_sub(3) as usize; // -2 borders, -1 header
    let start = scroll_start(app.selected_row, visible_count);

    let mut items: Vec<ListItem> = vec![list_header(
        theme,
        format!(
            "{:>4} {:<19}  {:<10} {:>6} {:>8} {:>4}  {:>18}  {:>12}",
            "#", "Tx ID", "Type", "Size", "Inputs", "Outs", "Total", "Fee"
        ),
    )];

    items.extend(
        block
            .transactions
            .iter()
            .enumerate()
            .skip(start)
            .take(visible_count)
            .map(|(i, tx)| format_tx_row(theme, i, tx, &ticker, i == app.selected_row)),
    );

    frame.render_widget(List::new(items).block(tx_block), chunks[1]);
}

fn format_tx_row<'a>(
    theme: &Theme,
    index: usize,
    tx: &Transaction,
    ticker: &str,
    selected: bool,
) -> ListItem<'a> {
    let type_color = match tx.type_label() {
        "Coinbase" => theme.value,
        "Deposit" => theme.deposit,
        "Withdrawal" => theme.withdrawal,
        _ => theme.text,
    };

    let inputs = if tx.is_coinbase {
        "Coinbase".to_string()
    } else {
        tx.input_count.to_string()
    };
    let fee = tx
        .fee
        .map(|f| format_coins(f, ticker))
        .unwrap_or_else(|| "-".to_string());

    let line = Line::from(vec![
        Span::styled(format!("{index:>4} "), Style::default().fg(theme.muted)),
        Span::styled(
            format!("{:<19}", truncate_hash(&tx.txid)),
            Style::default().fg(theme.accent),
        ),
        Span::raw("  "),
        Span::styled(format!("{:<10}", tx.type_label()), Style::default().fg(type_color)),
        Span::styled(format!(" {:>6}", tx.size), Style::default().fg(theme.text)),
        Span::styled(format!(" {inputs:>8}"), Style::default().fg(theme.text)),
        Span::styled(format!(" {:>4}", tx.output_count), Style::default().fg(theme.text)),
        Span::styled(
            format!("  {:>18}", format_coins(tx.total, ticker)),
            Style::default().fg(theme.value),
        ),
        Span::styled(format!("  {fee:>12}"), Style::default().fg(theme.muted)),
    ]);

    ListItem::new(line).style(row_style(theme, selected))
}
