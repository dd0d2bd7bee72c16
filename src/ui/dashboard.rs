use super::helper::*;

use chrono::Utc;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::provider::{ChainInfo, ChainStats, CrossChainType};

const RECENT_CROSS_CHAIN: usize = 5;

pub fn draw_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(13), // Info panels
        Constraint::Min(6),     // Blocks + cross-chain
        Constraint::Length(1),  // Footer
    ])
    .split(area);

    let panels = Layout::horizontal([
        Constraint::Percentage(33),
        Constraint::Percentage(34),
        Constraint::Percentage(33),
    ])
    .split(chunks[0]);

    draw_chain_info(frame, app, panels[0]);
    draw_chain_stats(frame, app, panels[1]);
    draw_cross_chain_info(frame, app, panels[2]);

    let lists = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_latest_blocks(frame, app, lists[0]);
    draw_recent_cross_chain(frame, app, lists[1]);

    draw_footer(frame, app, chunks[2]);
}

fn panel<'a>(app: &App, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent))
        .title(title)
}

/// Placeholder shown while a slice is missing
fn pending_line(app: &App, loading: bool) -> Line<'static> {
    let text = if loading { "Loading..." } else { "No data" };
    Line::from(Span::styled(text, Style::default().fg(app.theme.muted)))
}

fn draw_chain_info(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match &app.chain_info {
        Some(info) => chain_info_lines(app, info),
        None => vec![pending_line(app, app.loading.chain_info)],
    };

    frame.render_widget(
        Paragraph::new(lines).block(panel(app, " ℹ Chain Info ")),
        area,
    );
}

fn chain_info_lines(app: &App, info: &ChainInfo) -> Vec<Line<'static>> {
    let theme = &app.theme;
    vec![
        format_kv(theme, "Name", &info.name),
        format_kv(theme, "Version", &info.version),
        format_kv(theme, "Protocol", &info.protocol_version.to_string()),
        format_kv(theme, "Type", info.kind.as_str()),
        format_kv(theme, "Height", &format_number(info.blocks)),
        format_kv(theme, "Connections", &info.connections.to_string()),
        format_kv(theme, "Difficulty", &format!("{:.2}", info.difficulty)),
        format_kv(theme, "Syncing", if info.is_syncing { "yes" } else { "no" }),
    ]
}

fn draw_chain_stats(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match &app.stats {
        Some(stats) => stats_lines(app, stats),
        None => vec![pending_line(app, app.loading.stats)],
    };

    frame.render_widget(
        Paragraph::new(lines).block(panel(app, " 📊 Chain Statistics ")),
        area,
    );
}

fn stats_lines(app: &App, stats: &ChainStats) -> Vec<Line<'static>> {
    let theme = &app.theme;
    vec![
        format_kv(theme, "Blocks", &format_number(stats.blocks)),
        format_kv(theme, "Transactions", &format_number(stats.transactions)),
        format_kv(theme, "Mainchain Height", &format_number(stats.mainchain_height)),
        format_kv(theme, "Peers", &stats.peer_count.to_string()),
        format_kv(theme, "Hash Rate", &stats.hash_rate),
        format_kv(theme, "Avg Block Time", &stats.average_block_time),
        format_kv(theme, "Mempool", &format!("{} txs", stats.mempool_size)),
        format_kv(theme, "Total Coins", &stats.total_coins),
        format_kv(theme, "Chain Size", &stats.chain_size),
        format_kv(theme, "Last Updated", &format_timestamp(stats.last_updated)),
    ]
}

fn draw_cross_chain_info(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let lines = match &app.chain_info {
        Some(info) => match &info.sidechain {
            Some(summary) => vec![
                format_kv(theme, "Chain Type", "Sidechain"),
                format_kv(
                    theme,
                    "Parent Height",
                    &format_number(summary.parent_chain_height),
                ),
                format_kv(theme, "Total Deposits", &summary.deposits.to_string()),
                format_kv(theme, "Total Withdrawals", &summary.withdrawals.to_string()),
                Line::from(vec![
                    Span::styled("Pending Withdrawals: ", Style::default().fg(theme.muted)),
                    Span::styled(
                        summary.pending_withdrawals.to_string(),
                        Style::default().fg(theme.warning),
                    ),
                ]),
            ],
            None => {
                let mut lines = vec![
                    format_kv(theme, "Chain Type", "Mainchain"),
                    Line::from(""),
                    section_title(theme, "Sidechains"),
                ];
                lines.extend(
                    app.chains
                        .iter()
                        .filter(|c| !c.is_mainchain())
                        .map(|c| {
                            Line::from(vec![
                                Span::styled("● ", Style::default().fg(theme.success)),
                                Span::styled(chain_label(c), Style::default().fg(theme.text)),
                            ])
                        }),
                );
                lines
            }
        },
        None => vec![pending_line(app, app.loading.chain_info)],
    };

    frame.render_widget(
        Paragraph::new(lines).block(panel(app, " ⇄ Cross-Chain Info ")),
        area,
    );
}

fn draw_latest_blocks(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let blocks = app.blocks_on_page();
    let block = panel(app, " 🧱 Latest Blocks ");

    if blocks.is_empty() {
        let msg = if app.loading.blocks {
            "Loading blocks..."
        } else {
            "No blocks on this page"
        };
        let empty = Paragraph::new(msg)
            .block(block)
            .style(Style::default().fg(theme.muted));
        frame.render_widget(empty, area);
        return;
    }

    let now = Utc::now();
    let visible_count = area.height.saturating_sub(3) as usize; // -2 borders, -1 header
    let start = scroll_start(app.selected_row, visible_count);

    let mut items: Vec<ListItem> = vec![list_header(
        theme,
        format!(
            "{:>9}  {:<19}  {:>14}  {:>4}  {:>10}",
            "Height", "Hash", "Age", "Txs", "Size"
        ),
    )];

    items.extend(
        blocks
            .iter()
            .enumerate()
            .skip(start)
            .take(visible_count)
            .map(|(i, b)| {
                let line = Line::from(vec![
                    Span::styled(format!("{:>9}", b.height), Style::default().fg(theme.accent)),
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<19}", truncate_hash(&b.hash)),
                        Style::default().fg(theme.text),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("{:>14}", format_age(b.timestamp, now)),
                        Style::default().fg(theme.muted),
                    ),
                    Span::raw("  "),
                    Span::styled(format!("{:>4}", b.tx_count), Style::default().fg(theme.value)),
                    Span::raw("  "),
                    Span::styled(format!("{:>10}", format_kb(b.size)), Style::default().fg(theme.text)),
                ]);
                ListItem::new(line).style(row_style(theme, i == app.selected_row))
            }),
    );

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_recent_cross_chain(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = panel(app, " ⇄ Recent Cross-Chain Transactions ");
    let txs = recent_cross_chain(&app.blocks, RECENT_CROSS_CHAIN);

    if txs.is_empty() {
        let msg = if app.loading.blocks {
            "Loading..."
        } else {
            "No cross-chain transactions found"
        };
        let empty = Paragraph::new(msg)
            .block(block)
            .style(Style::default().fg(theme.muted));
        frame.render_widget(empty, area);
        return;
    }

    let ticker = app
        .selected_chain()
        .map(|c| c.ticker())
        .unwrap_or_default();

    let mut lines = Vec::new();
    for tx in txs {
        let Some(cc) = &tx.cross_chain else {
            continue;
        };
        let (from, to) = cross_chain_route(cc.kind, "Bitcoin", &cc.target);
        let (color, unit) = match cc.kind {
            CrossChainType::Deposit => (theme.deposit, "BTC"),
            CrossChainType::Withdrawal => (theme.withdrawal, ticker.as_str()),
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", cc.kind.as_str()), Style::default().fg(color)),
            Span::styled(truncate_hash(&tx.txid), Style::default().fg(theme.text)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{from} → {to}  "), Style::default().fg(theme.muted)),
            Span::styled(format_coins(tx.total, unit), Style::default().fg(theme.value)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut spans = vec![Span::styled(
        format!("Page {}", app.page),
        Style::default().fg(theme.text),
    )];
    if let Some(stats) = &app.stats {
        spans.push(Span::styled(
            format!("  •  Updated {}", stats.last_updated.format("%H:%M:%S")),
            Style::default().fg(theme.muted),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
