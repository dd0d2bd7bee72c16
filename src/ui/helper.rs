use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::chain::Chain;
use crate::provider::{Block, CrossChainType, Transaction, COIN};
use crate::theme::Theme;

// ============================================================================
// Helper Functions
// ============================================================================

pub fn truncate_hash(hash: &str) -> String {
    if hash.len() > 20 {
        format!("{}...{}", &hash[..10], &hash[hash.len() - 6..])
    } else {
        hash.to_string()
    }
}

/// Base units as a coin amount with 8 decimals
pub fn format_coins(units: u64, ticker: &str) -> String {
    format!("{}.{:08} {ticker}", units / COIN, units % COIN)
}

/// Signed amount for address history, `+` when received
pub fn format_signed_coins(units: i64, ticker: &str) -> String {
    let sign = if units < 0 { '-' } else { '+' };
    format!("{sign}{}", format_coins(units.unsigned_abs(), ticker))
}

/// Group digits in thousands: 789241 -> 789,241
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

pub fn format_age(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs_ago = (now - ts).num_seconds().max(0);

    if secs_ago < 60 {
        format!("{secs_ago} secs ago")
    } else if secs_ago < 3600 {
        format!("{} mins ago", secs_ago / 60)
    } else if secs_ago < 86400 {
        format!("{} hours ago", secs_ago / 3600)
    } else {
        format!("{} days ago", secs_ago / 86400)
    }
}

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Source and destination chain names of a peg transaction
pub fn cross_chain_route(kind: CrossChainType, mainchain: &str, sidechain: &str) -> (String, String) {
    match kind {
        CrossChainType::Deposit => (mainchain.to_string(), sidechain.to_string()),
        CrossChainType::Withdrawal => (sidechain.to_string(), mainchain.to_string()),
    }
}

/// First `limit` cross-chain transactions across the first ten loaded blocks
pub fn recent_cross_chain(blocks: &[Block], limit: usize) -> Vec<&Transaction> {
    blocks
        .iter()
        .take(10)
        .flat_map(|b| b.transactions.iter())
        .filter(|tx| tx.cross_chain.is_some())
        .take(limit)
        .collect()
}

pub fn chain_label(chain: &Chain) -> String {
    format!("{} ({})", chain.display_name, chain.status.as_str())
}

pub fn format_kv(theme: &Theme, key: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(theme.muted)),
        Span::styled(value.to_string(), Style::default().fg(theme.text)),
    ])
}

pub fn format_kv_link(theme: &Theme, key: &str, value: &str, selected: bool) -> Line<'static> {
    let style = if selected {
        Style::default()
            .fg(theme.highlight_fg)
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::UNDERLINED)
    };

    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(theme.muted)),
        Span::styled(value.to_string(), style),
    ])
}

pub fn section_title(theme: &Theme, title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("── {title} ──"),
        Style::default().fg(theme.muted),
    ))
}

pub fn list_header<'a>(theme: &Theme, text: String) -> ListItem<'a> {
    ListItem::new(Line::from(Span::styled(text, Style::default().fg(theme.muted))))
}

pub fn row_style(theme: &Theme, selected: bool) -> Style {
    if selected {
        Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg)
    } else {
        Style::default()
    }
}

/// Offset that keeps the selected row inside a window of `visible` rows
pub fn scroll_start(selected: usize, visible: usize) -> usize {
    selected.saturating_sub(visible / 2)
}

pub fn padded_rect(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y + padding,
        width: area.width.saturating_sub(padding * 2),
        height: area.height.saturating_sub(padding * 2),
    }
}
