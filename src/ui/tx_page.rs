use super::helper::*;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::provider::{CrossChainType, TxDetail, TxInput};

const WITHDRAWAL_NOTE: &str = "Waiting for 51% of hashpower for mainchain inclusion";

pub fn draw_tx(frame: &mut Frame, app: &App, detail: &TxDetail, area: Rect) {
    let theme = &app.theme;
    let tx = &detail.tx;
    let chain_name = app
        .selected_chain()
        .map(|c| c.display_name.clone())
        .unwrap_or_default();
    let ticker = app.selected_chain().map(|c| c.ticker()).unwrap_or_default();

    // Links are numbered in the same order the app navigates them
    let mut link_idx = 0;
    let mut selected_line = 0;

    let mut lines = vec![format_kv(theme, "Transaction ID", &tx.txid)];

    if app.selected_row == link_idx {
        selected_line = lines.len();
    }
    lines.push(format_kv_link(
        theme,
        "Block",
        &format!("#{}", format_number(detail.block_height)),
        app.selected_row == link_idx,
    ));
    link_idx += 1;

    lines.push(format_kv(theme, "Timestamp", &format_timestamp(detail.timestamp)));
    lines.push(Line::from(vec![
        Span::styled("Status: ", Style::default().fg(theme.muted)),
        Span::styled("Confirmed", Style::default().fg(theme.success)),
    ]));
    lines.push(format_kv(theme, "Type", tx.type_label()));
    lines.push(format_kv(theme, "Size", &format!("{} bytes", tx.size)));
    lines.push(format_kv(
        theme,
        "Fee",
        &tx.fee
            .map(|f| format_coins(f, &ticker))
            .unwrap_or_else(|| "-".to_string()),
    ));
    lines.push(format_kv(
        theme,
        "Inputs / Outputs",
        &format!("{} / {}", detail.inputs.len(), detail.outputs.len()),
    ));
    lines.push(format_kv(theme, "Total", &format_coins(tx.total, &ticker)));

    // Cross-chain details
    if let Some(cc) = &tx.cross_chain {
        let (direction, color) = match cc.kind {
            CrossChainType::Deposit => ("Deposit from Mainchain to Sidechain", theme.deposit),
            CrossChainType::Withdrawal => {
                ("Withdrawal from Sidechain to Mainchain", theme.withdrawal)
            }
        };
        let (from, to) = cross_chain_route(cc.kind, "Bitcoin", &chain_name);

        lines.push(Line::from(""));
        lines.push(section_title(theme, "Cross-Chain Details"));
        lines.push(Line::from(Span::styled(
            direction,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(format_kv(theme, "From Chain", &from));
        lines.push(format_kv(theme, "To Chain", &to));
        if cc.kind == CrossChainType::Withdrawal {
            lines.push(Line::from(Span::styled(
                WITHDRAWAL_NOTE,
                Style::default().fg(theme.warning),
            )));
        }
    }

    // Inputs
    lines.push(Line::from(""));
    lines.push(section_title(theme, &format!("Inputs ({})", detail.inputs.len())));
    for input in &detail.inputs {
        match input {
            TxInput::Coinbase { script } => {
                lines.push(format_kv(theme, "Coinbase", script));
            }
            TxInput::Spend {
                address,
                prev_txid,
                vout,
            } => {
                let selected = app.selected_row == link_idx;
                if selected {
                    selected_line = lines.len();
                }
                lines.push(format_kv_link(theme, "Address", address, selected));
                lines.push(Line::from(Span::styled(
                    format!("  ← {}:{vout}", truncate_hash(prev_txid)),
                    Style::default().fg(theme.muted),
                )));
                link_idx += 1;
            }
        }
    }

    // Outputs
    lines.push(Line::from(""));
    lines.push(section_title(theme, &format!("Outputs ({})", detail.outputs.len())));
    for (i, output) in detail.outputs.iter().enumerate() {
        let selected = app.selected_row == link_idx;
        if selected {
            selected_line = lines.len();
        }
        lines.push(format_kv_link(theme, &format!("#{i}"), &output.address, selected));
        lines.push(Line::from(vec![
            Span::styled(format!("  {}  ", output.script_type), Style::default().fg(theme.muted)),
            Span::styled(
                format_coins(output.amount, &ticker),
                Style::default().fg(theme.value),
            ),
        ]));
        link_idx += 1;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(format!(" 📄 Transaction ({}) ", tx.type_label()));

    // Keep the selected link on screen
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = if selected_line >= visible {
        selected_line + 2 - visible
    } else {
        0
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
