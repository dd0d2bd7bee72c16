mod address_page;
mod block_page;
mod dashboard;
mod helper;
mod tx_page;

pub use helper::{format_coins, format_number, truncate_hash};

use address_page::draw_address;
use block_page::draw_block;
use dashboard::draw_dashboard;
use helper::*;
use tx_page::draw_tx;

use chrono::Utc;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Selection, View};
use crate::chain::ChainStatus;

const NAV_HELP: &str =
    "/ search • ↑↓ navigate • Enter open • n/p page • c/C chain • r refresh • q quit";
const NAV_HELP_DETAIL: &str =
    "/ search • ↑↓ navigate • Enter open • d dashboard • c/C chain • q quit";
const NAV_HELP_NO_LIST: &str = "/ search • d dashboard • c/C chain • q quit";
const SEARCH_HELP: &str = "Enter search • ↑↓ history • Del remove • Esc cancel";

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const HISTORY_ROWS: usize = 5;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = padded_rect(frame.area(), 1);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Chain + search
        Constraint::Length(1), // Breadcrumb
        Constraint::Length(1), // Error / loading
        Constraint::Min(0),    // View
        Constraint::Length(1), // Help
    ])
    .split(area);

    draw_top_bar(frame, app, chunks[0]);
    draw_breadcrumb(frame, app, chunks[1]);
    draw_status_line(frame, app, chunks[2]);

    match (app.view(), app.selection()) {
        (View::Block, Selection::Block(block)) => draw_block(frame, app, block, chunks[3]),
        (View::Transaction, Selection::Transaction(detail)) => {
            draw_tx(frame, app, detail, chunks[3])
        }
        (View::Address, Selection::Address(record)) => draw_address(frame, app, record, chunks[3]),
        _ => draw_dashboard(frame, app, chunks[3]),
    }

    draw_help(frame, app, chunks[4]);

    if app.search_focused && !app.get_recent_searches().is_empty() {
        let search_area = top_bar_layout(chunks[0])[1];
        draw_history_list(frame, app, search_area);
    }
}

fn top_bar_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)]).split(area)
}

fn draw_top_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let chunks = top_bar_layout(area);

    let chain_line = match app.selected_chain() {
        Some(chain) => Line::from(vec![
            Span::styled(chain.display_name.clone(), Style::default().fg(theme.text).bold()),
            Span::raw(" "),
            Span::styled(
                format!("({})", chain.status.as_str()),
                Style::default().fg(status_color(app, chain.status)),
            ),
        ]),
        None => Line::from(Span::styled("No chain", Style::default().fg(theme.muted))),
    };

    let chain_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted))
        .title(" ⛓ Chain ");
    frame.render_widget(Paragraph::new(chain_line).block(chain_block), chunks[0]);

    draw_search_bar(frame, app, chunks[1]);
}

fn status_color(app: &App, status: ChainStatus) -> Color {
    match status {
        ChainStatus::Running => app.theme.success,
        ChainStatus::Starting | ChainStatus::Stopping => app.theme.warning,
        ChainStatus::Error => app.theme.error,
    }
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let selected = app.search_focused && app.selected_history_index.is_none();
    let border_color = if app.search_focused {
        theme.accent
    } else {
        theme.muted
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" 🔍 Search ")
        .title_style(Style::default().fg(border_color));

    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = app.search_input.visual_scroll(inner_width);

    let display_text = if app.search_input.value().is_empty() {
        Span::styled(
            "Search by Block Height / Tx ID / Block Hash / Address",
            Style::default().fg(theme.muted),
        )
    } else {
        Span::styled(app.search_input.value(), Style::default().fg(theme.text))
    };

    let input = Paragraph::new(display_text)
        .block(block)
        .scroll((0, scroll as u16));

    frame.render_widget(input, area);

    // Only show cursor while typing
    if selected {
        let cursor_x =
            area.x + 1 + (app.search_input.visual_cursor().saturating_sub(scroll)) as u16;
        let cursor_y = area.y + 1;

        if cursor_x < area.x + area.width - 1 {
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

fn draw_history_list(frame: &mut Frame, app: &App, search_area: Rect) {
    let theme = &app.theme;
    let recent_searches = app.get_recent_searches();
    let rows = recent_searches.len().min(HISTORY_ROWS) as u16;

    let area = Rect {
        x: search_area.x,
        y: search_area.y + search_area.height,
        width: search_area.width,
        height: rows + 2,
    }
    .intersection(frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted))
        .title(" Recent Searches ");

    let start = scroll_start(app.selected_history_index.unwrap_or(0), HISTORY_ROWS);
    let items: Vec<ListItem> = recent_searches
        .iter()
        .enumerate()
        .skip(start)
        .take(HISTORY_ROWS)
        .map(|(i, query)| {
            let style = if app.selected_history_index == Some(i) {
                Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg)
            } else {
                Style::default().fg(theme.text)
            };

            // Truncate long queries
            let display = if query.chars().count() > 60 {
                format!("{}...", query.chars().take(57).collect::<String>())
            } else {
                query.clone()
            };

            ListItem::new(format!(" {display}")).style(style)
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_breadcrumb(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let on_dashboard = app.is_on_dashboard();

    let dashboard_style = if on_dashboard {
        Style::default().fg(theme.accent).bold()
    } else {
        Style::default().fg(theme.muted)
    };

    let mut spans = vec![Span::styled("Dashboard", dashboard_style)];

    if let Some(label) = app.breadcrumb() {
        let style = if on_dashboard {
            Style::default().fg(theme.muted)
        } else {
            Style::default().fg(theme.accent).bold()
        };
        spans.push(Span::styled(" › ", Style::default().fg(theme.muted)));
        spans.push(Span::styled(label, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let line = if let Some(err) = &app.error {
        Line::from(Span::styled(format!("❌ {err}"), Style::default().fg(theme.error)))
    } else if app.is_loading() {
        let idx = (Utc::now().timestamp_millis() / 100).unsigned_abs() as usize
            % SPINNER_FRAMES.len();
        let what = if app.loading.search {
            "Searching..."
        } else {
            "Loading..."
        };
        Line::from(Span::styled(
            format!("{} {what}", SPINNER_FRAMES[idx]),
            Style::default().fg(theme.warning),
        ))
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_help(frame: &mut Frame, app: &App, area: Rect) {
    let text = if app.search_focused {
        SEARCH_HELP
    } else {
        match app.view() {
            View::Dashboard => NAV_HELP,
            View::Block | View::Transaction => NAV_HELP_DETAIL,
            View::Address => NAV_HELP_NO_LIST,
        }
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(app.theme.muted))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}
