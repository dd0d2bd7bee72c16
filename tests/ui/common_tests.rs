//! Common UI tests - top bar, breadcrumb, error, loading, and help

use super::*;
use mcex::app::View;
use mcex::config::Config;
use mcex::search::SearchError;

// ==================== Top Bar Tests ====================

#[test]
fn test_top_bar_shows_selected_chain() {
    let app = create_loaded_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Bitcoin (running)"));
    assert!(buffer_contains(&buffer, "Search"));
}

#[test]
fn test_top_bar_without_chains() {
    let app = App::new(Config {
        chains: vec![],
        ..mock_config()
    });
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "No chain"));
}

#[test]
fn test_search_input_is_rendered() {
    let mut app = create_loaded_app();
    app.focus_search();
    app.search_input = tui_input::Input::new("0xdeadbeef00".to_string());
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "0xdeadbeef00"));
}

#[test]
fn test_focused_search_shows_history() {
    let mut app = create_loaded_app();
    app.focus_search();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Recent Searches"));
    assert!(buffer_contains(&buffer, "bc1qar0srrr7"));
    assert!(buffer_contains(&buffer, "↑↓ history"));
}

#[test]
fn test_unfocused_search_hides_history() {
    let app = create_loaded_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(!buffer_contains(&buffer, "Recent Searches"));
}

// ==================== Breadcrumb Tests ====================

#[test]
fn test_breadcrumb_only_dashboard_without_selection() {
    let app = create_loaded_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Dashboard"));
    assert!(!buffer_contains(&buffer, "Dashboard ›"));
}

#[test]
fn test_breadcrumb_survives_return_to_dashboard() {
    let mut app = create_loaded_app();
    app.select_block(mock_block(TIP - 3));
    app.goto_dashboard();
    let buffer = render_to_buffer(&app, 140, 45);

    assert_eq!(app.view(), View::Dashboard);
    assert!(buffer_contains(&buffer, "Dashboard › Block #789238"));
    assert!(buffer_contains(&buffer, "Latest Blocks"));
}

#[test]
fn test_breadcrumb_cleared_on_chain_switch() {
    let mut app = create_loaded_app();
    app.select_block(mock_block(TIP));
    app.select_chain("thunder");
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(!buffer_contains(&buffer, "Dashboard ›"));
    assert!(buffer_contains(&buffer, "Thunder (running)"));
}

// ==================== Error / Loading Tests ====================

#[test]
fn test_error_line_shows_search_failure() {
    let mut app = create_loaded_app();
    let generation = app.generation();
    app.begin_search("1000");
    app.apply_message(AsyncMessage::Search(
        generation,
        Err(SearchError::BlockNotFound("1000".to_string())),
    ));
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Block #1000 not found"));
    assert!(buffer_contains(&buffer, "Latest Blocks"));
}

#[test]
fn test_loading_indicator_while_searching() {
    let mut app = create_loaded_app();
    app.begin_search("789241");
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Searching..."));
}

#[test]
fn test_no_indicator_when_idle() {
    let app = create_loaded_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(!buffer_contains(&buffer, "Loading..."));
    assert!(!buffer_contains(&buffer, "Searching..."));
}

// ==================== Help / Theme Tests ====================

#[test]
fn test_help_changes_with_view() {
    let mut app = create_loaded_app();
    let buffer = render_to_buffer(&app, 140, 45);
    assert!(buffer_contains(&buffer, "n/p page"));

    app.select_address(mock_address());
    let buffer = render_to_buffer(&app, 140, 45);
    assert!(buffer_contains(&buffer, "d dashboard"));
    assert!(!buffer_contains(&buffer, "n/p page"));
}

#[test]
fn test_light_theme_renders_same_content() {
    let mut app = App::new(Config {
        dark_mode: false,
        ..mock_config()
    });
    let chains = app.config.chains.clone();
    app.set_chains(chains);
    let generation = app.generation();
    app.apply_message(AsyncMessage::Blocks(generation, Ok(mock_blocks())));
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(!app.theme.dark);
    assert!(buffer_contains(&buffer, "789241"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let app = create_loaded_app();
    let _ = render_to_buffer(&app, 40, 12);
}
