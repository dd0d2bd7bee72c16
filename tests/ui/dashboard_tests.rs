//! Dashboard UI tests

use super::*;
use mcex::loader::AsyncMessage;

#[test]
fn test_dashboard_shows_chain_info() {
    let app = create_loaded_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Chain Info"));
    assert!(buffer_contains(&buffer, "Height: 789,241"));
    assert!(buffer_contains(&buffer, "Protocol: 70015"));
    assert!(buffer_contains(&buffer, "Type: mainchain"));
}

#[test]
fn test_dashboard_shows_stats() {
    let app = create_loaded_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Chain Statistics"));
    assert!(buffer_contains(&buffer, "845,326,741"));
    assert!(buffer_contains(&buffer, "527.32 EH/s"));
    assert!(buffer_contains(&buffer, "19,312,456 BTC"));
}

#[test]
fn test_dashboard_lists_first_page_of_blocks() {
    let app = create_loaded_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Latest Blocks"));
    assert!(buffer_contains(&buffer, "789241"));
    assert!(buffer_contains(&buffer, "789232"));
    assert!(!buffer_contains(&buffer, "789231"));
    assert!(buffer_contains(&buffer, "512.00 KB"));
    assert!(buffer_contains(&buffer, "Page 1"));
}

#[test]
fn test_dashboard_second_page() {
    let mut app = create_loaded_app();
    app.next_page();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Page 2"));
    assert!(buffer_contains(&buffer, "789231"));
    assert!(!buffer_contains(&buffer, "789241 "));
}

#[test]
fn test_dashboard_empty_page() {
    let mut app = create_loaded_app();
    app.next_page();
    app.next_page();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Page 3"));
    assert!(buffer_contains(&buffer, "No blocks on this page"));
}

#[test]
fn test_dashboard_shows_recent_cross_chain() {
    let app = create_loaded_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Recent Cross-Chain Transactions"));
    assert!(buffer_contains(&buffer, "Deposit"));
    assert!(buffer_contains(&buffer, "Bitcoin → Thunder"));
    assert!(buffer_contains(&buffer, "3.00000000 BTC"));
}

#[test]
fn test_mainchain_lists_sidechains() {
    let app = create_loaded_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Cross-Chain Info"));
    assert!(buffer_contains(&buffer, "Thunder (running)"));
    assert!(buffer_contains(&buffer, "zSide (starting)"));
}

#[test]
fn test_sidechain_shows_peg_summary() {
    let mut app = create_test_app();
    app.select_chain("thunder");
    let generation = app.generation();
    app.apply_message(AsyncMessage::ChainInfo(generation, Ok(mock_sidechain_info())));
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Thunder"));
    assert!(buffer_contains(&buffer, "Total Deposits: 143"));
    assert!(buffer_contains(&buffer, "Pending Withdrawals: 3"));
}

#[test]
fn test_dashboard_placeholders_while_loading() {
    let app = create_test_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Loading blocks..."));
    assert!(buffer_contains(&buffer, "Loading..."));
    assert!(!buffer_contains(&buffer, "Height:"));
}

#[test]
fn test_dashboard_selected_row_follows_cursor() {
    let mut app = create_loaded_app();
    app.select_next();
    app.select_next();

    assert_eq!(
        app.get_selected_link(),
        Some(mcex::app::NavLink::Block(TIP - 2))
    );
    let buffer = render_to_buffer(&app, 140, 45);
    assert!(buffer_contains(&buffer, "789239"));
}
