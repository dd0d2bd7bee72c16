//! Address page UI tests

use super::*;

fn address_app() -> App {
    let mut app = create_loaded_app();
    app.select_address(mock_address());
    app
}

#[test]
fn test_address_screen_shows_summary() {
    let app = address_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Address: bc1qar0srrr7"));
    assert!(buffer_contains(&buffer, "Balance: 1.50000000 BTC"));
    assert!(buffer_contains(&buffer, "Total Received: 9.00000000 BTC"));
    assert!(buffer_contains(&buffer, "Total Sent: 7.50000000 BTC"));
    assert!(buffer_contains(&buffer, "Transactions: 42"));
}

#[test]
fn test_address_screen_shows_signed_history() {
    let app = address_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Recent Transactions"));
    assert!(buffer_contains(&buffer, "+0.50000000 BTC"));
    assert!(buffer_contains(&buffer, "-0.12345678 BTC"));
    assert!(buffer_contains(&buffer, "5 mins ago"));
    assert!(buffer_contains(&buffer, "2 hours ago"));
}

#[test]
fn test_address_breadcrumb() {
    let app = address_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Dashboard › Address"));
}

#[test]
fn test_address_uses_sidechain_ticker() {
    let mut app = create_test_app();
    app.select_chain("thunder");
    app.select_address(mock_address());
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "1.50000000 THU"));
}
