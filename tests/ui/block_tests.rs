//! Block page UI tests

use super::*;

fn block_app() -> App {
    let mut app = create_loaded_app();
    app.select_block(mock_block(TIP));
    app
}

#[test]
fn test_block_screen_shows_block_number() {
    let app = block_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Block #789241"));
    assert!(buffer_contains(&buffer, "Height: 789,241"));
}

#[test]
fn test_block_screen_shows_header_fields() {
    let app = block_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Miner: Miner 7"));
    assert!(buffer_contains(&buffer, "Nonce: 123456789"));
    assert!(buffer_contains(&buffer, "Bits: 1a44b9f2"));
    assert!(buffer_contains(&buffer, "Merkle Root: abab"));
    assert!(buffer_contains(&buffer, "Size: 512.00 KB"));
}

#[test]
fn test_block_screen_lists_transactions() {
    let app = block_app();
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Transactions (3)"));
    assert!(buffer_contains(&buffer, "Coinbase"));
    assert!(buffer_contains(&buffer, "Deposit"));
    assert!(buffer_contains(&buffer, "Standard"));
    assert!(buffer_contains(&buffer, "6.25000000 BTC"));
}

#[test]
fn test_block_screen_coinbase_has_no_fee() {
    let app = block_app();
    let buffer = render_to_buffer(&app, 140, 45);

    // Coinbase row shows "-" for the fee column; others show an amount
    assert!(buffer_contains(&buffer, "0.00012000 BTC"));
    let content = buffer_to_string(&buffer);
    let coinbase_row = content
        .lines()
        .find(|l| l.contains("c0ffee00aa"))
        .unwrap();
    assert!(coinbase_row.trim_end().trim_end_matches('│').trim_end().ends_with('-'));
}

#[test]
fn test_block_screen_empty_transactions() {
    let mut app = create_loaded_app();
    let mut block = mock_block(TIP);
    block.transactions.clear();
    block.tx_count = 0;
    app.select_block(block);
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "No transactions in this block"));
}

#[test]
fn test_block_screen_marks_sidechain() {
    let mut app = create_test_app();
    app.select_chain("thunder");
    app.select_block(mock_block(45321));
    let buffer = render_to_buffer(&app, 140, 45);

    assert!(buffer_contains(&buffer, "Chain: Thunder (sidechain)"));
    assert!(buffer_contains(&buffer, "THU"));
}
