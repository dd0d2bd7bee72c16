//! UI rendering tests for mcex
//!
//! These tests ensure the UI renders correctly by searching the rendered buffer.
//! Run with: cargo test --test ui_tests

pub mod address_tests;
pub mod block_tests;
pub mod common_tests;
pub mod dashboard_tests;

use mcex::app::App;
use mcex::chain::{default_chains, ChainKind};
use mcex::config::Config;
use mcex::loader::AsyncMessage;
use mcex::provider::{
    AddressRecord, AddressTxSummary, Block, ChainInfo, ChainStats, CrossChain, CrossChainType,
    SidechainSummary, Transaction, TxDetail, TxInput, TxOutput, COIN,
};
use mcex::ui::draw;

use chrono::{Duration, Utc};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

pub const TIP: u64 = 789241;

// ==================== Test Data Builders ====================

pub fn mock_config() -> Config {
    Config {
        chains: default_chains(),
        dark_mode: true,
        recent_searches: vec![
            "789241".to_string(),
            "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq".to_string(),
        ],
    }
}

pub fn mock_chain_info() -> ChainInfo {
    ChainInfo {
        name: "Bitcoin".to_string(),
        version: "0.1.0".to_string(),
        protocol_version: 70015,
        kind: ChainKind::Mainchain,
        blocks: TIP,
        connections: 8,
        difficulty: 54_073_476_139.647_72,
        is_syncing: false,
        sidechain: None,
    }
}

pub fn mock_sidechain_info() -> ChainInfo {
    ChainInfo {
        name: "Thunder".to_string(),
        kind: ChainKind::Sidechain,
        blocks: 45321,
        difficulty: 1254.78,
        sidechain: Some(SidechainSummary {
            parent_chain_height: TIP,
            deposits: 143,
            withdrawals: 87,
            pending_withdrawals: 3,
        }),
        ..mock_chain_info()
    }
}

pub fn mock_stats() -> ChainStats {
    ChainStats {
        blocks: TIP,
        transactions: 845_326_741,
        mainchain_height: TIP,
        peer_count: 12,
        last_updated: Utc::now(),
        hash_rate: "527.32 EH/s".to_string(),
        average_block_time: "10 minutes".to_string(),
        mempool_size: 4321,
        total_coins: "19,312,456 BTC".to_string(),
        chain_size: "498.7 GB".to_string(),
    }
}

pub fn mock_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            txid: "c0ffee00aa11bb22cc33dd44ee55ff6600112233445566778899aabbccddeeff".to_string(),
            size: 250,
            fee: None,
            input_count: 1,
            output_count: 1,
            is_coinbase: true,
            total: 625_000_000,
            cross_chain: None,
        },
        Transaction {
            txid: "deadbeef0011223344556677889900aabbccddeeff00112233445566778899aa".to_string(),
            size: 480,
            fee: Some(12_000),
            input_count: 2,
            output_count: 2,
            is_coinbase: false,
            total: 3 * COIN,
            cross_chain: Some(CrossChain {
                kind: CrossChainType::Deposit,
                target: "Thunder".to_string(),
            }),
        },
        Transaction {
            txid: "1234abcd0011223344556677889900aabbccddeeff00112233445566778899aa".to_string(),
            size: 300,
            fee: Some(5_000),
            input_count: 1,
            output_count: 2,
            is_coinbase: false,
            total: COIN / 2,
            cross_chain: None,
        },
    ]
}

pub fn mock_block(height: u64) -> Block {
    let transactions = mock_transactions();
    Block {
        height,
        hash: format!("000000{:058x}", height),
        timestamp: Utc::now() - Duration::minutes((TIP - height) as i64 * 10),
        tx_count: transactions.len(),
        size: 512 * 1024,
        miner: "Miner 7".to_string(),
        difficulty: 54_073_000_000.0,
        merkle_root: "ab".repeat(32),
        nonce: 123_456_789,
        bits: "1a44b9f2".to_string(),
        transactions,
    }
}

pub fn mock_blocks() -> Vec<Block> {
    (0..20).map(|i| mock_block(TIP - i)).collect()
}

pub fn mock_withdrawal_detail() -> TxDetail {
    let block = mock_block(TIP);
    let mut tx = block.transactions[1].clone();
    tx.cross_chain = Some(CrossChain {
        kind: CrossChainType::Withdrawal,
        target: "Bitcoin".to_string(),
    });

    TxDetail {
        tx,
        block_height: block.height,
        block_hash: block.hash.clone(),
        timestamp: block.timestamp,
        inputs: vec![
            TxInput::Spend {
                address: "bc1qinput0000000000000000000000000000000000".to_string(),
                prev_txid: "ee".repeat(32),
                vout: 0,
            },
            TxInput::Spend {
                address: "bc1qinput1111111111111111111111111111111111".to_string(),
                prev_txid: "ff".repeat(32),
                vout: 1,
            },
        ],
        outputs: vec![
            TxOutput {
                address: "bc1qoutput000000000000000000000000000000000".to_string(),
                script_type: "OP_RETURN (Withdrawal)".to_string(),
                amount: COIN,
            },
            TxOutput {
                address: "bc1qoutput111111111111111111111111111111111".to_string(),
                script_type: "P2WPKH".to_string(),
                amount: 2 * COIN,
            },
        ],
    }
}

pub fn mock_coinbase_detail() -> TxDetail {
    let block = mock_block(TIP);
    TxDetail {
        tx: block.transactions[0].clone(),
        block_height: block.height,
        block_hash: block.hash.clone(),
        timestamp: block.timestamp,
        inputs: vec![TxInput::Coinbase {
            script: "03f90a0c".to_string(),
        }],
        outputs: vec![TxOutput {
            address: "bc1qminer00000000000000000000000000000000000".to_string(),
            script_type: "P2WPKH".to_string(),
            amount: 625_000_000,
        }],
    }
}

pub fn mock_address() -> AddressRecord {
    AddressRecord {
        address: "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq".to_string(),
        balance: 150_000_000,
        total_received: 900_000_000,
        total_sent: 750_000_000,
        tx_count: 42,
        transactions: vec![
            AddressTxSummary {
                txid: "aa".repeat(32),
                timestamp: Utc::now() - Duration::minutes(5),
                amount: 50_000_000,
                confirmations: 3,
                block_height: TIP - 2,
            },
            AddressTxSummary {
                txid: "bb".repeat(32),
                timestamp: Utc::now() - Duration::hours(2),
                amount: -12_345_678,
                confirmations: 120,
                block_height: TIP - 120,
            },
        ],
    }
}

/// App with the default chain selected and no data loaded yet
pub fn create_test_app() -> App {
    let mut app = App::new(mock_config());
    let chains = app.config.chains.clone();
    app.set_chains(chains);
    app
}

/// App with all three dashboard slices loaded
pub fn create_loaded_app() -> App {
    let mut app = create_test_app();
    let generation = app.generation();
    app.apply_message(AsyncMessage::ChainInfo(generation, Ok(mock_chain_info())));
    app.apply_message(AsyncMessage::Blocks(generation, Ok(mock_blocks())));
    app.apply_message(AsyncMessage::Stats(generation, Ok(mock_stats())));
    app
}

// ==================== Helper Functions ====================

/// Render the app to a buffer and return it
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            draw(frame, app);
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

/// Check if buffer contains a specific string anywhere
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    let content = buffer_to_string(buffer);
    content.contains(needle)
}

/// Convert buffer to a single string for searching
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut content = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            content.push(
                buffer
                    .cell((x, y))
                    .map(|c| c.symbol().chars().next().unwrap_or(' '))
                    .unwrap_or(' '),
            );
        }
        content.push('\n');
    }
    content
}

/// Print buffer for debugging
#[allow(dead_code)]
pub fn print_buffer(buffer: &Buffer) {
    print!("{}", buffer_to_string(buffer));
}
