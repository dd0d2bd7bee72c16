use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use super::types::*;
use crate::chain::Chain;

// Fixed node values reported by the simulated chains
pub const MAINCHAIN_HEIGHT: u64 = 789_241;
pub const SIDECHAIN_HEIGHT: u64 = 45_321;
pub const MAINCHAIN_DIFFICULTY: f64 = 54_073_476_139.647_72;
pub const SIDECHAIN_DIFFICULTY: f64 = 1_254.78;
pub const NODE_VERSION: &str = "0.1.0";
pub const PROTOCOL_VERSION: u32 = 70015;
pub const CONNECTIONS: u32 = 8;
pub const BLOCK_BITS: &str = "1a44b9f2";

pub const COINBASE_REWARD: u64 = 625_000_000;
pub const BLOCKS_PER_FETCH: u64 = 20;
pub const ADDRESS_HISTORY_LEN: usize = 10;

const CROSS_CHAIN_PROBABILITY: f64 = 0.1;
const BLOCK_INTERVAL_MINUTES: i64 = 10;
const BECH32_CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

// ============================================================================
// Primitive generators
// ============================================================================

/// Random lowercase hex string encoding `bytes` random bytes
pub fn random_hex<R: Rng + ?Sized>(rng: &mut R, bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    rng.fill(&mut buf[..]);
    hex::encode(buf)
}

/// 32-byte hash with the leading zeros of a mined block
pub fn random_block_hash<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("000000{}", &random_hex(rng, 32)[6..])
}

/// Segwit-looking address drawn from the bech32 charset
pub fn random_segwit_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let body: String = (0..38)
        .map(|_| BECH32_CHARSET[rng.gen_range(0..BECH32_CHARSET.len())] as char)
        .collect();
    format!("bc1q{body}")
}

pub fn chain_height(chain: &Chain) -> u64 {
    if chain.is_mainchain() {
        MAINCHAIN_HEIGHT
    } else {
        SIDECHAIN_HEIGHT
    }
}

// ============================================================================
// Records
// ============================================================================

pub fn generate_chain_info(chain: &Chain) -> ChainInfo {
    let mainchain = chain.is_mainchain();
    ChainInfo {
        name: chain.display_name.clone(),
        version: NODE_VERSION.to_string(),
        protocol_version: PROTOCOL_VERSION,
        kind: chain.kind(),
        blocks: chain_height(chain),
        connections: CONNECTIONS,
        difficulty: if mainchain {
            MAINCHAIN_DIFFICULTY
        } else {
            SIDECHAIN_DIFFICULTY
        },
        is_syncing: false,
        sidechain: (!mainchain).then_some(SidechainSummary {
            parent_chain_height: MAINCHAIN_HEIGHT,
            deposits: 143,
            withdrawals: 87,
            pending_withdrawals: 3,
        }),
    }
}

pub fn generate_chain_stats<R: Rng + ?Sized>(
    rng: &mut R,
    chain: &Chain,
    now: DateTime<Utc>,
) -> ChainStats {
    let mainchain = chain.is_mainchain();
    ChainStats {
        blocks: chain_height(chain),
        transactions: if mainchain { 845_326_741 } else { 1_254_872 },
        mainchain_height: MAINCHAIN_HEIGHT,
        peer_count: rng.gen_range(5..25),
        last_updated: now,
        hash_rate: if mainchain { "527.32 EH/s" } else { "342.56 TH/s" }.to_string(),
        average_block_time: if mainchain { "10 minutes" } else { "30 seconds" }.to_string(),
        mempool_size: rng.gen_range(1_000..11_000),
        total_coins: if mainchain {
            "19,312,456 BTC".to_string()
        } else {
            format!("15,823,456 {}", chain.ticker())
        },
        chain_size: if mainchain { "498.7 GB" } else { "42.3 GB" }.to_string(),
    }
}

/// Newest-first blocks counting down from `tip`
pub fn generate_blocks<R: Rng + ?Sized>(
    rng: &mut R,
    chain: &Chain,
    tip: u64,
    now: DateTime<Utc>,
) -> Vec<Block> {
    let (base_difficulty, jitter) = if chain.is_mainchain() {
        (MAINCHAIN_DIFFICULTY, 1_000_000.0)
    } else {
        (SIDECHAIN_DIFFICULTY, 10.0)
    };

    (0..BLOCKS_PER_FETCH)
        .map_while(|i| tip.checked_sub(i).map(|height| (i, height)))
        .map(|(i, height)| {
            let tx_count = rng.gen_range(1..=100);
            Block {
                height,
                hash: random_block_hash(rng),
                timestamp: now - Duration::minutes(i as i64 * BLOCK_INTERVAL_MINUTES),
                tx_count,
                size: rng.gen_range(100..1000) * 1024,
                miner: format!("Miner {}", rng.gen_range(1..=10)),
                difficulty: base_difficulty - rng.gen::<f64>() * jitter,
                merkle_root: random_hex(rng, 32),
                nonce: rng.gen_range(0..1_000_000_000),
                bits: BLOCK_BITS.to_string(),
                transactions: generate_transactions(rng, tx_count),
            }
        })
        .collect()
}

pub fn generate_transactions<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Transaction> {
    (0..count)
        .map(|j| {
            let is_coinbase = j == 0;
            let cross_chain = if !is_coinbase && rng.gen_bool(CROSS_CHAIN_PROBABILITY) {
                Some(CrossChain {
                    kind: if rng.gen_bool(0.5) {
                        CrossChainType::Deposit
                    } else {
                        CrossChainType::Withdrawal
                    },
                    target: if rng.gen_bool(0.5) { "Bitcoin" } else { "Thunder" }.to_string(),
                })
            } else {
                None
            };

            Transaction {
                txid: random_hex(rng, 32),
                size: rng.gen_range(200..1200),
                fee: (!is_coinbase).then(|| rng.gen_range(0..COIN / 1000)),
                input_count: rng.gen_range(1..=5),
                output_count: rng.gen_range(1..=5),
                is_coinbase,
                total: if is_coinbase {
                    COINBASE_REWARD
                } else {
                    rng.gen_range(0..10 * COIN)
                },
                cross_chain,
            }
        })
        .collect()
}

/// Attach the parent block and synthesize the input/output lists for display
pub fn build_tx_detail<R: Rng + ?Sized>(rng: &mut R, tx: &Transaction, block: &Block) -> TxDetail {
    let inputs = if tx.is_coinbase {
        vec![TxInput::Coinbase {
            script: random_hex(rng, 14),
        }]
    } else {
        (0..tx.input_count)
            .map(|vout| TxInput::Spend {
                address: random_segwit_address(rng),
                prev_txid: random_hex(rng, 32),
                vout,
            })
            .collect()
    };

    let share = tx.total / tx.output_count.max(1) as u64;
    let outputs = (0..tx.output_count)
        .map(|i| {
            let script_type = match &tx.cross_chain {
                Some(cc) if i == 0 => format!("OP_RETURN ({})", cc.kind.as_str()),
                _ => "P2WPKH".to_string(),
            };
            TxOutput {
                address: random_segwit_address(rng),
                script_type,
                amount: (share as f64 * rng.gen_range(0.8..1.2)) as u64,
            }
        })
        .collect();

    TxDetail {
        tx: tx.clone(),
        block_height: block.height,
        block_hash: block.hash.clone(),
        timestamp: block.timestamp,
        inputs,
        outputs,
    }
}

/// Synthesize an address record; nothing here depends on loaded chain data
pub fn generate_address_record<R: Rng + ?Sized>(
    rng: &mut R,
    address: &str,
    tip: u64,
    now: DateTime<Utc>,
) -> AddressRecord {
    let transactions = (0..ADDRESS_HISTORY_LEN)
        .map(|_| AddressTxSummary {
            txid: random_hex(rng, 32),
            timestamp: now - Duration::milliseconds(rng.gen_range(0..10_000_000)),
            amount: rng.gen_range(-(COIN as i64) + 1..COIN as i64),
            confirmations: rng.gen_range(0..1000),
            block_height: tip.saturating_sub(rng.gen_range(0..1000)),
        })
        .collect();

    AddressRecord {
        address: address.to_string(),
        balance: rng.gen_range(0..10 * COIN),
        total_received: rng.gen_range(0..20 * COIN),
        total_sent: rng.gen_range(0..15 * COIN),
        tx_count: rng.gen_range(1..=100),
        transactions,
    }
}
