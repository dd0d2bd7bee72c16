use chrono::{DateTime, Utc};

use crate::chain::ChainKind;

/// Base units per coin
pub const COIN: u64 = 100_000_000;

// ============================================================================
// Chain Info
// ============================================================================

/// Node snapshot for the selected chain. Replaced wholesale on every fetch.
#[derive(Debug, Clone)]
pub struct ChainInfo {
    pub name: String,
    pub version: String,
    pub protocol_version: u32,
    pub kind: ChainKind,
    pub blocks: u64,
    pub connections: u32,
    pub difficulty: f64,
    pub is_syncing: bool,
    pub sidechain: Option<SidechainSummary>,
}

/// Peg summary reported by a sidechain node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidechainSummary {
    pub parent_chain_height: u64,
    pub deposits: u32,
    pub withdrawals: u32,
    pub pending_withdrawals: u32,
}

// ============================================================================
// Statistics
// ============================================================================

#[derive(Debug, Clone)]
pub struct ChainStats {
    pub blocks: u64,
    pub transactions: u64,
    pub mainchain_height: u64,
    pub peer_count: u32,
    pub last_updated: DateTime<Utc>,
    pub hash_rate: String,
    pub average_block_time: String,
    pub mempool_size: u32,
    pub total_coins: String,
    pub chain_size: String,
}

// ============================================================================
// Blocks and Transactions
// ============================================================================

#[derive(Debug, Clone)]
pub struct Block {
    pub height: u64,
    pub hash: String,
    pub timestamp: DateTime<Utc>,
    pub tx_count: usize,
    /// Size in bytes
    pub size: u64,
    pub miner: String,
    pub difficulty: f64,
    pub merkle_root: String,
    pub nonce: u64,
    pub bits: String,
    /// Coinbase first
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossChainType {
    /// Mainchain to sidechain
    Deposit,
    /// Sidechain to mainchain
    Withdrawal,
}

impl CrossChainType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossChain {
    pub kind: CrossChainType,
    pub target: String,
}

#[derive(Debug, Clone)]
pub struct Transaction {
    pub txid: String,
    /// Size in bytes
    pub size: u64,
    /// None for coinbase
    pub fee: Option<u64>,
    pub input_count: usize,
    pub output_count: usize,
    pub is_coinbase: bool,
    pub total: u64,
    pub cross_chain: Option<CrossChain>,
}

impl Transaction {
    pub fn type_label(&self) -> &'static str {
        if self.is_coinbase {
            "Coinbase"
        } else {
            match &self.cross_chain {
                Some(cc) => cc.kind.as_str(),
                None => "Standard",
            }
        }
    }
}

/// A transaction opened in the detail view, with its parent block attached
#[derive(Debug, Clone)]
pub struct TxDetail {
    pub tx: Transaction,
    pub block_height: u64,
    pub block_hash: String,
    pub timestamp: DateTime<Utc>,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
}

#[derive(Debug, Clone)]
pub enum TxInput {
    Coinbase { script: String },
    Spend { address: String, prev_txid: String, vout: usize },
}

#[derive(Debug, Clone)]
pub struct TxOutput {
    pub address: String,
    pub script_type: String,
    pub amount: u64,
}

// ============================================================================
// Addresses
// ============================================================================

#[derive(Debug, Clone)]
pub struct AddressRecord {
    pub address: String,
    pub balance: u64,
    pub total_received: u64,
    pub total_sent: u64,
    pub tx_count: u32,
    pub transactions: Vec<AddressTxSummary>,
}

#[derive(Debug, Clone)]
pub struct AddressTxSummary {
    pub txid: String,
    pub timestamp: DateTime<Utc>,
    /// Negative when sent
    pub amount: i64,
    pub confirmations: u32,
    pub block_height: u64,
}
