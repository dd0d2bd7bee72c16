use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;

use crate::provider::{build_tx_detail, generate_address_record, AddressRecord, Block, TxDetail};

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const MIN_HASH_QUERY_LEN: usize = 10;

/// Represents the type of search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// All-digit block height
    BlockHeight(u64),
    /// All-digit string that does not fit a height
    UnknownHeight(String),
    /// Transaction id or block hash fragment (lowercase, 0x stripped)
    Hash(String),
    /// Legacy (1/3 prefix) or segwit (bc1 prefix) address
    Address(String),
    /// Invalid or unrecognized query
    Invalid,
}

/// Entity a search navigated to
#[derive(Debug, Clone)]
pub enum SearchHit {
    Block(Block),
    Transaction(TxDetail),
    Address(AddressRecord),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Block #{0} not found")]
    BlockNotFound(String),
    #[error("Transaction or block not found")]
    NotFound,
    #[error("Invalid search query format")]
    InvalidFormat,
}

impl SearchQuery {
    /// Classify a search string. First matching rule wins.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Self::Invalid;
        }

        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return match trimmed.parse::<u64>() {
                Ok(height) => Self::BlockHeight(height),
                Err(_) => Self::UnknownHeight(trimmed.to_string()),
            };
        }

        if Self::looks_like_hash(trimmed) {
            let needle = trimmed
                .strip_prefix("0x")
                .or_else(|| trimmed.strip_prefix("0X"))
                .unwrap_or(trimmed);
            return Self::Hash(needle.to_lowercase());
        }

        if Self::looks_like_legacy_address(trimmed) || Self::looks_like_segwit_address(trimmed) {
            return Self::Address(trimmed.to_string());
        }

        Self::Invalid
    }

    /// At least ten hex digits at the start, after an optional 0x.
    /// Anything may follow them.
    fn looks_like_hash(s: &str) -> bool {
        let leading_hex = |s: &str| s.chars().take_while(|c| c.is_ascii_hexdigit()).count();

        let prefixed = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .is_some_and(|rest| leading_hex(rest) >= MIN_HASH_QUERY_LEN);

        prefixed || leading_hex(s) >= MIN_HASH_QUERY_LEN
    }

    fn looks_like_legacy_address(s: &str) -> bool {
        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if first != '1' && first != '3' {
            return false;
        }

        let rest = chars.as_str();
        (25..=34).contains(&rest.chars().count())
            && rest.chars().all(|c| {
                BASE58_ALPHABET.contains(c.to_ascii_lowercase())
                    || BASE58_ALPHABET.contains(c.to_ascii_uppercase())
            })
    }

    fn looks_like_segwit_address(s: &str) -> bool {
        if s.len() < 3 || !s.is_char_boundary(3) || !s[..3].eq_ignore_ascii_case("bc1") {
            return false;
        }

        let rest = &s[3..];
        (8..=87).contains(&rest.chars().count())
            && rest.chars().all(|c| {
                let c = c.to_ascii_lowercase();
                c.is_ascii_digit() || (c.is_ascii_lowercase() && !matches!(c, 'b' | 'i' | 'o'))
            })
    }

    /// Resolve the query against the currently loaded blocks.
    ///
    /// Heights and hashes are only looked up in `blocks`; nothing outside the
    /// loaded window is fetched. Address queries always succeed with a
    /// synthesized record whose history is anchored at `tip`.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        blocks: &[Block],
        tip: u64,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<SearchHit, SearchError> {
        match self {
            Self::BlockHeight(height) => blocks
                .iter()
                .find(|b| b.height == *height)
                .map(|b| SearchHit::Block(b.clone()))
                .ok_or_else(|| SearchError::BlockNotFound(height.to_string())),
            Self::UnknownHeight(raw) => Err(SearchError::BlockNotFound(raw.clone())),
            Self::Hash(needle) => {
                for block in blocks {
                    let found = block
                        .transactions
                        .iter()
                        .find(|t| t.txid.contains(needle.as_str()));
                    if let Some(tx) = found {
                        return Ok(SearchHit::Transaction(build_tx_detail(rng, tx, block)));
                    }
                }

                blocks
                    .iter()
                    .find(|b| b.hash.contains(needle.as_str()))
                    .map(|b| SearchHit::Block(b.clone()))
                    .ok_or(SearchError::NotFound)
            }
            Self::Address(address) => Ok(SearchHit::Address(generate_address_record(
                rng, address, tip, now,
            ))),
            Self::Invalid => Err(SearchError::InvalidFormat),
        }
    }

    /// Returns a human-readable description of the query type
    pub fn description(&self) -> String {
        match self {
            Self::BlockHeight(height) => format!("Block: {height}"),
            Self::UnknownHeight(raw) => format!("Block: {raw}"),
            Self::Hash(needle) => format!("Transaction or block: {needle}"),
            Self::Address(addr) => format!("Address: {addr}"),
            Self::Invalid => "Invalid".to_string(),
        }
    }
}
