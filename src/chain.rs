use serde::{Deserialize, Serialize};

/// Chain id preferred by auto-selection
pub const PREFERRED_CHAIN_ID: &str = "bitcoin";

/// Lifecycle state of a chain node as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainStatus {
    Running,
    Starting,
    Stopping,
    Error,
}

impl ChainStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Starting => "starting",
            Self::Stopping => "stopping",
            Self::Error => "error",
        }
    }
}

/// Externally supplied chain descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub id: String,
    pub display_name: String,
    pub status: ChainStatus,
}

impl Chain {
    pub fn new(id: &str, display_name: &str, status: ChainStatus) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            status,
        }
    }

    /// The base chain every sidechain is pegged to
    pub fn is_mainchain(&self) -> bool {
        self.id == PREFERRED_CHAIN_ID
    }

    pub fn kind(&self) -> ChainKind {
        if self.is_mainchain() {
            ChainKind::Mainchain
        } else {
            ChainKind::Sidechain
        }
    }

    /// Currency ticker: BTC on the mainchain, otherwise the first three letters of the name
    pub fn ticker(&self) -> String {
        if self.is_mainchain() {
            "BTC".to_string()
        } else {
            self.display_name.chars().take(3).collect::<String>().to_uppercase()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    Mainchain,
    Sidechain,
}

impl ChainKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainchain => "mainchain",
            Self::Sidechain => "sidechain",
        }
    }
}

/// Pick the chain to show first: the preferred chain, else the first running one,
/// else the head of the list.
pub fn select_default_chain(chains: &[Chain]) -> Option<&Chain> {
    chains
        .iter()
        .find(|c| c.id == PREFERRED_CHAIN_ID)
        .or_else(|| chains.iter().find(|c| c.status == ChainStatus::Running))
        .or_else(|| chains.first())
}

/// Default chain list used when the config does not provide one
pub fn default_chains() -> Vec<Chain> {
    vec![
        Chain::new("bitcoin", "Bitcoin", ChainStatus::Running),
        Chain::new("thunder", "Thunder", ChainStatus::Running),
        Chain::new("zside", "zSide", ChainStatus::Starting),
        Chain::new("bitnames", "BitNames", ChainStatus::Stopping),
    ]
}
