mod helper;
mod types;

pub use helper::*;
pub use types::*;

use anyhow::Result;
use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

use crate::chain::Chain;

/// Source of chain data for the explorer.
///
/// The explorer state machine and search classifier only see these three
/// calls, so a node-backed implementation can replace the simulated one
/// without touching them.
pub trait ChainDataProvider: Send + Sync + 'static {
    fn get_chain_info(&self, chain: &Chain) -> impl Future<Output = Result<ChainInfo>> + Send;

    fn get_latest_blocks(&self, chain: &Chain)
        -> impl Future<Output = Result<Vec<Block>>> + Send;

    fn get_stats(&self, chain: &Chain) -> impl Future<Output = Result<ChainStats>> + Send;
}

/// Artificial latency of each simulated call
#[derive(Debug, Clone, Copy)]
pub struct LoadDelays {
    pub chain_info: Duration,
    pub blocks: Duration,
    pub stats: Duration,
}

impl Default for LoadDelays {
    fn default() -> Self {
        Self {
            chain_info: Duration::from_millis(500),
            blocks: Duration::from_millis(700),
            stats: Duration::from_millis(600),
        }
    }
}

/// Generates fresh random records after a fixed delay
#[derive(Debug, Clone, Default)]
pub struct SimulatedProvider {
    delays: LoadDelays,
}

impl SimulatedProvider {
    pub fn new(delays: LoadDelays) -> Self {
        Self { delays }
    }
}

impl ChainDataProvider for SimulatedProvider {
    fn get_chain_info(&self, chain: &Chain) -> impl Future<Output = Result<ChainInfo>> + Send {
        let chain = chain.clone();
        let delay = self.delays.chain_info;
        async move {
            sleep(delay).await;
            Ok(generate_chain_info(&chain))
        }
    }

    fn get_latest_blocks(
        &self,
        chain: &Chain,
    ) -> impl Future<Output = Result<Vec<Block>>> + Send {
        let chain = chain.clone();
        let delay = self.delays.blocks;
        async move {
            sleep(delay).await;
            let mut rng = StdRng::from_entropy();
            Ok(generate_blocks(
                &mut rng,
                &chain,
                chain_height(&chain),
                Utc::now(),
            ))
        }
    }

    fn get_stats(&self, chain: &Chain) -> impl Future<Output = Result<ChainStats>> + Send {
        let chain = chain.clone();
        let delay = self.delays.stats;
        async move {
            sleep(delay).await;
            let mut rng = StdRng::from_entropy();
            Ok(generate_chain_stats(&mut rng, &chain, Utc::now()))
        }
    }
}
