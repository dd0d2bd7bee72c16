use anyhow::{Context, Result};
use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::chain::Chain;
use crate::provider::{Block, ChainDataProvider, ChainInfo, ChainStats};
use crate::search::{SearchError, SearchHit, SearchQuery};

/// Simulated latency of a search
pub const SEARCH_DELAY: Duration = Duration::from_millis(800);

/// Dashboard load for one chain, tagged with the generation it was issued in
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub generation: u64,
    pub chain: Chain,
}

/// Search against a snapshot of the loaded blocks
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: SearchQuery,
    pub blocks: Vec<Block>,
    pub tip: u64,
}

/// Messages from async tasks back to the main loop
#[derive(Debug)]
pub enum AsyncMessage {
    ChainInfo(u64, Result<ChainInfo>),
    Blocks(u64, Result<Vec<Block>>),
    Stats(u64, Result<ChainStats>),
    Search(u64, Result<SearchHit, SearchError>),
}

impl AsyncMessage {
    pub fn generation(&self) -> u64 {
        match self {
            Self::ChainInfo(g, _) | Self::Blocks(g, _) | Self::Stats(g, _) | Self::Search(g, _) => {
                *g
            }
        }
    }
}

/// Fire-and-forget dispatcher. Every call spawns its own task and reports
/// back over the channel; nothing is cancelled or retried.
pub struct Loader<P> {
    provider: Arc<P>,
    tx: mpsc::Sender<AsyncMessage>,
    search_delay: Duration,
}

impl<P: ChainDataProvider> Loader<P> {
    pub fn new(provider: P, tx: mpsc::Sender<AsyncMessage>) -> Self {
        Self {
            provider: Arc::new(provider),
            tx,
            search_delay: SEARCH_DELAY,
        }
    }

    pub fn fetch_all(&self, request: &LoadRequest) {
        self.fetch_chain_info(request);
        self.fetch_latest_blocks(request);
        self.fetch_chain_stats(request);
    }

    pub fn fetch_chain_info(&self, request: &LoadRequest) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let LoadRequest { generation, chain } = request.clone();
        log::debug!("fetching chain info for {} (generation {generation})", chain.id);

        tokio::spawn(async move {
            let result = provider
                .get_chain_info(&chain)
                .await
                .context("Failed to fetch chain information");
            let _ = tx.send(AsyncMessage::ChainInfo(generation, result)).await;
        });
    }

    pub fn fetch_latest_blocks(&self, request: &LoadRequest) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let LoadRequest { generation, chain } = request.clone();
        log::debug!("fetching latest blocks for {} (generation {generation})", chain.id);

        tokio::spawn(async move {
            let result = provider
                .get_latest_blocks(&chain)
                .await
                .context("Failed to fetch latest blocks");
            let _ = tx.send(AsyncMessage::Blocks(generation, result)).await;
        });
    }

    pub fn fetch_chain_stats(&self, request: &LoadRequest) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let LoadRequest { generation, chain } = request.clone();
        log::debug!("fetching chain stats for {} (generation {generation})", chain.id);

        tokio::spawn(async move {
            let result = provider
                .get_stats(&chain)
                .await
                .context("Failed to fetch chain statistics");
            let _ = tx.send(AsyncMessage::Stats(generation, result)).await;
        });
    }

    pub fn search(&self, request: SearchRequest) {
        let tx = self.tx.clone();
        let delay = self.search_delay;
        log::debug!("searching {}", request.query.description());

        tokio::spawn(async move {
            sleep(delay).await;
            let mut rng = StdRng::from_entropy();
            let result = request
                .query
                .resolve(&request.blocks, request.tip, &mut rng, Utc::now());
            let _ = tx
                .send(AsyncMessage::Search(request.generation, result))
                .await;
        });
    }
}
