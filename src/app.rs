use chrono::Utc;
use rand::thread_rng;
use tui_input::Input;

use crate::chain::{select_default_chain, Chain};
use crate::config::Config;
use crate::loader::{AsyncMessage, LoadRequest, SearchRequest};
use crate::provider::{
    build_tx_detail, generate_address_record, AddressRecord, Block, ChainInfo, ChainStats,
    TxDetail, TxInput,
};
use crate::search::{SearchHit, SearchQuery};
use crate::theme::Theme;

/// Blocks per dashboard page
pub const PER_PAGE: usize = 10;

/// Which panel is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Block,
    Transaction,
    Address,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Block => "block",
            Self::Transaction => "transaction",
            Self::Address => "address",
        }
    }
}

/// The one detail entity currently selected, if any
#[derive(Debug, Clone, Default)]
pub enum Selection {
    #[default]
    None,
    Block(Block),
    Transaction(TxDetail),
    Address(AddressRecord),
}

impl Selection {
    /// Detail view that renders this selection
    pub fn view(&self) -> Option<View> {
        match self {
            Self::None => None,
            Self::Block(_) => Some(View::Block),
            Self::Transaction(_) => Some(View::Transaction),
            Self::Address(_) => Some(View::Address),
        }
    }

    /// Breadcrumb label shown next to "Dashboard"
    pub fn label(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Block(block) => Some(format!("Block #{}", block.height)),
            Self::Transaction(_) => Some("Transaction".to_string()),
            Self::Address(_) => Some("Address".to_string()),
        }
    }
}

/// In-flight loads, one flag per independent data slice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub chain_info: bool,
    pub blocks: bool,
    pub stats: bool,
    pub search: bool,
}

impl LoadingState {
    pub fn any(&self) -> bool {
        self.chain_info || self.blocks || self.stats || self.search
    }
}

/// What a refresh should do in the current view
#[derive(Debug, Clone)]
pub enum RefreshPlan {
    Reload(LoadRequest),
    /// Detail views have nothing to refresh
    Unsupported(View),
    NoChain,
}

/// Navigable links from a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavLink {
    Block(u64),
    /// Index into the selected block's transactions
    Transaction(usize),
    Address(String),
}

pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub chains: Vec<Chain>,
    selected_chain: Option<Chain>,
    view: View,
    selection: Selection,
    generation: u64,
    pub chain_info: Option<ChainInfo>,
    pub blocks: Vec<Block>,
    pub stats: Option<ChainStats>,
    pub loading: LoadingState,
    pub error: Option<String>,
    pub page: usize,
    pub selected_row: usize,
    pub search_input: Input,
    pub search_focused: bool,
    pub selected_history_index: Option<usize>,
    pub should_quit: bool,
    persist: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_dark_mode(config.dark_mode);

        Self {
            config,
            theme,
            chains: Vec::new(),
            selected_chain: None,
            view: View::Dashboard,
            selection: Selection::None,
            generation: 0,
            chain_info: None,
            blocks: Vec::new(),
            stats: None,
            loading: LoadingState::default(),
            error: None,
            page: 1,
            selected_row: 0,
            search_input: Input::default(),
            search_focused: false,
            selected_history_index: None,
            should_quit: false,
            persist: false,
        }
    }

    /// Write config changes (recent searches) back to disk
    pub fn persistent(mut self) -> Self {
        self.persist = true;
        self
    }

    // ==================== Chain selection ====================

    /// Replace the known chain list and re-run auto-selection.
    ///
    /// Returns the dashboard load to dispatch, if any.
    pub fn set_chains(&mut self, chains: Vec<Chain>) -> Option<LoadRequest> {
        self.chains = chains;
        let target = select_default_chain(&self.chains)?.clone();

        let unchanged = self
            .selected_chain
            .as_ref()
            .is_some_and(|current| current.id == target.id);

        if unchanged {
            self.selected_chain = Some(target);
            self.begin_load()
        } else {
            Some(self.switch_chain(target))
        }
    }

    /// Switch to the chain with `id`. No-op if it is already selected or unknown.
    pub fn select_chain(&mut self, id: &str) -> Option<LoadRequest> {
        if self.selected_chain.as_ref().is_some_and(|c| c.id == id) {
            return None;
        }

        let Some(chain) = self.chains.iter().find(|c| c.id == id).cloned() else {
            log::warn!("unknown chain {id}");
            return None;
        };

        Some(self.switch_chain(chain))
    }

    /// Move to the next (or previous) chain in the list, wrapping around
    pub fn cycle_chain(&mut self, forward: bool) -> Option<LoadRequest> {
        let len = self.chains.len();
        if len < 2 {
            return None;
        }

        let current = self
            .selected_chain
            .as_ref()
            .and_then(|sel| self.chains.iter().position(|c| c.id == sel.id))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };

        let id = self.chains[next].id.clone();
        self.select_chain(&id)
    }

    fn switch_chain(&mut self, chain: Chain) -> LoadRequest {
        log::info!("selected chain {} ({})", chain.id, chain.status.as_str());

        self.generation += 1;
        self.selected_chain = Some(chain.clone());
        self.view = View::Dashboard;
        self.selection = Selection::None;
        self.selected_row = 0;
        self.chain_info = None;
        self.blocks.clear();
        self.stats = None;
        self.loading = LoadingState {
            chain_info: true,
            blocks: true,
            stats: true,
            search: false,
        };
        self.error = None;

        LoadRequest {
            generation: self.generation,
            chain,
        }
    }

    pub fn selected_chain(&self) -> Option<&Chain> {
        self.selected_chain.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ==================== Loading ====================

    /// Mark the three dashboard slices as loading and clear the last error
    pub fn begin_load(&mut self) -> Option<LoadRequest> {
        let chain = self.selected_chain.clone()?;

        self.loading.chain_info = true;
        self.loading.blocks = true;
        self.loading.stats = true;
        self.error = None;

        Some(LoadRequest {
            generation: self.generation,
            chain,
        })
    }

    pub fn refresh(&mut self) -> RefreshPlan {
        if self.view != View::Dashboard {
            log::info!("Refresh is not available for the {} view", self.view.as_str());
            return RefreshPlan::Unsupported(self.view);
        }

        match self.begin_load() {
            Some(request) => RefreshPlan::Reload(request),
            None => RefreshPlan::NoChain,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.any()
    }

    /// Apply a completed load or search. Results from an older generation
    /// are dropped without touching state. Returns whether it was applied.
    pub fn apply_message(&mut self, msg: AsyncMessage) -> bool {
        if msg.generation() != self.generation {
            log::debug!(
                "discarding stale result from generation {} (current {})",
                msg.generation(),
                self.generation
            );
            return false;
        }

        match msg {
            AsyncMessage::ChainInfo(_, result) => {
                self.loading.chain_info = false;
                match result {
                    Ok(info) => self.chain_info = Some(info),
                    Err(e) => self.set_error(format!("{e:#}")),
                }
            }
            AsyncMessage::Blocks(_, result) => {
                self.loading.blocks = false;
                match result {
                    Ok(blocks) => {
                        self.blocks = blocks;
                        self.clamp_row();
                    }
                    Err(e) => self.set_error(format!("{e:#}")),
                }
            }
            AsyncMessage::Stats(_, result) => {
                self.loading.stats = false;
                match result {
                    Ok(stats) => self.stats = Some(stats),
                    Err(e) => self.set_error(format!("{e:#}")),
                }
            }
            AsyncMessage::Search(_, result) => {
                self.loading.search = false;
                match result {
                    Ok(SearchHit::Block(block)) => self.select_block(block),
                    Ok(SearchHit::Transaction(detail)) => self.select_tx(detail),
                    Ok(SearchHit::Address(record)) => self.select_address(record),
                    Err(e) => self.set_error(e.to_string()),
                }
            }
        }

        true
    }

    pub fn set_error(&mut self, msg: String) {
        log::warn!("{msg}");
        self.error = Some(msg);
    }

    /// Height that synthetic address history is anchored to
    pub fn tip_height(&self) -> u64 {
        self.stats
            .as_ref()
            .map(|s| s.blocks)
            .or_else(|| self.chain_info.as_ref().map(|i| i.blocks))
            .or_else(|| self.blocks.first().map(|b| b.height))
            .unwrap_or(0)
    }

    // ==================== Search ====================

    /// Start a search for `query`. Empty queries are ignored.
    pub fn begin_search(&mut self, query: &str) -> Option<SearchRequest> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }

        let parsed = SearchQuery::parse(trimmed);
        log::info!("search {trimmed:?} classified as {}", parsed.description());

        self.loading.search = true;
        self.error = None;

        Some(SearchRequest {
            generation: self.generation,
            query: parsed,
            blocks: self.blocks.clone(),
            tip: self.tip_height(),
        })
    }

    pub fn focus_search(&mut self) {
        self.search_focused = true;
    }

    pub fn blur_search(&mut self) {
        self.search_focused = false;
        self.selected_history_index = None;
    }

    /// Take the typed query, remember it, and clear the input
    pub fn submit_search(&mut self) -> Option<String> {
        let query = self.search_input.value().trim().to_string();
        if query.is_empty() {
            return None;
        }

        self.search_input.reset();
        self.remember_search(query.clone());
        Some(query)
    }

    pub fn remember_search(&mut self, query: String) {
        if self.persist {
            if let Err(e) = self.config.add_recent_search(query) {
                log::warn!("could not save recent searches: {e:#}");
            }
        } else {
            self.config.push_recent_search(query);
        }
    }

    pub fn get_recent_searches(&self) -> &[String] {
        &self.config.recent_searches
    }

    pub fn select_history_prev(&mut self) {
        let len = self.config.recent_searches.len();
        if len == 0 {
            return;
        }

        self.selected_history_index = match self.selected_history_index {
            None => Some(len - 1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    pub fn select_history_next(&mut self) {
        let len = self.config.recent_searches.len();
        if len == 0 {
            return;
        }

        self.selected_history_index = match self.selected_history_index {
            None => Some(0),
            Some(i) if i >= len - 1 => None,
            Some(i) => Some(i + 1),
        };
    }

    pub fn get_selected_history_query(&self) -> Option<String> {
        self.selected_history_index
            .and_then(|i| self.config.recent_searches.get(i).cloned())
    }

    pub fn clear_history_selection(&mut self) {
        self.selected_history_index = None;
    }

    pub fn delete_selected_history(&mut self) {
        let Some(idx) = self.selected_history_index else {
            return;
        };
        if idx >= self.config.recent_searches.len() {
            return;
        }

        self.config.recent_searches.remove(idx);
        if self.persist {
            if let Err(e) = self.config.save() {
                log::warn!("could not save recent searches: {e:#}");
            }
        }

        if self.config.recent_searches.is_empty() {
            self.selected_history_index = None;
        } else if idx >= self.config.recent_searches.len() {
            self.selected_history_index = Some(self.config.recent_searches.len() - 1);
        }
    }

    // ==================== View router ====================

    pub fn view(&self) -> View {
        self.view
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_block(&self) -> Option<&Block> {
        match &self.selection {
            Selection::Block(block) => Some(block),
            _ => None,
        }
    }

    pub fn selected_tx(&self) -> Option<&TxDetail> {
        match &self.selection {
            Selection::Transaction(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn selected_address(&self) -> Option<&AddressRecord> {
        match &self.selection {
            Selection::Address(record) => Some(record),
            _ => None,
        }
    }

    pub fn select_block(&mut self, block: Block) {
        self.open(Selection::Block(block));
    }

    pub fn select_tx(&mut self, detail: TxDetail) {
        self.open(Selection::Transaction(detail));
    }

    pub fn select_address(&mut self, record: AddressRecord) {
        self.open(Selection::Address(record));
    }

    fn open(&mut self, selection: Selection) {
        self.view = selection.view().unwrap_or(View::Dashboard);
        self.selection = selection;
        self.selected_row = 0;
    }

    /// Show the dashboard, keeping the selection for breadcrumb re-entry
    pub fn goto_dashboard(&mut self) {
        self.view = View::Dashboard;
        self.selected_row = 0;
    }

    /// Breadcrumb label for the current selection
    pub fn breadcrumb(&self) -> Option<String> {
        self.selection.label()
    }

    /// Switch back to the selected entity's panel without re-fetching it
    pub fn open_breadcrumb(&mut self) -> bool {
        match self.selection.view() {
            Some(view) => {
                if self.view != view {
                    self.view = view;
                    self.selected_row = 0;
                }
                true
            }
            None => false,
        }
    }

    pub fn is_on_dashboard(&self) -> bool {
        self.view == View::Dashboard
    }

    // ==================== Pagination ====================

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
        self.selected_row = 0;
    }

    /// No upper bound: pages past the loaded blocks are simply empty
    pub fn next_page(&mut self) {
        self.page += 1;
        self.selected_row = 0;
    }

    pub fn blocks_on_page(&self) -> &[Block] {
        let start = (self.page - 1).saturating_mul(PER_PAGE);
        if start >= self.blocks.len() {
            return &[];
        }
        let end = (start + PER_PAGE).min(self.blocks.len());
        &self.blocks[start..end]
    }

    // ==================== Row selection ====================

    fn row_count(&self) -> usize {
        match (&self.view, &self.selection) {
            (View::Dashboard, _) => self.blocks_on_page().len(),
            (View::Block, Selection::Block(block)) => block.transactions.len(),
            (View::Transaction, Selection::Transaction(detail)) => tx_links(detail).len(),
            _ => 0,
        }
    }

    fn clamp_row(&mut self) {
        let count = self.row_count();
        if self.selected_row >= count {
            self.selected_row = count.saturating_sub(1);
        }
    }

    /// Move selection up
    pub fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_row + 1 < self.row_count() {
            self.selected_row += 1;
        }
    }

    /// Get the currently selected navigation link
    pub fn get_selected_link(&self) -> Option<NavLink> {
        match (&self.view, &self.selection) {
            (View::Dashboard, _) => self
                .blocks_on_page()
                .get(self.selected_row)
                .map(|b| NavLink::Block(b.height)),
            (View::Block, Selection::Block(block)) => {
                let in_range = self.selected_row < block.transactions.len();
                in_range.then_some(NavLink::Transaction(self.selected_row))
            }
            (View::Transaction, Selection::Transaction(detail)) => {
                tx_links(detail).into_iter().nth(self.selected_row)
            }
            _ => None,
        }
    }

    /// Open whatever a link points at. Blocks are looked up in the loaded list only.
    pub fn follow_link(&mut self, link: NavLink) {
        match link {
            NavLink::Block(height) => {
                let found = self
                    .blocks
                    .iter()
                    .find(|b| b.height == height)
                    .cloned()
                    .or_else(|| self.selected_block().filter(|b| b.height == height).cloned());
                match found {
                    Some(block) => self.select_block(block),
                    None => self.set_error(format!("Block #{height} not found")),
                }
            }
            NavLink::Transaction(index) => {
                let Some(block) = self.selected_block() else {
                    return;
                };
                let Some(tx) = block.transactions.get(index) else {
                    return;
                };
                let detail = build_tx_detail(&mut thread_rng(), tx, block);
                self.select_tx(detail);
            }
            NavLink::Address(address) => {
                let tip = self.tip_height();
                let record = generate_address_record(&mut thread_rng(), &address, tip, Utc::now());
                self.select_address(record);
            }
        }
    }
}

/// Links in a transaction view: parent block, then input and output addresses
pub fn tx_links(detail: &TxDetail) -> Vec<NavLink> {
    let mut links = vec![NavLink::Block(detail.block_height)];

    for input in &detail.inputs {
        if let TxInput::Spend { address, .. } = input {
            links.push(NavLink::Address(address.clone()));
        }
    }

    for output in &detail.outputs {
        links.push(NavLink::Address(output.address.clone()));
    }

    links
}
