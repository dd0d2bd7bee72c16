//! mcex - Multi-Chain Explorer
//!
//! A terminal explorer for a Bitcoin mainchain and its drivechain sidechains.

pub mod app;
pub mod chain;
pub mod config;
pub mod loader;
pub mod provider;
pub mod search;
pub mod theme;
pub mod ui;

// Re-export commonly used types
pub use app::{App, NavLink, RefreshPlan, Selection, View};
pub use chain::{Chain, ChainStatus};
pub use config::Config;
pub use loader::{AsyncMessage, Loader};
pub use provider::{ChainDataProvider, SimulatedProvider};
