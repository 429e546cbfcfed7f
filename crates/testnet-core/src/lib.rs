//! Testnet Portal Core Library
//!
//! Wallet session store and simulated testnet workflows for the portal.
//!
//! ## Overview
//!
//! Nothing here talks to a real chain. The portal models a wallet session
//! (connect, disconnect, network switch, balance refresh) and a handful of
//! page-level workflows (faucet requests, NFT mints) that stand in for
//! backend calls with timed progress.
//!
//! ## Core Pieces
//!
//! - **Session**: [`WalletSession`] owns connection status, address, balance
//!   and network. It persists a [`Snapshot`] through a [`KeyValueStore`].
//! - **Backend**: every simulated call goes through [`WalletBackend`];
//!   [`MockBackend`] fabricates results after configurable delays.
//! - **Workflows**: [`Faucet`] and [`NftMinter`] drive a [`Workflow`] with
//!   stepped progress and keep a page-local history.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use testnet_core::{MemoryStore, MockBackend, Network, Notifier, PortalConfig, WalletSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PortalConfig::default();
//!     let backend = Arc::new(MockBackend::new(config.clone()));
//!     let store = Arc::new(MemoryStore::new());
//!     let session = WalletSession::restore(backend, store, Notifier::new());
//!
//!     let address = session.connect().await?;
//!     session.switch_network(Network::Testnet).await;
//!     println!("{} holds {:?}", address, session.state().balance);
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod faucet;
pub mod logging;
pub mod nft;
pub mod notification;
pub mod session;
pub mod snapshot;
pub mod storage;
pub mod token;
pub mod types;
pub mod workflow;

// Re-exports
pub use backend::{MockBackend, WalletBackend};
pub use config::{MockBalances, PortalConfig, ProgressPlan, SimulationTiming};
pub use error::{PortalError, PortalResult};
pub use faucet::{Faucet, FaucetRecord, RequestStatus};
pub use nft::{MintDraft, MintedNft, NftImage, NftMinter};
pub use notification::{Notification, Notifier, Severity};
pub use session::WalletSession;
pub use snapshot::{Snapshot, SNAPSHOT_KEY};
pub use storage::{KeyValueStore, MemoryStore, RedbStore, StoreOp};
pub use token::{RequestToken, TokenCounter};
pub use types::*;
pub use workflow::{ProgressReporter, Workflow};
