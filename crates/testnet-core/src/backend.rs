//! Wallet backend port and the mock implementation.
//!
//! Every "network" call the portal makes goes through [`WalletBackend`]. The
//! only implementation today is [`MockBackend`], which sleeps for the
//! configured latency and fabricates a plausible answer.

use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{Duration as ChronoDuration, Utc};
use rand::Rng;

use crate::config::PortalConfig;
use crate::error::{PortalError, PortalResult};
use crate::faucet::{FaucetRecord, RequestStatus};
use crate::nft::{MintDraft, MintedNft};
use crate::types::{Activity, ActivityKind, Address, Network, NetworkStats};
use crate::workflow::ProgressReporter;

/// Provider for everything the portal would ask a real chain.
pub trait WalletBackend: Send + Sync + 'static {
    /// Open a wallet connection and return its address.
    fn connect(&self) -> impl Future<Output = PortalResult<Address>> + Send;

    /// Current balance of `address` on `network`, in whole tokens.
    fn fetch_balance(
        &self,
        address: &Address,
        network: Network,
    ) -> impl Future<Output = PortalResult<u64>> + Send;

    /// Ask the faucet for `amount` tokens, reporting progress as it goes.
    fn request_faucet(
        &self,
        address: &Address,
        network: Network,
        amount: u64,
        progress: ProgressReporter,
    ) -> impl Future<Output = PortalResult<FaucetRecord>> + Send;

    /// Mint `draft` for `owner`, reporting progress as it goes.
    fn mint_nft(
        &self,
        owner: &Address,
        network: Network,
        draft: &MintDraft,
        progress: ProgressReporter,
    ) -> impl Future<Output = PortalResult<MintedNft>> + Send;

    /// Recent transactions for the dashboard feed.
    fn recent_activity(
        &self,
        address: &Address,
        network: Network,
    ) -> impl Future<Output = PortalResult<Vec<Activity>>> + Send;

    /// Network health numbers for the dashboard.
    fn network_stats(&self, network: Network) -> impl Future<Output = PortalResult<NetworkStats>> + Send;
}

/// Backend that fakes every call with timers and random ids.
#[derive(Debug)]
pub struct MockBackend {
    config: PortalConfig,
    pending_connect_failures: AtomicU32,
}

impl MockBackend {
    pub fn new(config: PortalConfig) -> Self {
        Self {
            config,
            pending_connect_failures: AtomicU32::new(0),
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Make the next `count` connect attempts fail.
    pub fn fail_next_connects(&self, count: u32) {
        self.pending_connect_failures.store(count, Ordering::SeqCst);
    }

    fn take_connect_failure(&self) -> bool {
        self.pending_connect_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(PortalConfig::default())
    }
}

/// Random 20-byte address, hex encoded.
fn random_address() -> Address {
    let mut bytes = [0u8; 20];
    rand::rng().fill(&mut bytes);
    Address::from_bytes(bytes)
}

/// Random object id in the `0x` + 8 hex digits form used for minted NFTs.
fn random_object_id() -> String {
    let mut bytes = [0u8; 4];
    rand::rng().fill(&mut bytes);
    format!("0x{}", hex::encode(bytes))
}

impl WalletBackend for MockBackend {
    async fn connect(&self) -> PortalResult<Address> {
        tokio::time::sleep(self.config.timing.connect_latency()).await;

        if self.take_connect_failure() {
            return Err(PortalError::ConnectFailed(
                "wallet rejected the connection request".to_string(),
            ));
        }

        let address = random_address();
        tracing::debug!(address = %address, "Mock wallet connected");
        Ok(address)
    }

    async fn fetch_balance(&self, address: &Address, network: Network) -> PortalResult<u64> {
        tokio::time::sleep(self.config.timing.balance_latency()).await;
        let balance = self.config.balances.for_network(network);
        tracing::debug!(address = %address.short(), %network, balance, "Mock balance fetched");
        Ok(balance)
    }

    async fn request_faucet(
        &self,
        address: &Address,
        network: Network,
        amount: u64,
        progress: ProgressReporter,
    ) -> PortalResult<FaucetRecord> {
        progress.drive(&self.config.timing.faucet).await;

        let requested_at = Utc::now();
        tracing::debug!(address = %address.short(), %network, amount, "Mock faucet paid out");
        Ok(FaucetRecord {
            id: format!("req-{}", requested_at.timestamp_millis()),
            amount,
            network,
            requested_at,
            status: RequestStatus::Completed,
        })
    }

    async fn mint_nft(
        &self,
        owner: &Address,
        network: Network,
        draft: &MintDraft,
        progress: ProgressReporter,
    ) -> PortalResult<MintedNft> {
        let image = draft.image.clone().ok_or(PortalError::IncompleteDraft("image"))?;
        progress.drive(&self.config.timing.mint).await;

        let nft = MintedNft {
            id: random_object_id(),
            name: draft.name.trim().to_string(),
            description: draft.description.clone(),
            image,
            owner: owner.clone(),
            network,
            minted_at: Utc::now(),
        };
        tracing::debug!(id = %nft.id, %network, "Mock NFT minted");
        Ok(nft)
    }

    async fn recent_activity(&self, _address: &Address, _network: Network) -> PortalResult<Vec<Activity>> {
        tokio::time::sleep(self.config.timing.activity_latency()).await;

        let now = Utc::now();
        Ok(vec![
            Activity {
                id: "tx-1".to_string(),
                kind: ActivityKind::Transfer,
                amount: 10,
                status: "Confirmed".to_string(),
                timestamp: now - ChronoDuration::hours(1),
            },
            Activity {
                id: "tx-2".to_string(),
                kind: ActivityKind::NftMint,
                amount: -5,
                status: "Confirmed".to_string(),
                timestamp: now - ChronoDuration::days(1),
            },
            Activity {
                id: "tx-3".to_string(),
                kind: ActivityKind::ContractCall,
                amount: -2,
                status: "Confirmed".to_string(),
                timestamp: now - ChronoDuration::days(2),
            },
        ])
    }

    async fn network_stats(&self, _network: Network) -> PortalResult<NetworkStats> {
        Ok(NetworkStats {
            gas_usage_percent: 64,
            block_height: 1_243_098,
            operational: true,
        })
    }
}
