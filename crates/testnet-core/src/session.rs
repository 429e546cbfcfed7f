//! Wallet session store.
//!
//! [`WalletSession`] is the single source of truth for connection status,
//! address, balance and network. The state lives in a `watch` channel so any
//! number of views can follow it; mutations go through the methods below.
//!
//! ## State machine
//!
//! ```text
//! Disconnected ──connect()──▶ Connecting ──backend ok──▶ Connected
//!      ▲                          │                          │
//!      └───────backend error──────┘                          │
//!      └────────────────────disconnect()─────────────────────┘
//!
//! switch_network() is a self-transition in every state.
//! ```
//!
//! ## Overlapping requests
//!
//! Connect and balance responses carry a [`RequestToken`]. A response is only
//! applied when its token is still the latest issued for that field, so a
//! slow balance fetch for a network the user already switched away from can
//! never overwrite the newer value. `disconnect()` invalidates both counters.

use std::sync::Arc;

use tokio::sync::watch;

use crate::backend::WalletBackend;
use crate::error::{PortalError, PortalResult};
use crate::notification::{Notification, Notifier};
use crate::snapshot::{Snapshot, SNAPSHOT_KEY};
use crate::storage::KeyValueStore;
use crate::token::{RequestToken, TokenCounter};
use crate::types::{Address, ConnectionStatus, Network, SessionState};

#[derive(Debug, Default)]
struct SessionTokens {
    connect: TokenCounter,
    balance: TokenCounter,
}

/// Owned wallet session with injected backend and storage.
///
/// Cloning is cheap and every clone drives the same session.
pub struct WalletSession<B, S> {
    backend: Arc<B>,
    store: Arc<S>,
    state: Arc<watch::Sender<SessionState>>,
    tokens: Arc<SessionTokens>,
    notifier: Notifier,
}

impl<B, S> Clone for WalletSession<B, S> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            store: self.store.clone(),
            state: self.state.clone(),
            tokens: self.tokens.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<B, S> PartialEq for WalletSession<B, S> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

enum ConnectStart {
    Started(RequestToken),
    InProgress,
    AlreadyConnected(Option<Address>),
}

impl<B: WalletBackend, S: KeyValueStore> WalletSession<B, S> {
    /// Build a session, optimistically restoring a persisted snapshot.
    ///
    /// A well-formed snapshot yields a `Connected` session with no balance
    /// yet; call [`resume`](Self::resume) to fetch it. A malformed snapshot is
    /// removed and the session starts `Disconnected`.
    pub fn restore(backend: Arc<B>, store: Arc<S>, notifier: Notifier) -> Self {
        let initial = Self::read_snapshot(store.as_ref())
            .map(|snap| {
                tracing::info!(address = %snap.address.short(), network = %snap.network, "Restored wallet session");
                SessionState {
                    status: ConnectionStatus::Connected,
                    address: Some(snap.address),
                    balance: None,
                    network: snap.network,
                }
            })
            .unwrap_or_default();

        let (tx, _) = watch::channel(initial);
        Self {
            backend,
            store,
            state: Arc::new(tx),
            tokens: Arc::new(SessionTokens::default()),
            notifier,
        }
    }

    fn read_snapshot(store: &S) -> Option<Snapshot> {
        let raw = match store.get(SNAPSHOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read wallet snapshot");
                return None;
            }
        };

        match Snapshot::decode(&raw) {
            Ok(snap) => Some(snap),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed wallet snapshot");
                if let Err(e) = store.remove(SNAPSHOT_KEY) {
                    tracing::warn!(error = %e, "Could not remove malformed wallet snapshot");
                }
                None
            }
        }
    }

    /// Current state (cloned).
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Follow state changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Finish startup restoration by fetching the balance of a restored session.
    pub async fn resume(&self) -> PortalResult<Option<u64>> {
        self.refresh_balance().await
    }

    /// Connect the wallet.
    ///
    /// Returns the current address without doing anything when already
    /// connected, and [`PortalError::ConnectInProgress`] while another connect
    /// is in flight.
    pub async fn connect(&self) -> PortalResult<Address> {
        let mut start = ConnectStart::InProgress;
        self.state.send_if_modified(|s| match s.status {
            ConnectionStatus::Disconnected => {
                s.status = ConnectionStatus::Connecting;
                start = ConnectStart::Started(self.tokens.connect.issue());
                true
            }
            ConnectionStatus::Connecting => false,
            ConnectionStatus::Connected => {
                start = ConnectStart::AlreadyConnected(s.address.clone());
                false
            }
        });

        let token = match start {
            ConnectStart::Started(token) => token,
            ConnectStart::InProgress => return Err(PortalError::ConnectInProgress),
            ConnectStart::AlreadyConnected(Some(address)) => return Ok(address),
            ConnectStart::AlreadyConnected(None) => return Err(PortalError::NotConnected),
        };

        tracing::info!("Connecting wallet");

        match self.backend.connect().await {
            Ok(address) => self.finish_connect(token, address).await,
            Err(e) => {
                let reverted = self.state.send_if_modified(|s| {
                    if !self.tokens.connect.is_latest(token) || s.status != ConnectionStatus::Connecting {
                        return false;
                    }
                    s.status = ConnectionStatus::Disconnected;
                    true
                });

                if reverted {
                    tracing::warn!(error = %e, "Wallet connection failed");
                    self.notifier.notify(Notification::destructive(
                        "Connection Failed",
                        "Could not connect to wallet. Please try again.",
                    ));
                }
                Err(e)
            }
        }
    }

    async fn finish_connect(&self, token: RequestToken, address: Address) -> PortalResult<Address> {
        // The network is read at completion time: a switch made while the
        // connection was pending must end up in the snapshot.
        let mut network = None;
        self.state.send_if_modified(|s| {
            if !self.tokens.connect.is_latest(token) || s.status != ConnectionStatus::Connecting {
                return false;
            }
            s.status = ConnectionStatus::Connected;
            s.address = Some(address.clone());
            s.balance = None;
            network = Some(s.network);
            true
        });

        let Some(network) = network else {
            tracing::debug!(address = %address.short(), "Discarding superseded connect result");
            return Err(PortalError::Superseded);
        };

        tracing::info!(address = %address.short(), %network, "Wallet connected");
        self.persist(&address, network);

        // Once Connected, the balance fetch and the announcement run on their
        // own task: dropping this future must not lose either of them.
        let session = self.clone();
        let follow_up = tokio::spawn(async move {
            if let Err(e) = session.refresh_balance().await {
                tracing::warn!(error = %e, "Initial balance fetch failed");
            }
            session.notifier.notify(Notification::info(
                "Wallet Connected",
                format!("Connected to {} successfully.", network),
            ));
        });
        if let Err(e) = follow_up.await {
            tracing::error!(error = %e, "Post-connect task failed");
        }
        Ok(address)
    }

    /// Drop the connection, clear address and balance, forget the snapshot.
    pub fn disconnect(&self) {
        self.tokens.connect.invalidate();
        self.tokens.balance.invalidate();

        self.state.send_modify(|s| {
            s.status = ConnectionStatus::Disconnected;
            s.address = None;
            s.balance = None;
        });

        if let Err(e) = self.store.remove(SNAPSHOT_KEY) {
            tracing::warn!(error = %e, "Could not remove wallet snapshot");
        }

        tracing::info!("Wallet disconnected");
        self.notifier.notify(Notification::info(
            "Wallet Disconnected",
            "Your wallet has been disconnected.",
        ));
    }

    /// Select `target` as the active network.
    ///
    /// Always updates the in-memory network. When connected it also
    /// re-persists the snapshot, announces the switch and refetches the
    /// balance for the new network.
    pub async fn switch_network(&self, target: Network) {
        let mut connected_as = None;
        self.state.send_if_modified(|s| {
            connected_as = s.connected_identity().map(|(address, _)| address);
            if s.network == target {
                return false;
            }
            s.network = target;
            true
        });

        let Some(address) = connected_as else {
            tracing::debug!(network = %target, "Default network changed while disconnected");
            return;
        };

        self.persist(&address, target);
        tracing::info!(network = %target, "Switched network");
        self.notifier.notify(Notification::info(
            "Network Switched",
            format!("Switched to {} successfully.", target),
        ));

        if let Err(e) = self.refresh_balance().await {
            tracing::warn!(error = %e, "Balance fetch after network switch failed");
        }
    }

    /// Fetch the balance for the current address and network.
    ///
    /// Returns `Ok(None)` when not connected or when a newer request
    /// superseded this one before it resolved.
    pub async fn refresh_balance(&self) -> PortalResult<Option<u64>> {
        let identity = self.state.borrow().connected_identity();
        let Some((address, network)) = identity else {
            return Ok(None);
        };

        let token = self.tokens.balance.issue();
        let balance = self.backend.fetch_balance(&address, network).await?;

        let applied = self.state.send_if_modified(|s| {
            if !self.tokens.balance.is_latest(token) || s.address.as_ref() != Some(&address) {
                return false;
            }
            s.balance = Some(balance);
            true
        });

        if applied {
            tracing::debug!(%network, balance, "Balance updated");
            Ok(Some(balance))
        } else {
            tracing::debug!(%network, balance, "Discarding stale balance response");
            Ok(None)
        }
    }

    fn persist(&self, address: &Address, network: Network) {
        let snapshot = Snapshot::new(address.clone(), network);
        let result = snapshot
            .encode()
            .and_then(|raw| self.store.set(SNAPSHOT_KEY, &raw));

        if let Err(e) = result {
            tracing::warn!(error = %e, "Could not persist wallet snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::config::PortalConfig;
    use crate::storage::MemoryStore;

    fn session() -> WalletSession<MockBackend, MemoryStore> {
        WalletSession::restore(
            Arc::new(MockBackend::new(PortalConfig::instant())),
            Arc::new(MemoryStore::new()),
            Notifier::new(),
        )
    }

    #[tokio::test]
    async fn connect_twice_is_a_no_op() {
        let session = session();
        let first = session.connect().await.unwrap();
        let second = session.connect().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn refresh_while_disconnected_does_nothing() {
        let session = session();
        assert_eq!(session.refresh_balance().await.unwrap(), None);
        assert_eq!(session.state().balance, None);
    }

    #[test]
    fn clones_compare_equal() {
        let a = session();
        let b = a.clone();
        assert!(a == b);
        assert!(a != session());
    }
}
