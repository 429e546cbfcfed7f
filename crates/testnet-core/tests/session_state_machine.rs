//! Wallet session state machine tests
//!
//! Drive a `WalletSession` through connect, disconnect and network switches
//! against the mock backend and an in-memory store, checking both the
//! observable state and what ends up persisted.

use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use testnet_core::{
    Activity, Address, ConnectionStatus, FaucetRecord, KeyValueStore, MemoryStore, MintDraft,
    MintedNft, MockBackend, Network, NetworkStats, Notification, Notifier, PortalConfig,
    PortalError, PortalResult, ProgressReporter, RedbStore, Severity, Snapshot, StoreOp,
    WalletBackend, WalletSession, SNAPSHOT_KEY,
};
use tokio::sync::broadcast;

type MockSession = WalletSession<MockBackend, MemoryStore>;

struct Harness {
    session: MockSession,
    backend: Arc<MockBackend>,
    store: Arc<MemoryStore>,
    notifications: broadcast::Receiver<Notification>,
}

fn harness_with(config: PortalConfig, store: MemoryStore) -> Harness {
    let backend = Arc::new(MockBackend::new(config));
    let store = Arc::new(store);
    let notifier = Notifier::new();
    let notifications = notifier.subscribe();
    let session = WalletSession::restore(backend.clone(), store.clone(), notifier);
    Harness {
        session,
        backend,
        store,
        notifications,
    }
}

fn instant_harness() -> Harness {
    harness_with(PortalConfig::instant(), MemoryStore::new())
}

fn stored_snapshot(store: &impl KeyValueStore) -> Option<Snapshot> {
    store
        .get(SNAPSHOT_KEY)
        .unwrap()
        .map(|raw| Snapshot::decode(&raw).unwrap())
}

fn drain(rx: &mut broadcast::Receiver<Notification>) -> Vec<Notification> {
    let mut out = Vec::new();
    while let Ok(n) = rx.try_recv() {
        out.push(n);
    }
    out
}

// ============================================================================
// Connect
// ============================================================================

#[tokio::test]
async fn test_connect_persists_and_fetches_balance() {
    let mut h = instant_harness();

    let address = h.session.connect().await.unwrap();
    let state = h.session.state();

    assert_eq!(state.status, ConnectionStatus::Connected);
    assert_eq!(state.address.as_ref(), Some(&address));
    assert_eq!(state.balance, Some(1000));
    assert_eq!(state.network, Network::Devnet);

    let snap = stored_snapshot(h.store.as_ref()).unwrap();
    assert_eq!(snap.address, address);
    assert_eq!(snap.network, Network::Devnet);

    let notes = drain(&mut h.notifications);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Wallet Connected");
    assert_eq!(notes[0].description, "Connected to devnet successfully.");
    assert_eq!(notes[0].severity, Severity::Default);
}

#[tokio::test(start_paused = true)]
async fn test_connect_passes_through_connecting() {
    let h = harness_with(PortalConfig::default(), MemoryStore::new());
    let mut rx = h.session.subscribe();

    let session = h.session.clone();
    let task = tokio::spawn(async move { session.connect().await });

    rx.changed().await.unwrap();
    let connecting = rx.borrow_and_update().clone();
    assert_eq!(connecting.status, ConnectionStatus::Connecting);
    assert!(connecting.address.is_none());

    task.await.unwrap().unwrap();
    assert!(h.session.state().is_connected());
}

#[tokio::test(start_paused = true)]
async fn test_second_connect_while_connecting_is_rejected() {
    let h = harness_with(PortalConfig::default(), MemoryStore::new());

    let session = h.session.clone();
    let first = tokio::spawn(async move { session.connect().await });
    tokio::task::yield_now().await;
    assert!(h.session.state().is_connecting());

    let second = h.session.connect().await;
    assert!(matches!(second, Err(PortalError::ConnectInProgress)));

    first.await.unwrap().unwrap();
    assert_eq!(h.store.writes_for(SNAPSHOT_KEY).len(), 1);
}

#[tokio::test]
async fn test_failed_connect_reverts_and_notifies() {
    let mut h = instant_harness();
    h.backend.fail_next_connects(1);

    let result = h.session.connect().await;
    assert!(matches!(result, Err(PortalError::ConnectFailed(_))));

    let state = h.session.state();
    assert_eq!(state.status, ConnectionStatus::Disconnected);
    assert!(state.address.is_none());
    assert!(h.store.operations().is_empty());

    let notes = drain(&mut h.notifications);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Connection Failed");
    assert!(notes[0].is_destructive());

    // The user may simply try again
    h.session.connect().await.unwrap();
    assert!(h.session.state().is_connected());
}

#[tokio::test(start_paused = true)]
async fn test_connect_takes_configured_latency() {
    let h = harness_with(PortalConfig::default(), MemoryStore::new());
    let started = tokio::time::Instant::now();
    h.session.connect().await.unwrap();
    // 1500 ms to connect plus 1000 ms for the first balance
    assert_eq!(started.elapsed(), Duration::from_millis(2500));
}

#[tokio::test(start_paused = true)]
async fn test_connect_finishes_after_caller_is_dropped() {
    let mut h = harness_with(PortalConfig::default(), MemoryStore::new());
    let mut rx = h.session.subscribe();

    let session = h.session.clone();
    let task = tokio::spawn(async move { session.connect().await });

    // The caller goes away the moment the wallet shows as connected, as a
    // connect prompt does when its page swaps in the connected layout.
    rx.wait_for(|s| s.is_connected()).await.unwrap();
    task.abort();

    tokio::time::sleep(Duration::from_secs(10)).await;

    let state = h.session.state();
    assert!(state.is_connected());
    assert_eq!(state.balance, Some(1000));

    let titles: Vec<_> = drain(&mut h.notifications)
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(titles, ["Wallet Connected"]);
}

// ============================================================================
// Network switching
// ============================================================================

#[tokio::test]
async fn test_switch_while_disconnected_only_changes_network() {
    let mut h = instant_harness();

    h.session.switch_network(Network::Testnet).await;

    let state = h.session.state();
    assert_eq!(state.network, Network::Testnet);
    assert_eq!(state.status, ConnectionStatus::Disconnected);
    assert!(state.address.is_none());
    assert!(h.store.operations().is_empty());
    assert!(drain(&mut h.notifications).is_empty());
}

#[tokio::test]
async fn test_switch_while_connected_persists_and_refetches() {
    let mut h = instant_harness();
    let address = h.session.connect().await.unwrap();
    drain(&mut h.notifications);

    h.session.switch_network(Network::Testnet).await;

    let state = h.session.state();
    assert_eq!(state.network, Network::Testnet);
    assert_eq!(state.balance, Some(500));
    assert_eq!(state.address.as_ref(), Some(&address));

    let snap = stored_snapshot(h.store.as_ref()).unwrap();
    assert_eq!(snap.network, Network::Testnet);
    assert_eq!(snap.address, address);

    let notes = drain(&mut h.notifications);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Network Switched");
    assert_eq!(notes[0].description, "Switched to testnet successfully.");
}

#[tokio::test(start_paused = true)]
async fn test_switch_during_connect_lands_in_single_write() {
    let h = harness_with(PortalConfig::default(), MemoryStore::new());

    let session = h.session.clone();
    let connect = tokio::spawn(async move { session.connect().await });
    tokio::task::yield_now().await;

    h.session.switch_network(Network::Testnet).await;
    let address = connect.await.unwrap().unwrap();

    let writes = h.store.writes_for(SNAPSHOT_KEY);
    assert_eq!(writes.len(), 1);
    let snap = Snapshot::decode(&writes[0]).unwrap();
    assert_eq!(snap.network, Network::Testnet);
    assert_eq!(snap.address, address);

    let state = h.session.state();
    assert_eq!(state.network, Network::Testnet);
    assert_eq!(state.balance, Some(500));
}

// ============================================================================
// Disconnect
// ============================================================================

#[tokio::test]
async fn test_disconnect_clears_state_and_snapshot() {
    let mut h = instant_harness();
    h.session.connect().await.unwrap();
    h.session.switch_network(Network::Testnet).await;
    drain(&mut h.notifications);

    h.session.disconnect();

    let state = h.session.state();
    assert_eq!(state.status, ConnectionStatus::Disconnected);
    assert!(state.address.is_none());
    assert!(state.balance.is_none());
    // The selected network survives a disconnect
    assert_eq!(state.network, Network::Testnet);

    assert!(h.store.get(SNAPSHOT_KEY).unwrap().is_none());
    assert_eq!(
        h.store.operations().last(),
        Some(&StoreOp::Remove {
            key: SNAPSHOT_KEY.to_string()
        })
    );

    let notes = drain(&mut h.notifications);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Wallet Disconnected");
}

#[tokio::test(start_paused = true)]
async fn test_disconnect_discards_pending_connect() {
    let h = harness_with(PortalConfig::default(), MemoryStore::new());

    let session = h.session.clone();
    let connect = tokio::spawn(async move { session.connect().await });
    tokio::task::yield_now().await;

    h.session.disconnect();
    let result = connect.await.unwrap();

    assert!(matches!(result, Err(PortalError::Superseded)));
    assert_eq!(h.session.state().status, ConnectionStatus::Disconnected);
    assert!(h.store.writes_for(SNAPSHOT_KEY).is_empty());
}

// ============================================================================
// Startup restore
// ============================================================================

#[tokio::test]
async fn test_restore_valid_snapshot() {
    let address = Address::from_bytes([0xab; 20]);
    let raw = Snapshot::new(address.clone(), Network::Testnet).encode().unwrap();
    let h = harness_with(
        PortalConfig::instant(),
        MemoryStore::new().with_entry(SNAPSHOT_KEY, &raw),
    );

    let state = h.session.state();
    assert_eq!(state.status, ConnectionStatus::Connected);
    assert_eq!(state.address, Some(address));
    assert_eq!(state.network, Network::Testnet);
    assert_eq!(state.balance, None);

    assert_eq!(h.session.resume().await.unwrap(), Some(500));
    assert_eq!(h.session.state().balance, Some(500));
}

#[tokio::test]
async fn test_restore_without_network_defaults_to_devnet() {
    let raw = format!(r#"{{"address":"0x{}"}}"#, "1".repeat(40));
    let h = harness_with(
        PortalConfig::instant(),
        MemoryStore::new().with_entry(SNAPSHOT_KEY, &raw),
    );
    assert!(h.session.state().is_connected());
    assert_eq!(h.session.state().network, Network::Devnet);
}

#[test]
fn test_restore_malformed_snapshot_stays_disconnected() {
    let cases = [
        "{not json",
        r#"{"network":"devnet"}"#,
        r#"{"address":"bob","network":"devnet"}"#,
        r#"{"address":"0x1111111111111111111111111111111111111111","network":"mainnet"}"#,
        "[]",
    ];

    for raw in cases {
        let h = harness_with(
            PortalConfig::instant(),
            MemoryStore::new().with_entry(SNAPSHOT_KEY, raw),
        );
        let state = h.session.state();
        assert_eq!(state.status, ConnectionStatus::Disconnected, "{raw}");
        assert!(state.address.is_none(), "{raw}");
        assert!(h.store.get(SNAPSHOT_KEY).unwrap().is_none(), "{raw}");
    }
}

#[tokio::test]
async fn test_redb_session_survives_restart() {
    let temp = TempDir::new().unwrap();
    let db_path = temp.path().join("portal.redb");
    let backend = Arc::new(MockBackend::new(PortalConfig::instant()));

    let address = {
        let store = Arc::new(RedbStore::new(&db_path).unwrap());
        let session = WalletSession::restore(backend.clone(), store, Notifier::new());
        let address = session.connect().await.unwrap();
        session.switch_network(Network::Testnet).await;
        address
    };

    let store = Arc::new(RedbStore::new(&db_path).unwrap());
    let session = WalletSession::restore(backend, store, Notifier::new());
    let state = session.state();
    assert_eq!(state.address, Some(address));
    assert_eq!(state.network, Network::Testnet);
}

// ============================================================================
// Stale responses
// ============================================================================

/// Mock backend whose devnet balance answers much slower than testnet.
struct SkewedBackend {
    inner: MockBackend,
}

impl WalletBackend for SkewedBackend {
    async fn connect(&self) -> PortalResult<Address> {
        self.inner.connect().await
    }

    async fn fetch_balance(&self, address: &Address, network: Network) -> PortalResult<u64> {
        let delay = match network {
            Network::Devnet => Duration::from_secs(3),
            Network::Testnet => Duration::from_millis(100),
        };
        tokio::time::sleep(delay).await;
        self.inner.fetch_balance(address, network).await
    }

    async fn request_faucet(
        &self,
        address: &Address,
        network: Network,
        amount: u64,
        progress: ProgressReporter,
    ) -> PortalResult<FaucetRecord> {
        self.inner.request_faucet(address, network, amount, progress).await
    }

    async fn mint_nft(
        &self,
        owner: &Address,
        network: Network,
        draft: &MintDraft,
        progress: ProgressReporter,
    ) -> PortalResult<MintedNft> {
        self.inner.mint_nft(owner, network, draft, progress).await
    }

    async fn recent_activity(&self, address: &Address, network: Network) -> PortalResult<Vec<Activity>> {
        self.inner.recent_activity(address, network).await
    }

    async fn network_stats(&self, network: Network) -> PortalResult<NetworkStats> {
        self.inner.network_stats(network).await
    }
}

#[tokio::test(start_paused = true)]
async fn test_stale_balance_never_overwrites_newer() {
    let raw = Snapshot::new(Address::from_bytes([7; 20]), Network::Devnet)
        .encode()
        .unwrap();
    let backend = Arc::new(SkewedBackend {
        inner: MockBackend::new(PortalConfig::instant()),
    });
    let store = Arc::new(MemoryStore::new().with_entry(SNAPSHOT_KEY, &raw));
    let session = WalletSession::restore(backend, store, Notifier::new());

    let slow = {
        let session = session.clone();
        tokio::spawn(async move { session.resume().await })
    };
    tokio::task::yield_now().await;

    session.switch_network(Network::Testnet).await;
    assert_eq!(session.state().balance, Some(500));

    // The devnet answer arrives afterwards and is dropped
    assert_eq!(slow.await.unwrap().unwrap(), None);
    assert_eq!(session.state().balance, Some(500));
    assert_eq!(session.state().network, Network::Testnet);
}

#[tokio::test(start_paused = true)]
async fn test_balance_after_disconnect_is_dropped() {
    let raw = Snapshot::new(Address::from_bytes([8; 20]), Network::Devnet)
        .encode()
        .unwrap();
    let h = harness_with(
        PortalConfig::default(),
        MemoryStore::new().with_entry(SNAPSHOT_KEY, &raw),
    );

    let pending = {
        let session = h.session.clone();
        tokio::spawn(async move { session.resume().await })
    };
    tokio::task::yield_now().await;

    h.session.disconnect();
    assert_eq!(pending.await.unwrap().unwrap(), None);
    assert!(h.session.state().balance.is_none());
}
