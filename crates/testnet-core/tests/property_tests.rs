//! Property-based tests for the wallet session
//!
//! Uses proptest to run arbitrary operation sequences and check the session
//! invariants after every step.

use std::sync::Arc;

use proptest::prelude::*;
use testnet_core::{
    Address, ConnectionStatus, KeyValueStore, MemoryStore, MockBackend, Network, Notifier,
    PortalConfig, Snapshot, WalletSession, SNAPSHOT_KEY,
};

// ============================================================================
// Strategy Generators
// ============================================================================

#[derive(Debug, Clone)]
enum SessionOp {
    Connect,
    FailedConnect,
    Disconnect,
    Switch(Network),
    Refresh,
}

fn network_strategy() -> impl Strategy<Value = Network> {
    prop_oneof![Just(Network::Devnet), Just(Network::Testnet)]
}

fn session_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<SessionOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(SessionOp::Connect),
            1 => Just(SessionOp::FailedConnect),
            2 => Just(SessionOp::Disconnect),
            3 => network_strategy().prop_map(SessionOp::Switch),
            1 => Just(SessionOp::Refresh),
        ],
        0..max_ops,
    )
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Address is present exactly when connected, and the stored snapshot
    /// always mirrors the connected identity.
    #[test]
    fn session_invariants_hold(ops in session_ops_strategy(30)) {
        let rt = runtime();
        rt.block_on(async {
            let backend = Arc::new(MockBackend::new(PortalConfig::instant()));
            let store = Arc::new(MemoryStore::new());
            let session = WalletSession::restore(backend.clone(), store.clone(), Notifier::new());

            for op in ops {
                match op {
                    SessionOp::Connect => {
                        let _ = session.connect().await;
                    }
                    SessionOp::FailedConnect => {
                        backend.fail_next_connects(1);
                        let _ = session.connect().await;
                        backend.fail_next_connects(0);
                    }
                    SessionOp::Disconnect => session.disconnect(),
                    SessionOp::Switch(network) => session.switch_network(network).await,
                    SessionOp::Refresh => {
                        let _ = session.refresh_balance().await;
                    }
                }

                let state = session.state();
                prop_assert_ne!(state.status, ConnectionStatus::Connecting);
                prop_assert_eq!(state.address.is_some(), state.status == ConnectionStatus::Connected);

                let stored = store
                    .get(SNAPSHOT_KEY)
                    .unwrap()
                    .map(|raw| Snapshot::decode(&raw).unwrap());
                match state.connected_identity() {
                    Some((address, network)) => {
                        let snap = stored.unwrap();
                        prop_assert_eq!(snap.address, address);
                        prop_assert_eq!(snap.network, network);
                        prop_assert_eq!(state.balance, Some(backend.config().balances.for_network(network)));
                    }
                    None => {
                        prop_assert!(stored.is_none());
                        prop_assert!(state.balance.is_none());
                    }
                }
            }
            Ok(())
        })?;
    }

    /// Any 20 bytes make a valid address that survives the snapshot format.
    #[test]
    fn snapshot_accepts_any_address(bytes in prop::array::uniform20(any::<u8>()), network in network_strategy()) {
        let address = Address::from_bytes(bytes);
        let raw = Snapshot::new(address.clone(), network).encode().unwrap();
        let decoded = Snapshot::decode(&raw).unwrap();
        prop_assert_eq!(decoded.address, address);
        prop_assert_eq!(decoded.network, network);
    }

    /// Restoring from any string never panics and only connects on a valid snapshot.
    #[test]
    fn restore_from_arbitrary_text(raw in ".{0,200}") {
        let store = Arc::new(MemoryStore::new().with_entry(SNAPSHOT_KEY, &raw));
        let session = WalletSession::restore(
            Arc::new(MockBackend::new(PortalConfig::instant())),
            store,
            Notifier::new(),
        );
        let state = session.state();
        prop_assert_eq!(state.is_connected(), Snapshot::decode(&raw).is_ok());
    }
}
