//! Session context for the Testnet Portal.
//!
//! `App` builds the one [`PortalSession`] for the window and provides it at
//! the router boundary. Route components pick it up with
//! [`use_portal_session`] and from there hand it down explicitly as a prop,
//! so the navbar, wallet widget and connect prompt never reach into context
//! themselves.
//!
//! ## Usage
//!
//! ```ignore
//! // In a route component
//! let session = use_portal_session();
//! let state = use_session_state(&session);
//!
//! rsx! {
//!     Navbar { session: session.clone(), current: NavLocation::Faucet }
//!     if state().is_connected() { ... }
//! }
//! ```

use std::future::Future;
use std::sync::Arc;

use dioxus::prelude::*;
use testnet_core::{
    KeyValueStore, MemoryStore, MockBackend, Notifier, PortalConfig, PortalError, RedbStore,
    SessionState, SimulationTiming, WalletSession,
};

use crate::LaunchSettings;

/// Database file inside the data directory.
const DB_FILE: &str = "portal.redb";

/// Snapshot storage for the desktop app.
///
/// redb holds an exclusive lock on its file, so a second window pointed at
/// the same data directory falls back to memory instead of failing to start.
pub enum DesktopStore {
    Redb(RedbStore),
    Memory(MemoryStore),
}

impl KeyValueStore for DesktopStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortalError> {
        match self {
            DesktopStore::Redb(store) => store.get(key),
            DesktopStore::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortalError> {
        match self {
            DesktopStore::Redb(store) => store.set(key, value),
            DesktopStore::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), PortalError> {
        match self {
            DesktopStore::Redb(store) => store.remove(key),
            DesktopStore::Memory(store) => store.remove(key),
        }
    }
}

/// The wallet session as the desktop app instantiates it.
pub type PortalSession = WalletSession<MockBackend, DesktopStore>;

/// Get the launch settings for this window.
pub fn launch_settings() -> LaunchSettings {
    crate::launch_settings()
}

/// Load config, open storage and restore the session for this window.
pub fn build_session(settings: &LaunchSettings) -> PortalSession {
    let mut config = match PortalConfig::load(&settings.data_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable config, using defaults");
            PortalConfig::default()
        }
    };
    if settings.instant {
        config.timing = SimulationTiming::instant();
    }

    let store = match RedbStore::new(settings.data_dir.join(DB_FILE)) {
        Ok(store) => DesktopStore::Redb(store),
        Err(e) => {
            tracing::warn!(error = %e, "Could not open portal database, session will not persist");
            DesktopStore::Memory(MemoryStore::new())
        }
    };

    WalletSession::restore(
        Arc::new(MockBackend::new(config)),
        Arc::new(store),
        Notifier::new(),
    )
}

/// Hook to access the window's session from context.
///
/// Only route components call this; everything below them takes the session
/// as a prop.
pub fn use_portal_session() -> PortalSession {
    use_context::<PortalSession>()
}

/// Config the session's backend was built with.
pub fn portal_config(session: &PortalSession) -> PortalConfig {
    session.backend().config().clone()
}

/// Hook that mirrors the session state into a signal.
///
/// Returns a reactive signal that updates whenever the session changes.
pub fn use_session_state(session: &PortalSession) -> Signal<SessionState> {
    let mut state = use_signal(|| session.state());
    let session = session.clone();

    use_effect(move || {
        let mut rx = session.subscribe();
        spawn(async move {
            // Catch anything that changed between the first render and now.
            state.set(rx.borrow_and_update().clone());
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                state.set(next);
            }
        });
    });

    state
}

/// Run a session call on the root scope instead of the calling component's.
///
/// Reaching `Connected` swaps the connect prompt for the page it guards, so a
/// connect started there must outlive the component that started it.
pub fn spawn_session_task(task: impl Future<Output = ()> + 'static) {
    if spawn_forever(task).is_none() {
        tracing::warn!("No runtime available for session task");
    }
}
