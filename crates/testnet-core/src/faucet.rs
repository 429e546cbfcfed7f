//! Faucet page workflow.
//!
//! Requests a fixed amount of test tokens for the connected wallet. Only one
//! request runs at a time; each finished request lands at the top of the
//! page-local history.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::backend::WalletBackend;
use crate::error::{PortalError, PortalResult};
use crate::notification::{Notification, Notifier};
use crate::types::{Network, SessionState};
use crate::workflow::Workflow;

/// Outcome of a faucet request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Completed,
    Failed,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Completed => "Completed",
            RequestStatus::Failed => "Failed",
        }
    }
}

/// One row of faucet history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaucetRecord {
    pub id: String,
    pub amount: u64,
    pub network: Network,
    pub requested_at: DateTime<Utc>,
    pub status: RequestStatus,
}

/// Faucet workflow bound to a backend.
pub struct Faucet<B> {
    backend: Arc<B>,
    notifier: Notifier,
    workflow: Workflow<FaucetRecord>,
    amount: u64,
    symbol: String,
}

impl<B> Clone for Faucet<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            notifier: self.notifier.clone(),
            workflow: self.workflow.clone(),
            amount: self.amount,
            symbol: self.symbol.clone(),
        }
    }
}

impl<B: WalletBackend> Faucet<B> {
    pub fn new(backend: Arc<B>, notifier: Notifier, amount: u64, symbol: impl Into<String>) -> Self {
        Self {
            backend,
            notifier,
            workflow: Workflow::new("Faucet request"),
            amount,
            symbol: symbol.into(),
        }
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn is_running(&self) -> bool {
        self.workflow.is_running()
    }

    pub fn progress(&self) -> u8 {
        self.workflow.progress()
    }

    pub fn subscribe_progress(&self) -> watch::Receiver<u8> {
        self.workflow.subscribe_progress()
    }

    pub fn history(&self) -> Vec<FaucetRecord> {
        self.workflow.history()
    }

    pub fn last_requested(&self) -> Option<DateTime<Utc>> {
        self.workflow.last_completed()
    }

    /// Request tokens for the wallet described by `session`.
    ///
    /// The caller passes the current session state; the faucet only reads the
    /// address and network from it and never touches the session itself.
    pub async fn request_tokens(&self, session: &SessionState) -> PortalResult<FaucetRecord> {
        let (address, network) = session.connected_identity().ok_or(PortalError::NotConnected)?;
        let amount = self.amount;
        let backend = self.backend.clone();

        tracing::info!(address = %address.short(), %network, amount, "Requesting faucet tokens");

        let result = self
            .workflow
            .run(|progress| async move {
                backend.request_faucet(&address, network, amount, progress).await
            })
            .await;

        match result {
            Ok(record) => {
                self.notifier.notify(Notification::info(
                    "Success!",
                    format!("{} {} tokens have been sent to your wallet.", amount, self.symbol),
                ));
                Ok(record)
            }
            Err(PortalError::WorkflowBusy(name)) => Err(PortalError::WorkflowBusy(name)),
            Err(e) => {
                tracing::warn!(error = %e, "Faucet request failed");
                self.workflow.record(FaucetRecord {
                    id: format!("req-{}", Utc::now().timestamp_millis()),
                    amount,
                    network,
                    requested_at: Utc::now(),
                    status: RequestStatus::Failed,
                });
                self.notifier.notify(Notification::destructive(
                    "Request Failed",
                    "The faucet could not send tokens. Please try again.",
                ));
                Err(e)
            }
        }
    }
}
