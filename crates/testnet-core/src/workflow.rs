//! Page-local simulated workflows.
//!
//! A [`Workflow`] wraps one kind of long-running action (a faucet request, an
//! NFT mint) and enforces that at most one run is active at a time. Progress
//! is published on a `watch` channel so a page can render a bar, and finished
//! records are kept most-recent-first.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::config::ProgressPlan;
use crate::error::{PortalError, PortalResult};

/// Publishes progress (0..=100) for the current run.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    tx: Arc<watch::Sender<u8>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    pub fn report(&self, percent: u8) {
        self.tx.send_replace(percent.min(100));
    }

    pub fn current(&self) -> u8 {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.tx.subscribe()
    }

    /// Walk `plan` from 0 to 100, then wait out the settle delay.
    pub async fn drive(&self, plan: &ProgressPlan) {
        let step = plan.step.max(1);
        let mut current = 0u8;
        self.report(current);

        while current < 100 {
            tokio::time::sleep(plan.tick()).await;
            current = current.saturating_add(step).min(100);
            self.report(current);
        }

        tokio::time::sleep(plan.settle()).await;
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct Ledger<R> {
    running: bool,
    history: Vec<R>,
    last_completed: Option<DateTime<Utc>>,
}

/// Single-flight runner with an ordered history.
#[derive(Debug)]
pub struct Workflow<R> {
    name: &'static str,
    ledger: Arc<Mutex<Ledger<R>>>,
    progress: ProgressReporter,
}

impl<R> Clone for Workflow<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            ledger: self.ledger.clone(),
            progress: self.progress.clone(),
        }
    }
}

/// Clears the running flag when a run ends, however it ends.
struct RunGuard<R> {
    ledger: Arc<Mutex<Ledger<R>>>,
}

impl<R> Drop for RunGuard<R> {
    fn drop(&mut self) {
        self.ledger.lock().running = false;
    }
}

impl<R: Clone> Workflow<R> {
    /// `name` is used in logs and in the busy error ("Faucet request already in progress").
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ledger: Arc::new(Mutex::new(Ledger {
                running: false,
                history: Vec::new(),
                last_completed: None,
            })),
            progress: ProgressReporter::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_running(&self) -> bool {
        self.ledger.lock().running
    }

    pub fn progress(&self) -> u8 {
        self.progress.current()
    }

    pub fn subscribe_progress(&self) -> watch::Receiver<u8> {
        self.progress.subscribe()
    }

    /// Finished records, most recent first.
    pub fn history(&self) -> Vec<R> {
        self.ledger.lock().history.clone()
    }

    /// When the last successful run finished.
    pub fn last_completed(&self) -> Option<DateTime<Utc>> {
        self.ledger.lock().last_completed
    }

    /// Prepend a record without running anything (used for failed runs).
    pub fn record(&self, entry: R) {
        self.ledger.lock().history.insert(0, entry);
    }

    fn begin(&self) -> PortalResult<RunGuard<R>> {
        let mut ledger = self.ledger.lock();
        if ledger.running {
            return Err(PortalError::WorkflowBusy(self.name));
        }
        ledger.running = true;
        Ok(RunGuard {
            ledger: self.ledger.clone(),
        })
    }

    /// Run `op` exclusively. On success its record is prepended to the history.
    pub async fn run<F, Fut>(&self, op: F) -> PortalResult<R>
    where
        F: FnOnce(ProgressReporter) -> Fut,
        Fut: Future<Output = PortalResult<R>>,
    {
        let _guard = self.begin()?;
        self.progress.report(0);
        tracing::debug!(workflow = self.name, "Run started");

        let entry = op(self.progress.clone()).await?;

        {
            let mut ledger = self.ledger.lock();
            ledger.history.insert(0, entry.clone());
            ledger.last_completed = Some(Utc::now());
        }
        tracing::debug!(workflow = self.name, "Run completed");
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn drive_reports_every_checkpoint() {
        let reporter = ProgressReporter::new();
        let mut rx = reporter.subscribe();
        let plan = ProgressPlan::FAUCET;

        let seen = tokio::spawn(async move {
            let mut seen = vec![*rx.borrow_and_update()];
            while rx.changed().await.is_ok() {
                let value = *rx.borrow_and_update();
                seen.push(value);
                if value == 100 {
                    break;
                }
            }
            seen
        });

        reporter.drive(&plan).await;
        assert_eq!(seen.await.unwrap(), plan.checkpoints());
    }

    #[tokio::test(start_paused = true)]
    async fn history_is_most_recent_first() {
        let workflow: Workflow<u32> = Workflow::new("Counter");
        for n in 1..=3 {
            workflow.run(|_| async move { Ok(n) }).await.unwrap();
        }
        assert_eq!(workflow.history(), vec![3, 2, 1]);
        assert!(workflow.last_completed().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn second_run_is_rejected_while_busy() {
        let workflow: Workflow<u32> = Workflow::new("Faucet request");

        let first = {
            let workflow = workflow.clone();
            tokio::spawn(async move {
                workflow
                    .run(|_| async {
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        Ok(1)
                    })
                    .await
            })
        };
        tokio::task::yield_now().await;
        assert!(workflow.is_running());

        let second = workflow.run(|_| async { Ok(2) }).await;
        assert!(matches!(second, Err(PortalError::WorkflowBusy("Faucet request"))));

        assert_eq!(first.await.unwrap().unwrap(), 1);
        assert!(!workflow.is_running());
        assert_eq!(workflow.history(), vec![1]);
    }

    #[tokio::test]
    async fn failed_run_releases_the_flag() {
        let workflow: Workflow<u32> = Workflow::new("Mint");
        let result = workflow
            .run(|_| async { Err(PortalError::Backend("boom".into())) })
            .await;
        assert!(result.is_err());
        assert!(!workflow.is_running());
        assert!(workflow.history().is_empty());
        assert!(workflow.last_completed().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_run_releases_the_flag() {
        let workflow: Workflow<u32> = Workflow::new("Mint");
        let handle = {
            let workflow = workflow.clone();
            tokio::spawn(async move {
                workflow
                    .run(|_| async {
                        tokio::time::sleep(Duration::from_secs(60)).await;
                        Ok(1)
                    })
                    .await
            })
        };
        tokio::task::yield_now().await;
        assert!(workflow.is_running());

        handle.abort();
        let _ = handle.await;
        assert!(!workflow.is_running());
    }
}
