//! Expiry Sweep Task
//!
//! Background task that periodically drains expired deadlines from the
//! tracker and marks the corresponding auctions Completed.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, error, info};

use crate::auction::{AuctionStatus, ExpiryTracker};
use crate::error::{AuctionError, Result};
use crate::store::AuctionStore;

/// Upper bound on a single status-transition call, independent of the
/// sweep period.
const CLOSE_TIMEOUT: Duration = Duration::from_secs(5);

// == Close Capability ==
/// The status-transition capability injected into the sweep.
///
/// Production binds this to a durable-store update; tests bind it to a
/// recorder. The seam keeps the sweep's timing behavior testable without
/// a real store and isolates persistence failures from its control flow.
#[async_trait]
pub trait CloseAuction: Send + Sync {
    /// Marks the auction Completed in durable storage.
    async fn close(&self, id: &str) -> Result<()>;
}

/// Production close binding: updates the store under a bounded timeout.
pub struct StoreCloser {
    store: Arc<dyn AuctionStore>,
}

impl StoreCloser {
    pub fn new(store: Arc<dyn AuctionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CloseAuction for StoreCloser {
    async fn close(&self, id: &str) -> Result<()> {
        match timeout(CLOSE_TIMEOUT, self.store.update_status(id, AuctionStatus::Completed)).await {
            Ok(result) => result,
            Err(_) => Err(AuctionError::Internal(format!(
                "Timed out updating status for auction {}",
                id
            ))),
        }
    }
}

// == Sweep Pass ==
/// Outcome of one sweep pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepOutcome {
    /// Auctions successfully closed
    pub closed: usize,
    /// Auctions whose close attempt failed
    pub failed: usize,
}

/// Runs one sweep pass: drains every deadline that has passed as of `now`
/// and attempts to close each drained auction.
///
/// Close attempts are independent; a failure is logged and does not block
/// the rest of the batch. A failed auction is not re-registered, so it
/// stays Active in the store until externally reconciled.
pub async fn sweep_expired(
    tracker: &ExpiryTracker,
    closer: &dyn CloseAuction,
    now: DateTime<Utc>,
) -> SweepOutcome {
    let expired = tracker.drain_expired(now).await;

    let mut outcome = SweepOutcome::default();
    for id in expired {
        match closer.close(&id).await {
            Ok(()) => {
                info!("Closed expired auction: {}", id);
                outcome.closed += 1;
            }
            Err(err) => {
                error!("Failed to close expired auction {}: {}", id, err);
                outcome.failed += 1;
            }
        }
    }
    outcome
}

// == Auction Sweeper ==
/// Handle to the background sweep task.
///
/// The task starts immediately and runs until `stop` is called (or the
/// handle is dropped). Stopping is terminal; the task never restarts.
#[derive(Debug)]
pub struct AuctionSweeper {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl AuctionSweeper {
    /// Spawns the sweep loop.
    ///
    /// The loop wakes every `period`, runs one sweep pass, and exits when
    /// the shutdown signal fires. The signal wait races with the periodic
    /// wake-up, so cancellation takes effect within one period.
    pub fn start(
        tracker: Arc<ExpiryTracker>,
        closer: Arc<dyn CloseAuction>,
        period: Duration,
    ) -> Self {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            info!("Starting auction sweep task with period of {:?}", period);

            loop {
                tokio::select! {
                    _ = tokio::time::sleep(period) => {
                        let outcome = sweep_expired(&tracker, closer.as_ref(), Utc::now()).await;
                        if outcome.closed > 0 || outcome.failed > 0 {
                            info!(
                                "Sweep pass: closed {} auctions, {} failures",
                                outcome.closed, outcome.failed
                            );
                        } else {
                            debug!("Sweep pass: no expired auctions");
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        info!("Stopping auction sweep task");
                        break;
                    }
                }
            }
        });

        Self { shutdown_tx, handle }
    }

    /// Signals the sweep loop to stop. Idempotent.
    ///
    /// Auctions still tracked at shutdown stay Active in the store until a
    /// replacement instance recovers them.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Returns true once the sweep loop has exited.
    pub fn is_stopped(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for AuctionSweeper {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}
