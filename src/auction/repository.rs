//! Auction Repository Module
//!
//! Ties the store, the expiry tracker, and the background sweeper together.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::auction::{Auction, AuctionStatus, ExpiryTracker, ProductCondition};
use crate::config::Config;
use crate::error::Result;
use crate::store::AuctionStore;
use crate::tasks::{sweep_expired, AuctionSweeper, CloseAuction, StoreCloser, SweepOutcome};

// == Auction Repository ==
/// Creation and query operations over auctions, with automatic closing.
///
/// One sweeper task runs per repository instance; it starts at
/// construction and stops via `shutdown`.
pub struct AuctionRepository {
    store: Arc<dyn AuctionStore>,
    tracker: Arc<ExpiryTracker>,
    closer: Arc<dyn CloseAuction>,
    sweeper: AuctionSweeper,
    auction_duration: chrono::Duration,
}

impl AuctionRepository {
    // == Constructor ==
    /// Builds the repository and starts its sweeper.
    ///
    /// Before the sweeper runs, the tracker is reconstructed from the
    /// store: every Active auction is re-registered with its original
    /// deadline (creation time + configured duration), so deadlines
    /// survive a process restart.
    pub async fn start(store: Arc<dyn AuctionStore>, config: &Config) -> Result<Self> {
        let tracker = Arc::new(ExpiryTracker::new());
        let auction_duration = config.auction_duration();

        let active = store.find_by(Some(AuctionStatus::Active), None, None).await?;
        for auction in &active {
            tracker
                .register(&auction.id, auction.created_at + auction_duration)
                .await;
        }
        if !active.is_empty() {
            info!("Recovered {} active auctions into the expiry tracker", active.len());
        }

        let closer: Arc<dyn CloseAuction> = Arc::new(StoreCloser::new(store.clone()));
        let sweeper = AuctionSweeper::start(tracker.clone(), closer.clone(), config.sweep_interval());

        Ok(Self {
            store,
            tracker,
            closer,
            sweeper,
            auction_duration,
        })
    }

    // == Create ==
    /// Validates the fields, persists a new Active auction, and registers
    /// its deadline. Registration happens only after successful
    /// persistence; a failed creation leaves nothing tracked.
    pub async fn create_auction(
        &self,
        product_name: &str,
        category: &str,
        description: &str,
        condition: &str,
    ) -> Result<Auction> {
        let condition: ProductCondition = condition.parse()?;
        let auction = Auction::new(product_name, category, description, condition)?;

        self.store.persist_create(&auction).await?;

        let deadline = auction.created_at + self.auction_duration;
        self.tracker.register(&auction.id, deadline).await;

        info!(
            "Auction {} created, closes at {}",
            auction.id,
            deadline.to_rfc3339()
        );

        Ok(auction)
    }

    // == Queries ==
    /// Retrieves an auction by identifier.
    ///
    /// An auction past its deadline may still read as Active until the
    /// next sweep pass completes; staleness is bounded by the sweep
    /// period.
    pub async fn find_by_id(&self, id: &str) -> Result<Auction> {
        self.store.find_by_id(id).await
    }

    /// Retrieves auctions matching the given filters.
    pub async fn find_by(
        &self,
        status: Option<AuctionStatus>,
        category: Option<&str>,
        product_name: Option<&str>,
    ) -> Result<Vec<Auction>> {
        self.store.find_by(status, category, product_name).await
    }

    /// Returns true if the identifier is still tracked for expiry.
    pub async fn is_tracked(&self, id: &str) -> bool {
        self.tracker.contains(id).await
    }

    // == Sweep Control ==
    /// Runs one sweep pass immediately, outside the periodic schedule.
    pub async fn sweep_now(&self) -> SweepOutcome {
        sweep_expired(&self.tracker, self.closer.as_ref(), Utc::now()).await
    }

    /// Stops the background sweeper. Tracked deadlines are not flushed;
    /// their auctions stay Active in the store until a future instance
    /// recovers them.
    pub fn shutdown(&self) {
        self.sweeper.stop();
    }
}
