//! Store Module
//!
//! Durable-store contract consumed by the auction repository, plus the
//! in-memory implementation used by the binary and by tests.

mod memory;

use async_trait::async_trait;

use crate::auction::{Auction, AuctionStatus};
use crate::error::Result;

pub use memory::InMemoryStore;

// == Auction Store Contract ==
/// Persistence operations the auction core depends on.
///
/// Connection management and record encoding belong to implementations.
#[async_trait]
pub trait AuctionStore: Send + Sync {
    /// Persists a newly created auction record.
    async fn persist_create(&self, auction: &Auction) -> Result<()>;

    /// Updates the status of an auction. Status is monotonic: a Completed
    /// auction never reverts to Active.
    async fn update_status(&self, id: &str, status: AuctionStatus) -> Result<()>;

    /// Retrieves an auction by identifier.
    async fn find_by_id(&self, id: &str) -> Result<Auction>;

    /// Retrieves auctions matching the given filters. A `product_name`
    /// filter matches as a case-insensitive substring.
    async fn find_by(
        &self,
        status: Option<AuctionStatus>,
        category: Option<&str>,
        product_name: Option<&str>,
    ) -> Result<Vec<Auction>>;
}
