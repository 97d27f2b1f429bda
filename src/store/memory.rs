//! In-Memory Store Module
//!
//! HashMap-backed implementation of the store contract.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::auction::{Auction, AuctionStatus};
use crate::error::{AuctionError, Result};
use crate::store::AuctionStore;

// == In-Memory Store ==
/// Auction storage backed by a HashMap.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    auctions: RwLock<HashMap<String, Auction>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored auctions.
    pub async fn len(&self) -> usize {
        self.auctions.read().await.len()
    }

    /// Returns true if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.auctions.read().await.is_empty()
    }
}

#[async_trait]
impl AuctionStore for InMemoryStore {
    async fn persist_create(&self, auction: &Auction) -> Result<()> {
        let mut auctions = self.auctions.write().await;
        if auctions.contains_key(&auction.id) {
            return Err(AuctionError::Store(format!(
                "Auction {} already exists",
                auction.id
            )));
        }
        auctions.insert(auction.id.clone(), auction.clone());
        Ok(())
    }

    async fn update_status(&self, id: &str, status: AuctionStatus) -> Result<()> {
        let mut auctions = self.auctions.write().await;
        let auction = auctions
            .get_mut(id)
            .ok_or_else(|| AuctionError::NotFound(id.to_string()))?;

        // Completed is terminal
        if auction.status == AuctionStatus::Completed && status == AuctionStatus::Active {
            return Ok(());
        }

        auction.status = status;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Auction> {
        let auctions = self.auctions.read().await;
        auctions
            .get(id)
            .cloned()
            .ok_or_else(|| AuctionError::NotFound(id.to_string()))
    }

    async fn find_by(
        &self,
        status: Option<AuctionStatus>,
        category: Option<&str>,
        product_name: Option<&str>,
    ) -> Result<Vec<Auction>> {
        let auctions = self.auctions.read().await;
        let name_filter = product_name.map(|n| n.to_ascii_lowercase());

        Ok(auctions
            .values()
            .filter(|a| status.map_or(true, |s| a.status == s))
            .filter(|a| category.map_or(true, |c| a.category == c))
            .filter(|a| {
                name_filter
                    .as_ref()
                    .map_or(true, |n| a.product_name.to_ascii_lowercase().contains(n))
            })
            .cloned()
            .collect())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::ProductCondition;

    fn sample_auction(name: &str, category: &str) -> Auction {
        Auction::new(name, category, "A long enough description", ProductCondition::New).unwrap()
    }

    #[tokio::test]
    async fn test_persist_and_find() {
        let store = InMemoryStore::new();
        let auction = sample_auction("Keyboard", "electronics");

        store.persist_create(&auction).await.unwrap();
        let found = store.find_by_id(&auction.id).await.unwrap();
        assert_eq!(found, auction);
    }

    #[tokio::test]
    async fn test_persist_duplicate_id_fails() {
        let store = InMemoryStore::new();
        let auction = sample_auction("Keyboard", "electronics");

        store.persist_create(&auction).await.unwrap();
        let result = store.persist_create(&auction).await;
        assert!(matches!(result, Err(AuctionError::Store(_))));
    }

    #[tokio::test]
    async fn test_find_unknown_id() {
        let store = InMemoryStore::new();
        let result = store.find_by_id("missing").await;
        assert!(matches!(result, Err(AuctionError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_status() {
        let store = InMemoryStore::new();
        let auction = sample_auction("Keyboard", "electronics");
        store.persist_create(&auction).await.unwrap();

        store.update_status(&auction.id, AuctionStatus::Completed).await.unwrap();
        let found = store.find_by_id(&auction.id).await.unwrap();
        assert_eq!(found.status, AuctionStatus::Completed);
    }

    #[tokio::test]
    async fn test_update_status_unknown_id() {
        let store = InMemoryStore::new();
        let result = store.update_status("missing", AuctionStatus::Completed).await;
        assert!(matches!(result, Err(AuctionError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_completed_never_reverts() {
        let store = InMemoryStore::new();
        let auction = sample_auction("Keyboard", "electronics");
        store.persist_create(&auction).await.unwrap();

        store.update_status(&auction.id, AuctionStatus::Completed).await.unwrap();
        store.update_status(&auction.id, AuctionStatus::Active).await.unwrap();

        let found = store.find_by_id(&auction.id).await.unwrap();
        assert_eq!(found.status, AuctionStatus::Completed);
    }

    #[tokio::test]
    async fn test_find_by_filters() {
        let store = InMemoryStore::new();
        let keyboard = sample_auction("Mechanical keyboard", "electronics");
        let lamp = sample_auction("Desk lamp", "home");
        store.persist_create(&keyboard).await.unwrap();
        store.persist_create(&lamp).await.unwrap();
        store.update_status(&lamp.id, AuctionStatus::Completed).await.unwrap();

        let active = store.find_by(Some(AuctionStatus::Active), None, None).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, keyboard.id);

        let home = store.find_by(None, Some("home"), None).await.unwrap();
        assert_eq!(home.len(), 1);
        assert_eq!(home[0].id, lamp.id);

        let by_name = store.find_by(None, None, Some("KEYBOARD")).await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, keyboard.id);

        let none = store
            .find_by(Some(AuctionStatus::Completed), Some("electronics"), None)
            .await
            .unwrap();
        assert!(none.is_empty());
    }
}
