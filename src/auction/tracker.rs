//! Expiry Tracker Module
//!
//! In-memory mapping from auction identifier to its absolute deadline,
//! shared between request handlers (register) and the sweep task (drain).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

// == Expiry Tracker ==
/// Tracks the deadline of every auction the core still considers active.
///
/// An identifier appears at most once; registering it again overwrites the
/// deadline. Removal happens only through `drain_expired`.
#[derive(Debug, Default)]
pub struct ExpiryTracker {
    deadlines: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl ExpiryTracker {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Register ==
    /// Registers (or overwrites) the deadline for an auction.
    ///
    /// Safe to call concurrently with any number of in-flight drains.
    pub async fn register(&self, id: &str, deadline: DateTime<Utc>) {
        let mut deadlines = self.deadlines.write().await;
        deadlines.insert(id.to_string(), deadline);
    }

    // == Drain Expired ==
    /// Atomically removes and returns all identifiers whose deadline has
    /// passed as of `now` (deadline <= now).
    ///
    /// Two phases: a scan under the read lock collects expired identifiers,
    /// then the write lock is taken only to remove them. Registrations that
    /// land between the phases are untouched because removal targets only
    /// the identifiers observed during the scan. An identifier is returned
    /// only if this call actually removed it, so no identifier is ever
    /// returned twice across concurrent drains.
    ///
    /// No ordering guarantee among the returned identifiers.
    pub async fn drain_expired(&self, now: DateTime<Utc>) -> Vec<String> {
        let mut expired: Vec<String> = {
            let deadlines = self.deadlines.read().await;
            deadlines
                .iter()
                .filter(|(_, deadline)| **deadline <= now)
                .map(|(id, _)| id.clone())
                .collect()
        };

        if expired.is_empty() {
            return expired;
        }

        let mut deadlines = self.deadlines.write().await;
        expired.retain(|id| deadlines.remove(id).is_some());
        expired
    }

    // == Contains ==
    /// Returns true if the identifier is still tracked.
    pub async fn contains(&self, id: &str) -> bool {
        self.deadlines.read().await.contains_key(id)
    }

    // == Length ==
    /// Returns the number of tracked deadlines.
    pub async fn len(&self) -> usize {
        self.deadlines.read().await.len()
    }

    /// Returns true if nothing is tracked.
    pub async fn is_empty(&self) -> bool {
        self.deadlines.read().await.is_empty()
    }
}
