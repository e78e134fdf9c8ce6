//! In-memory quote store using moka
//!
//! Quotes are write-once, read-many: a stored quote is returned verbatim on
//! every read (breakdown included) and is never recomputed downstream. The
//! cache TTL matches the quote validity window, so entries age out on their
//! own; staleness is still enforced against `expires_at` wherever a quote is
//! consumed, since the wall clock, not eviction, is the contract.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::pricing::engine::Quote;

/// Store for computed quotes, keyed by generated id.
#[derive(Clone)]
pub struct QuoteStore {
    quotes: Cache<Uuid, Arc<Quote>>,
}

impl QuoteStore {
    /// Create a store whose entries live as long as a quote stays bookable.
    pub fn new(validity_minutes: i64) -> Self {
        Self {
            quotes: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(Duration::from_secs(validity_minutes.max(1) as u64 * 60))
                .build(),
        }
    }

    /// Store a freshly computed quote and hand back its generated id.
    pub async fn insert(&self, quote: Quote) -> Uuid {
        let id = Uuid::new_v4();
        self.quotes.insert(id, Arc::new(quote)).await;
        debug!("Stored quote {}", id);
        id
    }

    /// Fetch a stored quote exactly as it was computed.
    pub async fn get(&self, id: &Uuid) -> Option<Arc<Quote>> {
        self.quotes.get(id).await
    }

    /// Store statistics for the health endpoint.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            quotes_stored: self.quotes.entry_count(),
        }
    }
}

/// Store statistics for monitoring
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub quotes_stored: u64,
}
