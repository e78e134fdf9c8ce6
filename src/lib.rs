//! SpiceBox Catering pricing service.
//!
//! A stateless Axum service wrapping a pure pricing engine: catering quotes,
//! bowl-order totals, and the advance/balance split the booking flow charges
//! against. Catalog facts arrive with each request; computed quotes are held
//! in a TTL-bounded in-memory store until they expire.

pub mod booking;
pub mod config;
pub mod error;
pub mod pricing;
pub mod store;

use std::sync::Arc;

use config::AppConfig;
use store::QuoteStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: QuoteStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = QuoteStore::new(config.pricing.quote_validity_minutes);
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
