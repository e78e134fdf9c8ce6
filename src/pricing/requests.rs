//! Request DTOs for pricing API endpoints.
//!
//! The catering backend owns the catalog, so every request carries both the
//! customer's order specification and the catalog facts it was resolved
//! against; the engine never fetches anything.

use serde::Deserialize;

use super::models::CatalogFacts;
use super::order::OrderSpecification;

/// Request to compute (and store) a catering quote.
#[derive(Debug, Deserialize)]
pub struct CateringQuoteRequest {
    pub order: OrderSpecification,
    pub catalog: CatalogFacts,
    /// Overrides the configured default advance percent; guided checkout
    /// flows pass 50 here.
    #[serde(default)]
    pub advance_pct: Option<u32>,
}

/// Request to compute (and store) a bowl-order total.
#[derive(Debug, Deserialize)]
pub struct BowlOrderRequest {
    pub order: OrderSpecification,
    pub catalog: CatalogFacts,
    #[serde(default)]
    pub advance_pct: Option<u32>,
}
