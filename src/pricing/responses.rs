//! Response DTOs for pricing API endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::breakdown::BreakdownLine;
use super::engine::Quote;

/// A stored quote, keyed by the id the store assigned.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: Uuid,
    pub currency: String,
    pub subtotal: i64,
    pub discount_amount: i64,
    pub tax_amount: i64,
    pub total: i64,
    pub advance_pct: u32,
    pub advance_amount: i64,
    pub balance_amount: i64,
    pub breakdown: Vec<BreakdownLine>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl QuoteResponse {
    pub fn from_quote(quote_id: Uuid, quote: &Quote) -> Self {
        Self {
            quote_id,
            currency: quote.currency.clone(),
            subtotal: quote.subtotal,
            discount_amount: quote.discount_amount,
            tax_amount: quote.tax_amount,
            total: quote.total,
            advance_pct: quote.advance_pct,
            advance_amount: quote.advance_amount,
            balance_amount: quote.balance_amount,
            breakdown: quote.breakdown.clone(),
            created_at: quote.created_at,
            expires_at: quote.expires_at,
        }
    }
}

/// Health/liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub quotes_stored: u64,
}
