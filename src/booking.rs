//! Booking consumer for stored quotes.
//!
//! The payment provider is an opaque capability behind `PaymentGateway`:
//! given an amount and a currency it returns a provider order id and the
//! exact amount it will charge. The engine's figures pass through this seam
//! unmodified; no re-rounding happens at the call site.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::store::QuoteStore;

/// An order registered with the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentOrder {
    pub provider_order_id: String,
    pub amount: i64,
    pub currency: String,
}

/// Opaque create-order capability of the payment provider. Verification of
/// the provider's callback signature lives with the backend, not here.
pub trait PaymentGateway: Send + Sync {
    fn create_order(&self, amount_paise: i64, currency: &str)
        -> std::result::Result<PaymentOrder, String>;
}

/// A booking created against a stored quote: the advance is collected now,
/// the balance is due later.
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub booking_id: Uuid,
    pub quote_id: Uuid,
    pub payment: PaymentOrder,
    pub advance_due: i64,
    pub balance_due: i64,
}

/// Book a stored quote: reject unknown or stale quotes, then register the
/// advance amount with the payment provider.
pub async fn book_quote(
    store: &QuoteStore,
    gateway: &dyn PaymentGateway,
    quote_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Booking> {
    let quote = store.get(&quote_id).await.ok_or(AppError::NotFound)?;
    if quote.is_expired(now) {
        return Err(AppError::QuoteExpired);
    }

    let payment = gateway
        .create_order(quote.advance_amount, &quote.currency)
        .map_err(AppError::Gateway)?;

    let booking = Booking {
        booking_id: Uuid::new_v4(),
        quote_id,
        payment,
        advance_due: quote.advance_amount,
        balance_due: quote.balance_amount,
    };
    info!(
        "Booked quote {} (advance {} {})",
        quote_id, booking.advance_due, quote.currency
    );
    Ok(booking)
}
