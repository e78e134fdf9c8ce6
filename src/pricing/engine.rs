//! Quote assembly: one entry point per pricing mode.
//!
//! Every call site that needs a price - the quote endpoint, the bowl-order
//! endpoint, any display recomputation - goes through these functions, so
//! the arithmetic exists in exactly one place. Both entry points are pure:
//! config, advance percent, and the clock are passed in explicitly and the
//! same inputs always produce the same `Quote`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::error::PricingError;

use super::breakdown::BreakdownLine;
use super::calculators::{
    add_ons_line, discount_line, distance_fee_line, enforce_menu_rules, premium_line, settlement,
    subtotal_lines, tax_line, weekend_surge_line,
};
use super::models::CatalogFacts;
use super::order::OrderSpecification;

/// A fully computed, immutable quote. Never mutated after creation; a
/// changed order gets a fresh quote. Ids are assigned by the store on
/// insert, keeping this value deterministic for identical inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub currency: String,
    /// Sum of all non-tax, pre-discount lines (food + fees + surge).
    pub subtotal: i64,
    pub discount_amount: i64,
    pub tax_amount: i64,
    pub total: i64,
    pub advance_pct: u32,
    pub advance_amount: i64,
    pub balance_amount: i64,
    pub breakdown: Vec<BreakdownLine>,
    pub created_at: DateTime<Utc>,
    /// Bookings against this quote must be rejected after this instant.
    pub expires_at: DateTime<Utc>,
}

impl Quote {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Full catering pipeline: food subtotal, premium add-ons, delivery fee,
/// weekend surge, volume discount, tax, advance/balance split.
///
/// Line order is fixed: base -> extras -> distance fee -> surge -> discount
/// -> tax. The discount base is the food cost only; fees and surge are
/// never discounted.
pub fn quote_catering(
    order: &OrderSpecification,
    facts: &CatalogFacts,
    cfg: &PricingConfig,
    advance_pct: u32,
    now: DateTime<Utc>,
) -> Result<Quote, PricingError> {
    order.validate()?;
    enforce_menu_rules(order, facts)?;

    let mut breakdown = subtotal_lines(order, facts)?;
    if let Some(line) = premium_line(order, facts)? {
        breakdown.push(line);
    }
    let food_cost: i64 = breakdown.iter().map(|l| l.amount).sum();

    let fee = distance_fee_line(order.distance_km, cfg, false);
    let fee_amount = fee.amount;
    breakdown.push(fee);

    let surge_amount =
        match weekend_surge_line(order, food_cost + fee_amount, cfg.weekend_surge_pct) {
            Some(line) => {
                let amount = line.amount;
                breakdown.push(line);
                amount
            }
            None => 0,
        };

    let subtotal = food_cost + fee_amount + surge_amount;

    let discount_amount = match discount_line(food_cost, order.pax, &cfg.bulk_discount_tiers) {
        Some(line) => {
            let amount = -line.amount;
            breakdown.push(line);
            amount
        }
        None => 0,
    };

    let after_discount = (subtotal - discount_amount).max(0);
    let tax = tax_line(after_discount, cfg.tax_rate);
    let tax_amount = tax.amount;
    breakdown.push(tax);

    let total = after_discount + tax_amount;
    let (advance_amount, balance_amount) = settlement(total, advance_pct);

    Ok(Quote {
        currency: cfg.currency.clone(),
        subtotal,
        discount_amount,
        tax_amount,
        total,
        advance_pct,
        advance_amount,
        balance_amount,
        breakdown,
        created_at: now,
        expires_at: now + Duration::minutes(cfg.quote_validity_minutes),
    })
}

/// Bowl-order pipeline: per-unit subtotal, add-on units, delivery fee with
/// the free-over-threshold waiver. No surge, no volume discount, and no tax
/// at this layer; settlement still applies so advance/balance stay
/// consistent with the catering flow.
pub fn quote_bowl_order(
    order: &OrderSpecification,
    facts: &CatalogFacts,
    cfg: &PricingConfig,
    advance_pct: u32,
    now: DateTime<Utc>,
) -> Result<Quote, PricingError> {
    order.validate()?;
    enforce_menu_rules(order, facts)?;

    let mut breakdown = subtotal_lines(order, facts)?;
    if let Some(line) = add_ons_line(order, facts)? {
        breakdown.push(line);
    }

    let waived = order.pax >= cfg.free_delivery_min_qty;
    breakdown.push(distance_fee_line(order.distance_km, cfg, waived));

    let subtotal: i64 = breakdown.iter().map(|l| l.amount).sum();
    let total = subtotal;
    let (advance_amount, balance_amount) = settlement(total, advance_pct);

    Ok(Quote {
        currency: cfg.currency.clone(),
        subtotal,
        discount_amount: 0,
        tax_amount: 0,
        total,
        advance_pct,
        advance_amount,
        balance_amount,
        breakdown,
        created_at: now,
        expires_at: now + Duration::minutes(cfg.quote_validity_minutes),
    })
}
