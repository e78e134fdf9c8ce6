//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no ambient state. Every
//! multiplication that produces a currency amount rounds to integer paise
//! immediately (line-by-line), so the sum of rounded lines may differ by
//! ±1 paise from rounding the grand total once; that is the reference
//! system's behavior and is expected.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::config::{DiscountTier, PricingConfig};
use crate::error::PricingError;

use super::breakdown::{BreakdownLine, LineKind};
use super::models::{chargeable_km, CatalogFacts, TierPricing};
use super::order::OrderSpecification;

/// Round a decimal amount to integer paise, half away from zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use spicebox_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5)), 3);
/// assert_eq!(round_money(dec!(-2.5)), -3);
/// ```
pub fn round_money(amount: Decimal) -> i64 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        // Saturate rather than wrap; amounts near i64::MAX paise are not
        // reachable from validated catalog inputs.
        .unwrap_or(i64::MAX)
}

/// `round(amount * pct / 100)` in paise.
pub fn round_pct(amount: i64, pct: u32) -> i64 {
    round_money(Decimal::from(amount) * Decimal::from(pct) / Decimal::from(100))
}

/// `round(amount * rate)` in paise, for fractional rates like a 0.05 tax.
pub fn round_rate(amount: i64, rate: Decimal) -> i64 {
    round_money(Decimal::from(amount) * rate)
}

/// Food subtotal lines for the tier's pricing mode.
///
/// Per-unit mode emits a single line; base+extra mode emits the base line
/// plus an extra-pax line when pax exceeds the tier minimum.
pub fn subtotal_lines(
    order: &OrderSpecification,
    facts: &CatalogFacts,
) -> Result<Vec<BreakdownLine>, PricingError> {
    order.validate()?;

    let lines = match facts.tier.pricing {
        TierPricing::PerUnit { unit_price } => vec![BreakdownLine::new(
            LineKind::PerUnit {
                qty: order.pax,
                unit_price,
            },
            i64::from(order.pax) * unit_price,
        )],
        TierPricing::BasePlusExtra {
            base_price,
            min_pax,
            per_pax,
        } => {
            let mut lines = vec![BreakdownLine::new(LineKind::BaseCost, base_price)];
            if order.pax > min_pax {
                let extra = order.pax - min_pax;
                lines.push(BreakdownLine::new(
                    LineKind::ExtraPax { extra, per_pax },
                    i64::from(extra) * per_pax,
                ));
            }
            lines
        }
    };

    Ok(lines)
}

/// Aggregated premium surcharge for the unique selected items.
///
/// Duplicate ids in the raw selection collapse before summing (set
/// semantics). Items with a zero delta contribute nothing; when no selected
/// item is premium the line is omitted.
pub fn premium_line(
    order: &OrderSpecification,
    facts: &CatalogFacts,
) -> Result<Option<BreakdownLine>, PricingError> {
    let mut per_plate_delta = 0i64;
    let mut premium_count = 0u32;

    for id in order.unique_item_ids() {
        let item = facts.item(id)?;
        if item.premium_delta > 0 {
            per_plate_delta += item.premium_delta;
            premium_count += 1;
        }
    }

    if premium_count == 0 {
        return Ok(None);
    }

    Ok(Some(BreakdownLine::new(
        LineKind::PremiumAddOns {
            item_count: premium_count,
            per_plate_delta,
        },
        per_plate_delta * i64::from(order.pax),
    )))
}

/// Aggregated add-on line for the bowl flow: `sum(price_per_unit) * qty`.
/// Omitted entirely when the sum is zero.
pub fn add_ons_line(
    order: &OrderSpecification,
    facts: &CatalogFacts,
) -> Result<Option<BreakdownLine>, PricingError> {
    let mut per_unit_total = 0i64;
    for id in &order.add_on_ids {
        per_unit_total += facts.add_on(id)?.price_per_unit;
    }

    if per_unit_total <= 0 {
        return Ok(None);
    }

    Ok(Some(BreakdownLine::new(
        LineKind::AddOns { qty: order.pax },
        per_unit_total * i64::from(order.pax),
    )))
}

/// Delivery fee line. Always emitted in delivering flows so the display
/// layer can show "Free delivery" against an explicit zero; `waived` forces
/// the fee to zero regardless of distance (free-delivery-by-volume).
pub fn distance_fee_line(
    distance_km: Decimal,
    cfg: &PricingConfig,
    waived: bool,
) -> BreakdownLine {
    // When no fee can apply the structured fields read as free delivery
    // outright: zero chargeable km at a zero rate.
    let (km, rate) = if waived || cfg.per_km_fee <= 0 {
        (Decimal::ZERO, 0)
    } else {
        (chargeable_km(distance_km, cfg.free_km), cfg.per_km_fee)
    };
    let fee = round_money(km * Decimal::from(rate));

    BreakdownLine::new(
        LineKind::DistanceFee {
            chargeable_km: km,
            per_km_rate: rate,
        },
        fee,
    )
}

/// Weekend surge on the running subtotal (which already includes the
/// delivery fee). None on weekdays or when the percentage is zero.
pub fn weekend_surge_line(
    order: &OrderSpecification,
    running_subtotal: i64,
    pct: u32,
) -> Option<BreakdownLine> {
    if pct == 0 || !order.is_weekend() {
        return None;
    }
    Some(BreakdownLine::new(
        LineKind::WeekendSurge { pct },
        round_pct(running_subtotal, pct),
    ))
}

/// Look up the discount percent for a pax count: the highest tier threshold
/// not exceeding `pax` wins.
pub fn discount_pct(pax: u32, tiers: &[DiscountTier]) -> u32 {
    tiers
        .iter()
        .filter(|t| t.min_pax <= pax)
        .max_by_key(|t| t.min_pax)
        .map(|t| t.percent)
        .unwrap_or(0)
}

/// Volume discount line. The base is the food cost only (subtotal plus
/// premium add-ons), never the delivery fee or surge. Amount is negative.
pub fn discount_line(food_cost: i64, pax: u32, tiers: &[DiscountTier]) -> Option<BreakdownLine> {
    let pct = discount_pct(pax, tiers);
    if pct == 0 {
        return None;
    }
    Some(BreakdownLine::new(
        LineKind::BulkDiscount { pct },
        -round_pct(food_cost, pct),
    ))
}

/// Tax line on the post-discount subtotal.
pub fn tax_line(after_discount: i64, rate: Decimal) -> BreakdownLine {
    BreakdownLine::new(LineKind::Tax { rate }, round_rate(after_discount, rate))
}

/// Split a total into advance and balance. The advance is floored at one
/// paisa so a positive total never yields a zero-advance booking; the
/// balance never goes negative.
pub fn settlement(total: i64, advance_pct: u32) -> (i64, i64) {
    if total <= 0 {
        return (0, 0);
    }
    let advance = round_pct(total, advance_pct).max(1).min(total);
    (advance, total - advance)
}

/// Enforce the tier's fixed menu composition ("exactly 2 Starters") against
/// the deduplicated selection.
pub fn enforce_menu_rules(
    order: &OrderSpecification,
    facts: &CatalogFacts,
) -> Result<(), PricingError> {
    if facts.tier.menu_rules.is_empty() {
        return Ok(());
    }

    let unique = order.unique_item_ids();
    for rule in &facts.tier.menu_rules {
        let mut actual = 0u32;
        for id in &unique {
            if facts.item(id)?.category == rule.category {
                actual += 1;
            }
        }
        if actual != rule.exact_count {
            return Err(PricingError::InconsistentTierRules {
                category: rule.category.clone(),
                expected: rule.exact_count,
                actual,
            });
        }
    }
    Ok(())
}
