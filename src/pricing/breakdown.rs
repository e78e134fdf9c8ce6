//! Itemized quote breakdown.
//!
//! Each line carries a structured `kind` holding the arithmetic inputs
//! (chargeable km, per-km rate, percentages) next to the computed amount.
//! The display label is generated from the kind; consumers must read the
//! structured fields and never parse label text.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// What a breakdown line represents, with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineKind {
    /// Per-unit food cost: `qty * unit_price`.
    PerUnit { qty: u32, unit_price: i64 },
    /// Base package price covering up to the tier's minimum pax.
    BaseCost,
    /// Guests beyond the tier minimum: `extra * per_pax`.
    ExtraPax { extra: u32, per_pax: i64 },
    /// Aggregated premium item surcharge: `per_plate_delta * pax`.
    PremiumAddOns { item_count: u32, per_plate_delta: i64 },
    /// Aggregated add-on units: `sum(price_per_unit) * qty`.
    AddOns { qty: u32 },
    /// Delivery fee: `chargeable_km * per_km_rate`, 0 when waived.
    DistanceFee {
        chargeable_km: Decimal,
        per_km_rate: i64,
    },
    /// Weekend surge on the running subtotal.
    WeekendSurge { pct: u32 },
    /// Volume discount on the food cost (amount is negative).
    BulkDiscount { pct: u32 },
    /// Tax on the post-discount subtotal.
    Tax { rate: Decimal },
}

/// One line of a quote's itemized breakdown. Amounts are signed paise;
/// discounts are negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    pub kind: LineKind,
    pub label: String,
    pub amount: i64,
}

impl BreakdownLine {
    pub fn new(kind: LineKind, amount: i64) -> Self {
        let label = render_label(&kind, amount);
        Self {
            kind,
            label,
            amount,
        }
    }
}

/// Format paise as a rupee figure: whole rupees when exact, two decimals
/// otherwise.
pub fn fmt_rupees(paise: i64) -> String {
    let sign = if paise < 0 { "-" } else { "" };
    let abs = paise.unsigned_abs();
    if abs % 100 == 0 {
        format!("{}{}", sign, abs / 100)
    } else {
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

fn fmt_pct(rate: Decimal) -> String {
    (rate * dec!(100)).normalize().to_string()
}

fn render_label(kind: &LineKind, amount: i64) -> String {
    match kind {
        LineKind::PerUnit { qty, unit_price } => {
            format!("{} units × ₹{}", qty, fmt_rupees(*unit_price))
        }
        LineKind::BaseCost => "Base package".to_string(),
        LineKind::ExtraPax { extra, per_pax } => {
            format!("Extra {} pax × ₹{}", extra, fmt_rupees(*per_pax))
        }
        LineKind::PremiumAddOns {
            item_count,
            per_plate_delta,
        } => format!(
            "Premium add-ons ({} items) +₹{}/plate",
            item_count,
            fmt_rupees(*per_plate_delta)
        ),
        LineKind::AddOns { qty } => format!("Add-ons × {}", qty),
        LineKind::DistanceFee {
            chargeable_km,
            per_km_rate,
        } => {
            if amount == 0 {
                "Delivery fee".to_string()
            } else {
                format!(
                    "Delivery fee ({} km × ₹{}/km)",
                    chargeable_km.normalize(),
                    fmt_rupees(*per_km_rate)
                )
            }
        }
        LineKind::WeekendSurge { pct } => format!("Weekend surge {}%", pct),
        LineKind::BulkDiscount { pct } => format!("Bulk discount {}%", pct),
        LineKind::Tax { rate } => format!("GST {}%", fmt_pct(*rate)),
    }
}
