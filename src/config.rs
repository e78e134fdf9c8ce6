//! Application configuration
//!
//! Pricing defaults live in `PricingConfig` and are passed explicitly into
//! every engine call; the pure calculators never read the environment
//! themselves. Everything is overridable via `SPICEBOX_*` env vars (loaded
//! from `.env` by dotenvy in main).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;
use tracing::warn;

/// A volume discount tier: orders of at least `min_pax` guests get `percent`
/// off the food cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountTier {
    pub min_pax: u32,
    pub percent: u32,
}

/// Pricing defaults threaded into every engine call.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// ISO currency code for all quotes.
    pub currency: String,
    /// Tax rate applied after discount (0.05 = 5%).
    pub tax_rate: Decimal,
    /// Default advance percentage; flows may override per call.
    pub advance_pct: u32,
    /// Delivery distance included for free, in km.
    pub free_km: Decimal,
    /// Delivery fee per chargeable km, in paise.
    pub per_km_fee: i64,
    /// Surcharge applied to weekend event dates, whole percent.
    pub weekend_surge_pct: u32,
    /// Bowl orders of at least this quantity ship free regardless of distance.
    pub free_delivery_min_qty: u32,
    /// Volume discount table, sorted ascending by `min_pax`.
    pub bulk_discount_tiers: Vec<DiscountTier>,
    /// How long a quote stays bookable.
    pub quote_validity_minutes: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            tax_rate: dec!(0.05),
            advance_pct: 30,
            free_km: dec!(10),
            per_km_fee: 2000,
            weekend_surge_pct: 10,
            free_delivery_min_qty: 25,
            // Only the 200+ tier is live. Marketing copy mentions 50+/5% and
            // 101+/10%; enable via SPICEBOX_DISCOUNT_TIERS once signed off.
            bulk_discount_tiers: vec![DiscountTier {
                min_pax: 200,
                percent: 15,
            }],
            quote_validity_minutes: 30,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub pricing: PricingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8090".to_string(),
            pricing: PricingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build config from the environment, falling back to defaults.
    ///
    /// Malformed overrides are logged and ignored rather than crashing the
    /// service at startup.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(addr) = std::env::var("SPICEBOX_BIND_ADDR") {
            cfg.bind_addr = addr;
        }
        if let Ok(currency) = std::env::var("SPICEBOX_CURRENCY") {
            cfg.pricing.currency = currency;
        }

        read_env("SPICEBOX_TAX_RATE", &mut cfg.pricing.tax_rate);
        read_env("SPICEBOX_ADVANCE_PCT", &mut cfg.pricing.advance_pct);
        read_env("SPICEBOX_FREE_KM", &mut cfg.pricing.free_km);
        read_env("SPICEBOX_PER_KM_FEE", &mut cfg.pricing.per_km_fee);
        read_env(
            "SPICEBOX_WEEKEND_SURGE_PCT",
            &mut cfg.pricing.weekend_surge_pct,
        );
        read_env(
            "SPICEBOX_FREE_DELIVERY_MIN_QTY",
            &mut cfg.pricing.free_delivery_min_qty,
        );
        read_env(
            "SPICEBOX_QUOTE_VALIDITY_MINUTES",
            &mut cfg.pricing.quote_validity_minutes,
        );

        if let Ok(raw) = std::env::var("SPICEBOX_DISCOUNT_TIERS") {
            match parse_discount_tiers(&raw) {
                Some(tiers) => cfg.pricing.bulk_discount_tiers = tiers,
                None => warn!("Ignoring malformed SPICEBOX_DISCOUNT_TIERS: {}", raw),
            }
        }

        cfg
    }
}

fn read_env<T: FromStr>(var: &str, target: &mut T) {
    if let Ok(raw) = std::env::var(var) {
        match raw.parse() {
            Ok(value) => *target = value,
            Err(_) => warn!("Ignoring malformed {}: {}", var, raw),
        }
    }
}

/// Parse `"50:5,101:10,200:15"` into a sorted discount table.
fn parse_discount_tiers(raw: &str) -> Option<Vec<DiscountTier>> {
    let mut tiers = Vec::new();
    for part in raw.split(',').filter(|p| !p.trim().is_empty()) {
        let (pax, pct) = part.split_once(':')?;
        tiers.push(DiscountTier {
            min_pax: pax.trim().parse().ok()?,
            percent: pct.trim().parse().ok()?,
        });
    }
    tiers.sort_by_key(|t| t.min_pax);
    Some(tiers)
}
