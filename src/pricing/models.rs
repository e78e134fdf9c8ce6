//! Catalog facts consumed by the pricing engine.
//!
//! The catering backend owns the catalog; it resolves the customer's package
//! and menu selection and ships these facts with every pricing request. All
//! prices are integers in paise.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// How a tier turns pax/qty into a food subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TierPricing {
    /// Bowls, meal boxes, and per-plate party tiers: `qty * unit_price`.
    PerUnit { unit_price: i64 },
    /// Generic packages: `base_price` covers up to `min_pax` guests, each
    /// guest beyond that adds `per_pax`.
    BasePlusExtra {
        base_price: i64,
        min_pax: u32,
        per_pax: i64,
    },
}

/// Fixed menu composition rule, e.g. "exactly 2 Starters".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRule {
    pub category: String,
    pub exact_count: u32,
}

/// A package/tier catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageTier {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub pricing: TierPricing,
    /// Empty = menu composition is unconstrained.
    #[serde(default)]
    pub menu_rules: Vec<MenuRule>,
}

/// A selectable menu item. `premium_delta` is an additive per-plate
/// surcharge in paise; 0 means the item is not premium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub premium_delta: i64,
}

/// An add-on priced per unit; the order's qty is the multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price_per_unit: i64,
}

/// The full set of catalog facts needed to price one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFacts {
    pub tier: PackageTier,
    #[serde(default)]
    pub items: Vec<MenuItem>,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
}

impl CatalogFacts {
    /// Resolve a selected menu item id.
    pub fn item(&self, id: &str) -> Result<&MenuItem, PricingError> {
        self.items.iter().find(|i| i.id == id).ok_or_else(|| {
            PricingError::MissingCatalogReference {
                kind: "menu item",
                id: id.to_string(),
            }
        })
    }

    /// Resolve a selected add-on id.
    pub fn add_on(&self, id: &str) -> Result<&AddOn, PricingError> {
        self.add_ons.iter().find(|a| a.id == id).ok_or_else(|| {
            PricingError::MissingCatalogReference {
                kind: "add-on",
                id: id.to_string(),
            }
        })
    }
}

/// Distance-related facts share the config's units: `free_km` in km,
/// `per_km_fee` in paise per km.
pub fn chargeable_km(distance_km: Decimal, free_km: Decimal) -> Decimal {
    (distance_km - free_km).max(Decimal::ZERO)
}
