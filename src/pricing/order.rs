//! Order specification: the raw selection a quote is computed from.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// One quote request's worth of customer choices. Immutable once built; a
/// changed selection gets a fresh specification and a fresh quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSpecification {
    /// Guests / plates / bowls. Must be positive.
    pub pax: u32,
    /// Delivery distance in km. Must be non-negative.
    #[serde(default)]
    pub distance_km: Decimal,
    /// Event date; weekend dates attract the surge percentage.
    pub event_date: NaiveDate,
    /// Selected menu item ids. Duplicates collapse (set semantics).
    #[serde(default)]
    pub selected_item_ids: Vec<String>,
    /// Selected add-on ids; quantity multiplier is `pax`.
    #[serde(default)]
    pub add_on_ids: Vec<String>,
}

impl OrderSpecification {
    /// Reject malformed input up front; the calculators never default a bad
    /// value to zero.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.pax == 0 {
            return Err(PricingError::invalid_input("pax must be positive"));
        }
        if self.distance_km < Decimal::ZERO {
            return Err(PricingError::invalid_input(
                "distance_km must be non-negative",
            ));
        }
        Ok(())
    }

    /// Selected item ids with duplicates collapsed, preserving first-seen
    /// order so the breakdown is deterministic.
    pub fn unique_item_ids(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.selected_item_ids.len());
        for id in &self.selected_item_ids {
            if !seen.contains(&id.as_str()) {
                seen.push(id);
            }
        }
        seen
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.event_date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
