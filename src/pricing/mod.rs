//! Pricing engine module for SpiceBox Catering.
//!
//! The one place order money math lives: the ordering backend calls this
//! service over HTTP/JSON for every price it displays or charges, so the
//! server-side quote, the order total, and any client preview all come from
//! the same computation. The calculators are pure; the routes are a thin
//! adapter over them.

pub mod breakdown;
pub mod calculators;
pub mod engine;
pub mod models;
pub mod order;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use breakdown::{BreakdownLine, LineKind};
pub use calculators::round_money;
pub use engine::{quote_bowl_order, quote_catering, Quote};
pub use models::CatalogFacts;
pub use order::OrderSpecification;
pub use routes::router;
