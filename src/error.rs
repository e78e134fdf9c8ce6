//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Pricing computation error types.
///
/// These are synchronous failures of the pure calculators: a quote is either
/// fully computed or not produced at all. There is no partial-success mode
/// and no silent defaulting to a zero price.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("unknown {kind} reference: {id}")]
    MissingCatalogReference { kind: &'static str, id: String },

    #[error("tier requires exactly {expected} selections in '{category}', got {actual}")]
    InconsistentTierRules {
        category: String,
        expected: u32,
        actual: u32,
    },
}

impl PricingError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Stable machine-readable tag for the error response body.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::MissingCatalogReference { .. } => "missing_catalog_reference",
            Self::InconsistentTierRules { .. } => "inconsistent_tier_rules",
        }
    }
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Quote not found")]
    NotFound,

    #[error("Quote has expired")]
    QuoteExpired,

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Payment gateway error: {0}")]
    Gateway(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::QuoteExpired => (StatusCode::GONE, "quote_expired", self.to_string()),
            AppError::Pricing(e) => {
                tracing::debug!("Pricing rejected: {}", e);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    e.error_type(),
                    e.to_string(),
                )
            }
            AppError::Gateway(msg) => {
                tracing::error!("Payment gateway error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "gateway_error",
                    "Payment gateway error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error_type": error_type,
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
