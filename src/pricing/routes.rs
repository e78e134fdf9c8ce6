//! Pricing API route handlers
//!
//! Thin adapters over the pure engine: deserialize, compute, store, reply.
//! The stored quote is what the backend charges against, so reads replay it
//! verbatim instead of recomputing.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::AppState;

use super::engine::{quote_bowl_order, quote_catering};
use super::requests::{BowlOrderRequest, CateringQuoteRequest};
use super::responses::{HealthResponse, QuoteResponse};

/// Build the pricing router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/pricing/quote", post(create_catering_quote))
        .route("/pricing/bowl-order", post(create_bowl_order))
        .route("/pricing/quote/:id", get(get_quote))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        quotes_stored: state.store.stats().quotes_stored,
    })
}

/// Catering quote: full pipeline including surge, discount, and tax.
async fn create_catering_quote(
    State(state): State<AppState>,
    Json(req): Json<CateringQuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let cfg = &state.config.pricing;
    let advance_pct = req.advance_pct.unwrap_or(cfg.advance_pct);

    let quote = quote_catering(&req.order, &req.catalog, cfg, advance_pct, Utc::now())?;
    tracing::debug!(
        "Catering quote for tier {}: total {} paise",
        req.catalog.tier.id,
        quote.total
    );

    let id = state.store.insert(quote.clone()).await;
    Ok(Json(QuoteResponse::from_quote(id, &quote)))
}

/// Bowl order: per-unit subtotal, add-ons, and the free-delivery waiver.
async fn create_bowl_order(
    State(state): State<AppState>,
    Json(req): Json<BowlOrderRequest>,
) -> Result<Json<QuoteResponse>> {
    let cfg = &state.config.pricing;
    let advance_pct = req.advance_pct.unwrap_or(cfg.advance_pct);

    let quote = quote_bowl_order(&req.order, &req.catalog, cfg, advance_pct, Utc::now())?;
    tracing::debug!(
        "Bowl order for tier {}: total {} paise",
        req.catalog.tier.id,
        quote.total
    );

    let id = state.store.insert(quote.clone()).await;
    Ok(Json(QuoteResponse::from_quote(id, &quote)))
}

/// Replay a stored quote. Unknown ids are 404; stale quotes are 410 so the
/// client knows to request a fresh price.
async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuoteResponse>> {
    let quote = state.store.get(&id).await.ok_or(AppError::NotFound)?;
    if quote.is_expired(Utc::now()) {
        return Err(AppError::QuoteExpired);
    }
    Ok(Json(QuoteResponse::from_quote(id, &quote)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::QuoteStore;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let config = Arc::new(AppConfig::default());
        let store = QuoteStore::new(config.pricing.quote_validity_minutes);
        router(AppState { config, store })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn catering_request() -> Value {
        json!({
            "order": {
                "pax": 120,
                "event_date": "2025-06-18",
                "distance_km": "0"
            },
            "catalog": {
                "tier": {
                    "id": "veg-deluxe",
                    "name": "Veg Deluxe",
                    "mode": "base_plus_extra",
                    "base_price": 500000,
                    "min_pax": 100,
                    "per_pax": 4500
                }
            }
        })
    }

    #[tokio::test]
    async fn quote_endpoint_returns_reference_totals() {
        let resp = test_router()
            .oneshot(post_json("/pricing/quote", catering_request()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["subtotal"], 590000);
        assert_eq!(body["tax_amount"], 29500);
        assert_eq!(body["total"], 619500);
        assert_eq!(body["advance_pct"], 30);
        assert!(body["quote_id"].is_string());
    }

    #[tokio::test]
    async fn stored_quote_replays_verbatim() {
        let app = test_router();
        let resp = app
            .clone()
            .oneshot(post_json("/pricing/quote", catering_request()))
            .await
            .unwrap();
        let created = body_json(resp).await;
        let id = created["quote_id"].as_str().unwrap().to_string();

        let resp = app
            .oneshot(
                Request::builder()
                    .uri(format!("/pricing/quote/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let read = body_json(resp).await;
        assert_eq!(read, created);
    }

    #[tokio::test]
    async fn unknown_quote_is_404() {
        let resp = test_router()
            .oneshot(
                Request::builder()
                    .uri("/pricing/quote/00000000-0000-0000-0000-000000000000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_pax_is_422_with_typed_body() {
        let mut req = catering_request();
        req["order"]["pax"] = json!(0);
        let resp = test_router()
            .oneshot(post_json("/pricing/quote", req))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(resp).await;
        assert_eq!(body["error_type"], "invalid_input");
    }

    #[tokio::test]
    async fn bowl_order_endpoint_waives_delivery_over_threshold() {
        let req = json!({
            "order": {
                "pax": 30,
                "event_date": "2025-06-18",
                "distance_km": "18"
            },
            "catalog": {
                "tier": {
                    "id": "bowl-chicken",
                    "name": "Chicken Bowl",
                    "mode": "per_unit",
                    "unit_price": 21900
                }
            },
            "advance_pct": 100
        });
        let resp = test_router()
            .oneshot(post_json("/pricing/bowl-order", req))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["total"], 657000);
        assert_eq!(body["tax_amount"], 0);
        assert_eq!(body["advance_amount"], 657000);
    }

    #[tokio::test]
    async fn health_reports_store_stats() {
        let resp = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }
}
