use anyhow::Context;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use spicebox_pricing::config::AppConfig;
use spicebox_pricing::pricing;
use spicebox_pricing::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("spicebox_pricing=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr.clone();
    info!(
        "Pricing defaults: tax {}%, advance {}%, free delivery within {} km",
        config.pricing.tax_rate * rust_decimal::Decimal::from(100),
        config.pricing.advance_pct,
        config.pricing.free_km
    );

    let state = AppState::new(config);
    let app = pricing::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("Pricing service listening on {}", bind_addr);

    axum::serve(listener, app)
        .await
        .context("server terminated")?;

    Ok(())
}
