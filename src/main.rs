use std::sync::Arc;
use stock_update_api::{create_router, AppConfig, AppState, InMemoryStockUpdater};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing (before config so invalid values get logged)
    let log_filter = AppConfig::log_filter_from_env();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    // Create the update stock use case
    let updater: AppState = Arc::new(InMemoryStockUpdater::new());

    let app = create_router(updater, config.max_body_bytes);

    let addr = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("❌ Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("🚀 Stock Update API server running on http://{}", addr);
    tracing::info!("📊 Health check: http://{}/health", addr);
    tracing::info!("📚 Swagger UI: http://{}/swagger-ui", addr);
    tracing::info!("✏️  Update a stock: PUT http://{}/api/v1/stocks/{{id}}", addr);
    tracing::info!("   Max body size: {} bytes", config.max_body_bytes);

    // Start the server
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("❌ Server error: {}", e);
        std::process::exit(1);
    }
}
