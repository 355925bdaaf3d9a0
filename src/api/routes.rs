use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::*;
use super::openapi::ApiDocV1;

/// Create the API router with Swagger UI
pub fn create_router(updater: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/v1/openapi.json", ApiDocV1::openapi()))
        // Health check
        .route("/health", get(health_check))
        // Stock endpoints
        .route("/api/v1/stocks/:id", get(get_stock).put(update_stock))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(updater)
}
