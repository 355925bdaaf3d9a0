use utoipa::OpenApi;

use crate::api::handlers;
use crate::api::responses::*;
use crate::models::UpdateStockRequest;
use crate::stocks::UpdatedStock;
use crate::validation::{FieldError, ValidationRule};

/// OpenAPI v1 specification
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stock Update API",
        version = "1.0.0",
        description = "Validated stock update endpoint built in Rust",
        license(
            name = "MIT"
        )
    ),
    paths(
        handlers::health_check,
        handlers::update_stock,
        handlers::get_stock,
    ),
    components(
        schemas(
            UpdateStockRequest,
            UpdatedStock,
            FieldError,
            ValidationRule,
            ValidationErrorResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Stocks", description = "Stock update endpoints"),
    )
)]
pub struct ApiDocV1;
