use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

use crate::stocks::{StockUpdateError, StockUpdater, UpdatedStock};
use crate::validation::{validate_slice, ValidationErrors};

use super::responses::*;

/// Shared application state
pub type AppState = Arc<dyn StockUpdater>;

/// Errors surfaced by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request payload failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The update use case failed
    #[error(transparent)]
    Stock(#[from] StockUpdateError),
}

/// Convert ApiError to HTTP response
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Validation(errors) => {
                let status = StatusCode::BAD_REQUEST;
                let body = Json(ValidationErrorResponse {
                    error: status.to_string(),
                    message: "One or more validation errors occurred.".to_string(),
                    errors: errors.into_vec(),
                });
                return (status, body).into_response();
            }
            ApiError::Stock(e @ StockUpdateError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            ApiError::Stock(e @ StockUpdateError::Storage(_)) => {
                tracing::error!("❌ Stock update failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Update a stock
///
/// Every field is validated before the update is applied; a rejected request
/// lists all failing fields at once.
#[utoipa::path(
    put,
    path = "/api/v1/stocks/{id}",
    tag = "Stocks",
    params(
        ("id" = i64, Path, description = "Stock ID")
    ),
    request_body = UpdateStockRequest,
    responses(
        (status = 200, description = "Stock updated", body = UpdatedStock),
        (status = 400, description = "Invalid request payload", body = ValidationErrorResponse),
        (status = 404, description = "Stock not found", body = ErrorResponse),
        (status = 500, description = "Update failed", body = ErrorResponse)
    )
)]
pub async fn update_stock(
    State(updater): State<AppState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Json<UpdatedStock>, ApiError> {
    let request = validate_slice(&body).map_err(|errors| {
        tracing::warn!(
            stock_id = id,
            error_count = errors.len(),
            malformed_body = errors.is_payload_error(),
            "Rejected update stock request"
        );
        errors
    })?;

    let updated = updater.update(id, request).await?;
    Ok(Json(updated))
}

/// Get the last applied update of a stock
#[utoipa::path(
    get,
    path = "/api/v1/stocks/{id}",
    tag = "Stocks",
    params(
        ("id" = i64, Path, description = "Stock ID")
    ),
    responses(
        (status = 200, description = "Stock found", body = UpdatedStock),
        (status = 404, description = "Stock not found", body = ErrorResponse)
    )
)]
pub async fn get_stock(
    State(updater): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UpdatedStock>, ApiError> {
    let stock = updater.get(id).await?;
    Ok(Json(stock))
}
