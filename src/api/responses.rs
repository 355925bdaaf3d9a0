use serde::Serialize;
use utoipa::ToSchema;

use crate::validation::FieldError;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub timestamp: String,
}

/// Rejected request payload, one entry per failed field
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    #[schema(example = "400 Bad Request")]
    pub error: String,
    #[schema(example = "One or more validation errors occurred.")]
    pub message: String,
    pub errors: Vec<FieldError>,
}

/// Error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
