use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::UpdateStockRequest;

/// Errors returned by an update stock use case
#[derive(Debug, Error)]
pub enum StockUpdateError {
    /// No stock exists under the given ID
    #[error("Stock not found: {0}")]
    NotFound(i64),

    /// The backing store failed
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result of applying an update stock request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedStock {
    pub id: i64,
    pub stock: UpdateStockRequest,
    pub updated_at: DateTime<Utc>,
}

/// Update stock use case; receives only requests that passed validation
///
/// Implementations decide how the update is persisted. The HTTP layer only
/// maps their result and errors onto responses.
#[async_trait::async_trait]
pub trait StockUpdater: Send + Sync {
    /// Apply a validated update to the stock with `id`
    async fn update(
        &self,
        id: i64,
        request: UpdateStockRequest,
    ) -> Result<UpdatedStock, StockUpdateError>;

    /// Fetch the last applied update for `id`
    async fn get(&self, id: i64) -> Result<UpdatedStock, StockUpdateError>;
}
