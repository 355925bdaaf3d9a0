use chrono::Utc;
use dashmap::DashMap;

use crate::models::UpdateStockRequest;

use super::updater::{StockUpdateError, StockUpdater, UpdatedStock};

/// Keeps the last validated request per stock ID in memory
///
/// Updates are upserts: an unknown ID is created on first update.
#[derive(Debug, Default)]
pub struct InMemoryStockUpdater {
    stocks: DashMap<i64, UpdatedStock>,
}

impl InMemoryStockUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}

#[async_trait::async_trait]
impl StockUpdater for InMemoryStockUpdater {
    async fn update(
        &self,
        id: i64,
        request: UpdateStockRequest,
    ) -> Result<UpdatedStock, StockUpdateError> {
        let updated = UpdatedStock {
            id,
            stock: request,
            updated_at: Utc::now(),
        };

        let previous = self.stocks.insert(id, updated.clone());
        tracing::info!(
            stock_id = id,
            symbol = updated.stock.symbol(),
            created = previous.is_none(),
            "Stock updated"
        );

        Ok(updated)
    }

    async fn get(&self, id: i64) -> Result<UpdatedStock, StockUpdateError> {
        self.stocks
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StockUpdateError::NotFound(id))
    }
}
