// Library Crate Root
// lib.rs

pub mod api;
pub mod config;
pub mod models;
pub mod stocks;
pub mod validation;

// pub use = re-export at crate root
pub use api::{create_router, ApiError, AppState};
pub use config::AppConfig;
pub use models::UpdateStockRequest;
pub use stocks::{InMemoryStockUpdater, StockUpdateError, StockUpdater, UpdatedStock};
pub use validation::{validate, FieldError, ValidationErrors, ValidationRule};
