//! Update Stock Use Case Module
//!
//! - `updater` - `StockUpdater` trait the HTTP layer forwards validated requests to
//! - `in_memory` - DashMap-backed implementation used by the server binary

pub mod in_memory;
pub mod updater;

pub use in_memory::InMemoryStockUpdater;
pub use updater::{StockUpdateError, StockUpdater, UpdatedStock};
