pub mod stock;

pub use stock::UpdateStockRequest;
