use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

/// Validated payload of an update stock request
///
/// Only the validator builds this type, so holding one means every field
/// already passed its rule. Fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStockRequest {
    #[schema(example = "AAPL", max_length = 10)]
    symbol: String,
    #[schema(example = "AppleInc", max_length = 10)]
    company_name: String,
    /// Range 0 to 1000000000 inclusive
    #[schema(value_type = String, example = "150.50")]
    purchase: Decimal,
    /// Range 0.001 to 100 inclusive
    #[schema(value_type = String, example = "0.50")]
    last_dividend: Decimal,
    #[schema(example = "Tech", max_length = 10)]
    industry: String,
    /// Range 1 to 5000000000 inclusive
    #[schema(example = 2500000000i64, minimum = 1, maximum = 5000000000i64)]
    market_cap: i64,
}

impl UpdateStockRequest {
    pub(crate) fn new(
        symbol: String,
        company_name: String,
        purchase: Decimal,
        last_dividend: Decimal,
        industry: String,
        market_cap: i64,
    ) -> Self {
        Self {
            symbol,
            company_name,
            purchase,
            last_dividend,
            industry,
            market_cap,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn purchase(&self) -> Decimal {
        self.purchase
    }

    pub fn last_dividend(&self) -> Decimal {
        self.last_dividend
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn market_cap(&self) -> i64 {
        self.market_cap
    }
}
