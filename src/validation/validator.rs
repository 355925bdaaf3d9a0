//! Update stock request validation
//!
//! [`validate`] is the single entry point. Unlike fail-fast checks, it runs
//! every field rule and returns all failures at once.

use serde_json::Value;

use crate::models::UpdateStockRequest;

use super::errors::ValidationErrors;
use super::rules::{
    FieldRule, COMPANY_NAME, INDUSTRY, LAST_DIVIDEND, MARKET_CAP, PURCHASE, SYMBOL,
};

/// Message for a payload that is not a JSON object
pub const PAYLOAD_MESSAGE: &str = "The request body must be a JSON object.";

/// Validate a raw payload into an [`UpdateStockRequest`]
///
/// # Validations Performed
/// 1. The payload must be a JSON object
/// 2. Each field, in declaration order, is coerced to its declared type
/// 3. Text fields must be non-blank and at most 10 characters
/// 4. Numeric fields must lie inside their closed interval
///
/// Extra keys are ignored.
///
/// # Returns
/// * `Ok(UpdateStockRequest)` holding the coerced values if every rule passed
/// * `Err(ValidationErrors)` listing every failure in field order
pub fn validate(raw: &Value) -> Result<UpdateStockRequest, ValidationErrors> {
    let Some(payload) = raw.as_object() else {
        tracing::debug!("Rejected update stock payload: not a JSON object");
        return Err(ValidationErrors::payload(PAYLOAD_MESSAGE));
    };

    let mut errors = ValidationErrors::new();

    let symbol = SYMBOL.check(payload, &mut errors);
    let company_name = COMPANY_NAME.check(payload, &mut errors);
    let purchase = PURCHASE.check(payload, &mut errors);
    let last_dividend = LAST_DIVIDEND.check(payload, &mut errors);
    let industry = INDUSTRY.check(payload, &mut errors);
    let market_cap = MARKET_CAP.check(payload, &mut errors);

    match (symbol, company_name, purchase, last_dividend, industry, market_cap) {
        (
            Some(symbol),
            Some(company_name),
            Some(purchase),
            Some(last_dividend),
            Some(industry),
            Some(market_cap),
        ) if errors.is_empty() => Ok(UpdateStockRequest::new(
            symbol,
            company_name,
            purchase,
            last_dividend,
            industry,
            market_cap,
        )),
        _ => {
            tracing::debug!(
                error_count = errors.len(),
                "Rejected update stock payload: {}",
                errors
            );
            Err(errors)
        }
    }
}

/// Parse a request body and validate it
///
/// Bytes that are not valid JSON are reported the same way as a JSON value
/// that is not an object.
pub fn validate_slice(body: &[u8]) -> Result<UpdateStockRequest, ValidationErrors> {
    let raw: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected update stock payload: invalid JSON: {}", e);
        ValidationErrors::payload(PAYLOAD_MESSAGE)
    })?;
    validate(&raw)
}

impl TryFrom<&Value> for UpdateStockRequest {
    type Error = ValidationErrors;

    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        validate(raw)
    }
}
