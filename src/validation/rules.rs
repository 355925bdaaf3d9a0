//! Declarative field rules for the update stock payload
//!
//! Each field of the request is described by one descriptor constant. A
//! descriptor knows its wire name, how to coerce a raw JSON value into its
//! declared type, and which bounds apply afterwards. The validator evaluates
//! the descriptors in declaration order through the [`FieldRule`] trait.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Map, Value};

use super::errors::{ValidationErrors, ValidationRule};

// ============================================================================
// Field Names and Lookup
// ============================================================================

/// Naming metadata for one payload field
#[derive(Debug, Clone, Copy)]
pub struct FieldName {
    /// camelCase key expected on the wire
    pub wire: &'static str,
    /// Human-readable name used in messages
    pub display: &'static str,
    /// Alternate keys accepted for the same field
    pub aliases: &'static [&'static str],
}

impl FieldName {
    fn matches(&self, key: &str) -> bool {
        key.eq_ignore_ascii_case(self.wire)
            || self.aliases.iter().any(|alias| key.eq_ignore_ascii_case(alias))
    }

    /// Find the raw value for this field
    ///
    /// Exact keys win over case-insensitive matches. `null` counts as absent,
    /// so a `null` under one spelling does not hide a value under another.
    pub fn lookup<'a>(&self, payload: &'a Map<String, Value>) -> Option<&'a Value> {
        let present = |value: &&Value| !value.is_null();
        payload
            .get(self.wire)
            .filter(present)
            .or_else(|| {
                self.aliases
                    .iter()
                    .find_map(|alias| payload.get(*alias).filter(present))
            })
            .or_else(|| {
                payload
                    .iter()
                    .find(|(key, value)| self.matches(key) && !value.is_null())
                    .map(|(_, value)| value)
            })
    }

    fn required_message(&self) -> String {
        format!("The {} field is required.", self.display)
    }

    fn type_message(&self, expected: &str) -> String {
        format!("The field {} must be {}.", self.display, expected)
    }

    fn range_message(&self, min: impl std::fmt::Display, max: impl std::fmt::Display) -> String {
        format!("The field {} must be between {} and {}.", self.display, min, max)
    }
}

/// A single field check that coerces, bounds-checks, and records failures
///
/// `check` returns the coerced value only when the field passed every rule.
/// Whenever it returns `None` it has pushed exactly one error.
pub trait FieldRule {
    type Output;

    fn field(&self) -> &FieldName;

    fn check(
        &self,
        payload: &Map<String, Value>,
        errors: &mut ValidationErrors,
    ) -> Option<Self::Output>;
}

// ============================================================================
// Rule Kinds
// ============================================================================

/// Required text with a maximum length in characters
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    pub field: FieldName,
    pub max_len: usize,
    pub max_len_message: &'static str,
}

impl FieldRule for TextRule {
    type Output = String;

    fn field(&self) -> &FieldName {
        &self.field
    }

    fn check(&self, payload: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<String> {
        let name = self.field.wire;
        match self.field.lookup(payload) {
            None => {
                errors.add(name, ValidationRule::MissingField, self.field.required_message());
                None
            }
            Some(Value::String(text)) if text.trim().is_empty() => {
                errors.add(name, ValidationRule::MissingField, self.field.required_message());
                None
            }
            Some(Value::String(text)) if text.chars().count() > self.max_len => {
                errors.add(name, ValidationRule::MaxLengthExceeded, self.max_len_message);
                None
            }
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => {
                errors.add(
                    name,
                    ValidationRule::TypeMismatch,
                    self.field.type_message("a string"),
                );
                None
            }
        }
    }
}

/// Required decimal within a closed interval
#[derive(Debug, Clone, Copy)]
pub struct DecimalRule {
    pub field: FieldName,
    pub min: Decimal,
    pub max: Decimal,
}

impl FieldRule for DecimalRule {
    type Output = Decimal;

    fn field(&self) -> &FieldName {
        &self.field
    }

    fn check(&self, payload: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<Decimal> {
        let name = self.field.wire;
        let raw = match self.field.lookup(payload) {
            Some(Value::String(text)) if text.trim().is_empty() => None,
            other => other,
        };
        let Some(raw) = raw else {
            errors.add(name, ValidationRule::MissingField, self.field.required_message());
            return None;
        };

        match coerce_decimal(raw) {
            None => {
                errors.add(
                    name,
                    ValidationRule::TypeMismatch,
                    self.field.type_message("a decimal number"),
                );
                None
            }
            Some(value) if value < self.min || value > self.max => {
                errors.add(
                    name,
                    ValidationRule::OutOfRange,
                    self.field.range_message(self.min, self.max),
                );
                None
            }
            Some(value) => Some(value),
        }
    }
}

/// Required 64-bit integer within a closed interval
#[derive(Debug, Clone, Copy)]
pub struct IntegerRule {
    pub field: FieldName,
    pub min: i64,
    pub max: i64,
}

impl FieldRule for IntegerRule {
    type Output = i64;

    fn field(&self) -> &FieldName {
        &self.field
    }

    fn check(&self, payload: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<i64> {
        let name = self.field.wire;
        let raw = match self.field.lookup(payload) {
            Some(Value::String(text)) if text.trim().is_empty() => None,
            other => other,
        };
        let Some(raw) = raw else {
            errors.add(name, ValidationRule::MissingField, self.field.required_message());
            return None;
        };

        match coerce_integer(raw) {
            None => {
                errors.add(
                    name,
                    ValidationRule::TypeMismatch,
                    self.field.type_message("a 64-bit integer"),
                );
                None
            }
            Some(value) if !(self.min..=self.max).contains(&value) => {
                errors.add(
                    name,
                    ValidationRule::OutOfRange,
                    self.field.range_message(self.min, self.max),
                );
                None
            }
            Some(value) => Some(value),
        }
    }
}

// ============================================================================
// Coercion
// ============================================================================

/// Numbers and numeric strings, including exponent notation
///
/// JSON numbers keep the digits as sent, so values are never rounded
/// through `f64` before the bounds check.
pub fn coerce_decimal(raw: &Value) -> Option<Decimal> {
    match raw {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Integral numbers and integer strings that fit in an `i64`
pub fn coerce_integer(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

// ============================================================================
// UpdateStockRequest Descriptors
// ============================================================================

pub const TEXT_MAX_LEN: usize = 10;

pub const SYMBOL: TextRule = TextRule {
    field: FieldName {
        wire: "symbol",
        display: "Symbol",
        aliases: &[],
    },
    max_len: TEXT_MAX_LEN,
    max_len_message: "Symbol must be at most 10 characters long",
};

// NOTE: companyName and industry share the symbol's 10 character limit.
// Real names rarely fit; the bound is kept as published for client compatibility.
pub const COMPANY_NAME: TextRule = TextRule {
    field: FieldName {
        wire: "companyName",
        display: "Company Name",
        aliases: &[],
    },
    max_len: TEXT_MAX_LEN,
    max_len_message: "Company Name must be at most 10 characters long",
};

pub const PURCHASE: DecimalRule = DecimalRule {
    field: FieldName {
        wire: "purchase",
        display: "Purchase",
        aliases: &[],
    },
    min: dec!(0),
    max: dec!(1000000000),
};

pub const LAST_DIVIDEND: DecimalRule = DecimalRule {
    field: FieldName {
        wire: "lastDividend",
        display: "Last Dividend",
        aliases: &["lastDiv"],
    },
    min: dec!(0.001),
    max: dec!(100),
};

pub const INDUSTRY: TextRule = TextRule {
    field: FieldName {
        wire: "industry",
        display: "Industry",
        aliases: &[],
    },
    max_len: TEXT_MAX_LEN,
    max_len_message: "Sector must be at most 10 characters long",
};

pub const MARKET_CAP: IntegerRule = IntegerRule {
    field: FieldName {
        wire: "marketCap",
        display: "Market Cap",
        aliases: &[],
    },
    min: 1,
    max: 5_000_000_000,
};

/// Wire names in declaration order; errors are reported in this order
pub const FIELD_ORDER: [&str; 6] = [
    SYMBOL.field.wire,
    COMPANY_NAME.field.wire,
    PURCHASE.field.wire,
    LAST_DIVIDEND.field.wire,
    INDUSTRY.field.wire,
    MARKET_CAP.field.wire,
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_lookup_prefers_exact_key() {
        let payload = object(json!({ "Symbol": "LOWER", "symbol": "EXACT" }));
        assert_eq!(SYMBOL.field.lookup(&payload), Some(&json!("EXACT")));
    }

    #[test]
    fn test_lookup_case_insensitive_and_alias() {
        let payload = object(json!({ "CompanyName": "AppleInc", "LastDiv": 0.5 }));
        assert_eq!(COMPANY_NAME.field.lookup(&payload), Some(&json!("AppleInc")));
        assert_eq!(LAST_DIVIDEND.field.lookup(&payload), Some(&json!(0.5)));
    }

    #[test]
    fn test_lookup_null_is_absent() {
        let payload = object(json!({ "symbol": null }));
        assert!(SYMBOL.field.lookup(&payload).is_none());
    }

    #[test]
    fn test_lookup_null_does_not_hide_other_spelling() {
        let payload = object(json!({ "symbol": null, "Symbol": "AAPL" }));
        assert_eq!(SYMBOL.field.lookup(&payload), Some(&json!("AAPL")));

        let payload = object(json!({ "lastDividend": null, "lastDiv": 0.5 }));
        assert_eq!(LAST_DIVIDEND.field.lookup(&payload), Some(&json!(0.5)));
    }

    #[test]
    fn test_text_rule_boundaries() {
        let mut errors = ValidationErrors::new();

        let ten = object(json!({ "symbol": "ABCDEFGHIJ" }));
        assert_eq!(SYMBOL.check(&ten, &mut errors), Some("ABCDEFGHIJ".to_string()));
        assert!(errors.is_empty());

        let eleven = object(json!({ "symbol": "ABCDEFGHIJK" }));
        assert_eq!(SYMBOL.check(&eleven, &mut errors), None);
        assert_eq!(errors.errors()[0].rule, ValidationRule::MaxLengthExceeded);
        assert_eq!(errors.errors()[0].message, "Symbol must be at most 10 characters long");
    }

    #[test]
    fn test_text_rule_counts_characters_not_bytes() {
        let mut errors = ValidationErrors::new();
        let payload = object(json!({ "industry": "Télécom äö" }));
        assert!(INDUSTRY.check(&payload, &mut errors).is_some());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_text_rule_blank_and_wrong_type() {
        let mut errors = ValidationErrors::new();
        assert!(SYMBOL.check(&object(json!({ "symbol": "   " })), &mut errors).is_none());
        assert!(SYMBOL.check(&object(json!({ "symbol": 42 })), &mut errors).is_none());

        assert_eq!(errors.errors()[0].rule, ValidationRule::MissingField);
        assert_eq!(errors.errors()[0].message, "The Symbol field is required.");
        assert_eq!(errors.errors()[1].rule, ValidationRule::TypeMismatch);
    }

    #[test]
    fn test_decimal_rule_inclusive_bounds() {
        let mut errors = ValidationErrors::new();
        let low = object(json!({ "lastDividend": 0.001 }));
        let high = object(json!({ "lastDividend": 100 }));

        assert_eq!(LAST_DIVIDEND.check(&low, &mut errors), Some(dec!(0.001)));
        assert_eq!(LAST_DIVIDEND.check(&high, &mut errors), Some(dec!(100)));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_decimal_rule_rejects_without_clamping() {
        let mut errors = ValidationErrors::new();
        let below = object(json!({ "lastDividend": 0.0009 }));

        assert_eq!(LAST_DIVIDEND.check(&below, &mut errors), None);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].rule, ValidationRule::OutOfRange);
        assert_eq!(
            errors.errors()[0].message,
            "The field Last Dividend must be between 0.001 and 100."
        );
    }

    #[test]
    fn test_coerce_decimal() {
        assert_eq!(coerce_decimal(&json!(150.5)), Some(dec!(150.5)));
        assert_eq!(coerce_decimal(&json!("150.50")), Some(dec!(150.50)));
        assert_eq!(coerce_decimal(&json!(" 42 ")), Some(dec!(42)));
        assert_eq!(coerce_decimal(&json!("1e3")), Some(dec!(1000)));
        assert_eq!(coerce_decimal(&json!("abc")), None);
        assert_eq!(coerce_decimal(&json!(true)), None);
        assert_eq!(coerce_decimal(&json!([1])), None);
    }

    #[test]
    fn test_coerce_integer() {
        assert_eq!(coerce_integer(&json!(2500000000i64)), Some(2_500_000_000));
        assert_eq!(coerce_integer(&json!("5000000000")), Some(5_000_000_000));
        assert_eq!(coerce_integer(&json!(-3)), Some(-3));
        assert_eq!(coerce_integer(&json!(2.5)), None);
        assert_eq!(coerce_integer(&json!(u64::MAX)), None);
        assert_eq!(coerce_integer(&json!({})), None);
    }

    #[test]
    fn test_integer_rule_bounds() {
        let mut errors = ValidationErrors::new();
        assert_eq!(MARKET_CAP.check(&object(json!({ "marketCap": 1 })), &mut errors), Some(1));
        assert_eq!(
            MARKET_CAP.check(&object(json!({ "marketCap": 5000000000i64 })), &mut errors),
            Some(5_000_000_000)
        );
        assert!(errors.is_empty());

        assert_eq!(MARKET_CAP.check(&object(json!({ "marketCap": 5000000001i64 })), &mut errors), None);
        assert_eq!(errors.errors()[0].rule, ValidationRule::OutOfRange);
        assert_eq!(
            errors.errors()[0].message,
            "The field Market Cap must be between 1 and 5000000000."
        );
    }

    #[test]
    fn test_blank_numeric_string_is_missing() {
        let mut errors = ValidationErrors::new();
        assert!(PURCHASE.check(&object(json!({ "purchase": "" })), &mut errors).is_none());
        assert!(MARKET_CAP.check(&object(json!({ "marketCap": " " })), &mut errors).is_none());
        assert!(errors.errors().iter().all(|e| e.rule == ValidationRule::MissingField));
    }
}
