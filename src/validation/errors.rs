//! Error types for request validation
//!
//! Validation never fails fast: every violated rule is recorded as a
//! [`FieldError`] and the whole list is handed back as [`ValidationErrors`],
//! so a client can fix every problem in one round trip.

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Pseudo field name used when the payload as a whole is rejected
pub const PAYLOAD_FIELD: &str = "$";

/// The rule a field value violated
///
/// # Rule Categories
///
/// - **Presence**: `MissingField`
/// - **Shape**: `TypeMismatch`
/// - **Constraint**: `MaxLengthExceeded`, `OutOfRange`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum ValidationRule {
    /// Field absent, `null`, or blank text
    MissingField,
    /// Value could not be coerced to the declared type
    TypeMismatch,
    /// Text longer than the field's maximum length
    MaxLengthExceeded,
    /// Number outside the field's closed interval
    OutOfRange,
}

/// A validation failure scoped to one named field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Wire name of the field, or `$` for the whole payload
    #[schema(value_type = String, example = "symbol")]
    pub field: &'static str,
    pub rule: ValidationRule,
    #[schema(example = "Symbol must be at most 10 characters long")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, rule: ValidationRule, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }
}

/// Ordered list of every field error found in one validation pass
///
/// Errors are kept in field declaration order. An empty list never leaves
/// the validator: it returns the validated record instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{} validation error(s): {}", .errors.len(), summarize(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors for a payload that is not a key-value mapping at all
    pub fn payload(message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(
                PAYLOAD_FIELD,
                ValidationRule::TypeMismatch,
                message,
            )],
        }
    }

    pub fn add(&mut self, field: &'static str, rule: ValidationRule, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, rule, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns true if the whole payload was rejected rather than single fields
    pub fn is_payload_error(&self) -> bool {
        self.errors.iter().any(|e| e.field == PAYLOAD_FIELD)
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }
}
