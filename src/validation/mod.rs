//! Request Validation Module
//!
//! - `errors` - Rule taxonomy and accumulated field errors
//! - `rules` - Field descriptors for the update stock payload
//! - `validator` - Entry point turning a raw payload into a validated request

pub mod errors;
pub mod rules;
pub mod validator;

pub use errors::{FieldError, ValidationErrors, ValidationRule, PAYLOAD_FIELD};
pub use rules::{FieldRule, FIELD_ORDER};
pub use validator::{validate, validate_slice};
