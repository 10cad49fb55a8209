//! # Validation Module
//!
//! Validation core for profile payloads. The payload is caller-controlled
//! and partial, so it is handled as a generic `serde_json::Value` rather
//! than a typed struct: fields are read through dotted-path lookup and
//! checked by an ordered rule table.
//!
//! Key design principles:
//! - Field checks are plain functions over JSON values, compiled regexes
//!   held in statics
//! - Rule tables are fixed `const` data, never registered dynamically
//! - A rule only runs when its field is present; absent fields pass

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use validator::ValidationError;

pub mod lookup;
pub mod rules;

// Re-export for convenience
pub use lookup::field_at_path;
pub use rules::{evaluate_rules, FieldRule, BUSINESS_PROFILE_RULES, FLAT_PROFILE_RULES};

lazy_static! {
    /// PAN: exactly 10 alphanumeric characters
    static ref PAN_REGEX: Regex = Regex::new(r"^[A-Za-z0-9]{10}$").unwrap();

    /// EIN: exactly 8 digits
    static ref EIN_REGEX: Regex = Regex::new(r"^\d{8}$").unwrap();

    /// Email: local part, `@`, domain with a 2+ letter TLD
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
}

/// A payload value must be a JSON string before any text check applies;
/// numbers, booleans, objects, and arrays fail their rule.
fn as_text(value: &Value) -> Result<&str, ValidationError> {
    value.as_str().ok_or_else(|| ValidationError::new("not_a_string"))
}

/// Validate free-text name fields (company name, legal name)
pub fn validate_non_empty_text(value: &Value) -> Result<(), ValidationError> {
    if as_text(value)?.trim().is_empty() {
        return Err(ValidationError::new("empty_text"));
    }
    Ok(())
}

/// Validate PAN identifiers
pub fn validate_pan(value: &Value) -> Result<(), ValidationError> {
    if !PAN_REGEX.is_match(as_text(value)?) {
        return Err(ValidationError::new("invalid_pan"));
    }
    Ok(())
}

/// Validate EIN identifiers
pub fn validate_ein(value: &Value) -> Result<(), ValidationError> {
    if !EIN_REGEX.is_match(as_text(value)?) {
        return Err(ValidationError::new("invalid_ein"));
    }
    Ok(())
}

/// Validate email addresses
pub fn validate_email(value: &Value) -> Result<(), ValidationError> {
    if !EMAIL_REGEX.is_match(as_text(value)?) {
        return Err(ValidationError::new("invalid_email"));
    }
    Ok(())
}
