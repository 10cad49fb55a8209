//! Ordered field-rule tables and the evaluation loop.
//!
//! The two API variants share checks and messages; only the path prefix
//! differs. Error message text is part of the wire contract, including
//! the long-standing PAN misspelling.

use serde_json::Value;
use validator::ValidationError;

use super::lookup::field_at_path;
use super::{validate_email, validate_ein, validate_non_empty_text, validate_pan};

/// A single field rule: where to look, how to check, what to say on failure
pub struct FieldRule {
    pub path: &'static str,
    pub check: fn(&Value) -> Result<(), ValidationError>,
    pub message: &'static str,
}

/// Rules for the business API (nested `businessProfile.*` payload)
pub const BUSINESS_PROFILE_RULES: &[FieldRule] = &[
    FieldRule {
        path: "businessProfile.companyName",
        check: validate_non_empty_text,
        message: "Company name should not be empty.",
    },
    FieldRule {
        path: "businessProfile.legalName",
        check: validate_non_empty_text,
        message: "Legal name should not be empty.",
    },
    FieldRule {
        path: "businessProfile.taxIdentifiers.pan",
        check: validate_pan,
        message: "PAN numnber not valid.",
    },
    FieldRule {
        path: "businessProfile.taxIdentifiers.ein",
        check: validate_ein,
        message: "EIN should be 8 digits.",
    },
    FieldRule {
        path: "businessProfile.email",
        check: validate_email,
        message: "Email is invalid.",
    },
];

/// Rules for the product API (flat payload, identical semantics)
pub const FLAT_PROFILE_RULES: &[FieldRule] = &[
    FieldRule {
        path: "companyName",
        check: validate_non_empty_text,
        message: "Company name should not be empty.",
    },
    FieldRule {
        path: "legalName",
        check: validate_non_empty_text,
        message: "Legal name should not be empty.",
    },
    FieldRule {
        path: "taxIdentifiers.pan",
        check: validate_pan,
        message: "PAN numnber not valid.",
    },
    FieldRule {
        path: "taxIdentifiers.ein",
        check: validate_ein,
        message: "EIN should be 8 digits.",
    },
    FieldRule { path: "email", check: validate_email, message: "Email is invalid." },
];

/// Evaluate a rule table against a payload in declared order.
///
/// A rule is skipped entirely when its field is absent or JSON null
/// ("validate only if present" - nothing is mandatory here except the
/// top-level identifier, which the handlers check before this runs).
/// Failure messages are collected in rule order, never short-circuited.
pub fn evaluate_rules(payload: &Value, rules: &[FieldRule]) -> Vec<String> {
    let mut errors = Vec::new();

    for rule in rules {
        let value = match field_at_path(payload, rule.path) {
            None | Some(Value::Null) => continue,
            Some(value) => value,
        };

        if (rule.check)(value).is_err() {
            errors.push(rule.message.to_string());
        }
    }

    errors
}
