//! Parameter constraint validation
//!
//! Produces the inline message shown under a free-form prompt. An empty
//! message means the value is acceptable.

use crate::domain::entities::{ParameterTemplateEntry, ParameterValue};

use super::coercer::coerce;

fn unmet(requirement: &str, bound: impl std::fmt::Display) -> String {
    format!("The value doesn't meet requirement: {} {}.", requirement, bound)
}

pub const NOT_A_NUMBER: &str = "The value is not a valid number.";

/// Check `raw` against `entry`'s declared type and bounds.
///
/// Checks run in a fixed order and the first failure is returned. Lengths are
/// counted in UTF-16 code units, as ARM counts them. Booleans and untyped
/// values always pass.
pub fn validate(raw: &str, entry: &ParameterTemplateEntry) -> String {
    match coerce(raw, &entry.param_type) {
        ParameterValue::Text(text) => {
            let length = text.encode_utf16().count();
            if let Some(min) = entry.min_length.filter(|&min| length < min) {
                return unmet("minLength", min);
            }
            if let Some(max) = entry.max_length.filter(|&max| length > max) {
                return unmet("maxLength", max);
            }
            String::new()
        }
        ParameterValue::Number(n) => {
            if let Some(min) = entry.min_value.filter(|&min| n < min) {
                return unmet("minValue", min);
            }
            if let Some(max) = entry.max_value.filter(|&max| n > max) {
                return unmet("maxValue", max);
            }
            if n.is_nan() {
                return NOT_A_NUMBER.to_string();
            }
            String::new()
        }
        ParameterValue::Bool(_) | ParameterValue::Null => String::new(),
    }
}

/// [`validate`] as an `Option`, for prompt callbacks.
pub fn violation(raw: &str, entry: &ParameterTemplateEntry) -> Option<String> {
    let message = validate(raw, entry);
    (!message.is_empty()).then_some(message)
}
