//! Parameter type coercion
//!
//! Turns raw prompt/config/file text into the typed value ARM expects for the
//! parameter's declared type.

use crate::domain::entities::{ParameterType, ParameterValue};

/// Coerce `raw` per `declared`.
///
/// `int` never fails here: text that is not a number becomes `NaN`, which the
/// validator reports. Unknown types yield [`ParameterValue::Null`].
pub fn coerce(raw: &str, declared: &ParameterType) -> ParameterValue {
    match declared {
        ParameterType::String => ParameterValue::Text(raw.to_string()),
        ParameterType::Int => ParameterValue::Number(to_number(raw)),
        ParameterType::Bool => ParameterValue::Bool(raw.eq_ignore_ascii_case("true")),
        ParameterType::Other(_) => ParameterValue::Null,
    }
}

/// Numeric conversion of user text.
///
/// Surrounding whitespace is ignored and blank text is zero. `0x`, `0o` and
/// `0b` prefixes are honoured. Only the spelled-out `Infinity` is infinite.
pub fn to_number(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }

    if let Some(n) = parse_radix(text) {
        return n;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust also accepts "inf" and "nan" spellings; those are not numbers here.
    if text.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return f64::NAN;
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// `0x`/`0o`/`0b` literals. Digits accumulate in an `f64`, so literals past
/// `u64::MAX` stay finite. Signs and empty digit runs are NaN.
fn parse_radix(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}
