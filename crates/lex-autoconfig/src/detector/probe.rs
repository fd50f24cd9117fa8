//! Value-level type probe.

use crate::types::{FieldValue, ValueKind};

/// Classify a single raw value.
///
/// Strings are tried as an integer first, then as a float; anything that
/// parses as neither is a plain string. A native float is always a float,
/// even with no fractional part, so `2.0` classifies the same whether it
/// arrives typed or as text.
pub fn probe_value(value: &FieldValue) -> ValueKind {
    match value {
        FieldValue::Null => ValueKind::None,
        FieldValue::Int(_) => ValueKind::Int,
        FieldValue::Float(_) => ValueKind::Float,
        FieldValue::Str(s) => probe_str(s),
    }
}

fn probe_str(s: &str) -> ValueKind {
    let trimmed = s.trim();
    if trimmed.parse::<i64>().is_ok() || is_integer_literal(trimmed) {
        ValueKind::Int
    } else if trimmed.parse::<f64>().is_ok() {
        ValueKind::Float
    } else {
        ValueKind::Str
    }
}

/// Optional sign followed by ASCII digits, of any length.
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
