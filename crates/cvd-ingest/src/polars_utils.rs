//! Polars AnyValue conversions.
//!
//! Dataset cells arrive with whatever dtype polars inferred. These helpers
//! read them as the types the dashboard works with, mapping anything
//! unreadable to `None`.

use polars::prelude::*;

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Converts an AnyValue to f64, returning None for non-numeric, non-finite
/// or null values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    let v = match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    };
    v.filter(|v| v.is_finite())
}

/// Converts an AnyValue to i64, returning None for non-integer or null
/// values. Floats are accepted only when they hold a whole number.
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::Float32(v) => whole_number(f64::from(v)),
        AnyValue::Float64(v) => whole_number(v),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(&s),
        _ => None,
    }
}

fn whole_number(v: f64) -> Option<i64> {
    (v.is_finite() && v.fract() == 0.0).then_some(v as i64)
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Parses a string as i64, returning None for invalid or empty strings.
/// Whole-number decimals such as `"12.0"` are accepted.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| parse_f64(trimmed).and_then(whole_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_read_from_any_numeric_dtype() {
        assert_eq!(any_to_i64(AnyValue::Int32(7)), Some(7));
        assert_eq!(any_to_i64(AnyValue::UInt64(9)), Some(9));
        assert_eq!(any_to_i64(AnyValue::Float64(12.0)), Some(12));
        assert_eq!(any_to_i64(AnyValue::Float64(12.5)), None);
        assert_eq!(any_to_i64(AnyValue::String(" 42 ")), Some(42));
        assert_eq!(any_to_i64(AnyValue::String("n/a")), None);
        assert_eq!(any_to_i64(AnyValue::Null), None);
    }

    #[test]
    fn floats_reject_nan() {
        assert_eq!(any_to_f64(AnyValue::Float64(f64::NAN)), None);
        assert_eq!(any_to_f64(AnyValue::Float64(-33.5)), Some(-33.5));
        assert_eq!(any_to_f64(AnyValue::Int64(2)), Some(2.0));
    }

    #[test]
    fn strings_render_numbers_compactly() {
        assert_eq!(any_to_string(AnyValue::Float64(1.50)), "1.5");
        assert_eq!(any_to_string(AnyValue::Float64(100.0)), "100");
        assert_eq!(any_to_string(AnyValue::Int64(100)), "100");
        assert_eq!(any_to_string(AnyValue::Null), "");
    }
}
