//! Number formatting for labels and tooltips.

/// Placeholder printed for a missing count.
pub const MISSING_COUNT: &str = "n/a";

/// Format an integer with comma thousands separators.
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3 + 1);
    if n < 0 {
        result.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format an optional count, printing [`MISSING_COUNT`] for null.
pub fn format_count(n: Option<i64>) -> String {
    n.map_or_else(|| MISSING_COUNT.to_string(), format_thousands)
}
