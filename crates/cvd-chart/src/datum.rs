//! Helpers for building chart data values.

use cvd_model::Datum;
use serde_json::Value;

/// Build a datum from field/value pairs.
pub fn datum<const N: usize>(fields: [(&str, Value); N]) -> Datum {
    fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
