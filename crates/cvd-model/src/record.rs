use serde::{Deserialize, Serialize};

/// One country's row as projected from the dataset.
///
/// Counts and coordinates are optional: a cell that is empty or not numeric
/// reads as `None` and is left out of every computation that needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Position of the row in the loaded table.
    pub source_index: usize,
    pub country: String,
    pub total_confirmed: Option<i64>,
    pub total_deaths: Option<i64>,
    pub active_cases: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Share of the subset's deaths; `None` when `total_deaths` is null.
    pub death_proportion: Option<f64>,
}

impl CountryRecord {
    /// Both coordinates, when present.
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}
