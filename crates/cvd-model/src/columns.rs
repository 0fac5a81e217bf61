//! Column names of the summary dataset.

pub const COUNTRY: &str = "country";
pub const TOTAL_CONFIRMED: &str = "total_confirmed";
pub const TOTAL_DEATHS: &str = "total_deaths";
pub const ACTIVE_CASES: &str = "active_cases";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";

/// Derived column: a row's share of the subset's deaths.
pub const DEATH_PROPORTION: &str = "death_proportion";

/// Columns every chart needs; checked before any row is read.
pub const REQUIRED_COLUMNS: [&str; 2] = [COUNTRY, TOTAL_CONFIRMED];

/// Projected columns that read as null when the table lacks them.
pub const OPTIONAL_COLUMNS: [&str; 4] = [TOTAL_DEATHS, ACTIVE_CASES, LATITUDE, LONGITUDE];
