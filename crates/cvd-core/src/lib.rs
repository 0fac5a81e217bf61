//! Selection validation and subset derivation.
//!
//! A render pass starts here: [`validate`] gates the user's selection, then
//! [`build_subset`] filters the dataset and derives the columns every chart
//! and the map read from.

pub mod format;
pub mod subset;
pub mod validate;

pub use format::{format_count, format_thousands};
pub use subset::{Subset, build_subset, map_center};
pub use validate::{ValidatedSelection, available_countries, validate, validate_columns};
