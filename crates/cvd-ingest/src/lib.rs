//! Dataset loading for the COVID summary dashboard.
//!
//! The dataset is read once at startup into a [`Dataset`] and shared
//! read-only for the rest of the process.

pub mod dataset;
pub mod error;
pub mod polars_utils;
pub mod reader;

pub use dataset::Dataset;
pub use error::{IngestError, Result};
pub use polars_utils::{any_to_f64, any_to_i64, any_to_string, parse_f64, parse_i64};
pub use reader::{MAX_CSV_FILE_SIZE, read_dataset_frame};
