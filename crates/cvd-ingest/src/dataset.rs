//! The loaded summary table.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use cvd_model::columns::COUNTRY;
use polars::prelude::{AnyValue, DataFrame};
use tracing::{info, warn};

use crate::error::Result;
use crate::polars_utils::{any_to_f64, any_to_i64, any_to_string};
use crate::reader::read_dataset_frame;

/// Immutable handle on the dataset, created once at startup.
///
/// Nothing hands out mutable access to the frame, so one `Arc<Dataset>` can
/// back every render pass for the life of the process.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: Option<PathBuf>,
    frame: DataFrame,
}

impl Dataset {
    /// Load the dataset CSV from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let frame = read_dataset_frame(path)?;
        let dataset = Self {
            source: Some(path.to_path_buf()),
            frame,
        };
        dataset.warn_on_duplicate_countries();
        info!(
            path = %path.display(),
            rows = dataset.height(),
            columns = dataset.frame.width(),
            duration_ms = start.elapsed().as_millis(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Wrap an in-memory table.
    pub fn from_frame(frame: DataFrame) -> Self {
        let dataset = Self {
            source: None,
            frame,
        };
        dataset.warn_on_duplicate_countries();
        dataset
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Column names in file order.
    pub fn columns(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.frame.column(name).is_ok()
    }

    /// Cells of a column as strings, exactly as stored; empty and null cells
    /// read as `None`. `None` when the column is absent.
    pub fn strings(&self, name: &str) -> Option<Vec<Option<String>>> {
        self.read_column(name, |value| {
            let text = any_to_string(value);
            (!text.is_empty()).then_some(text)
        })
    }

    /// Cells of a column as integers; `None` when the column is absent.
    pub fn integers(&self, name: &str) -> Option<Vec<Option<i64>>> {
        self.read_column(name, any_to_i64)
    }

    /// Cells of a column as floats; `None` when the column is absent.
    pub fn floats(&self, name: &str) -> Option<Vec<Option<f64>>> {
        self.read_column(name, any_to_f64)
    }

    fn read_column<T>(
        &self,
        name: &str,
        convert: impl Fn(AnyValue<'_>) -> Option<T>,
    ) -> Option<Vec<Option<T>>> {
        let column = self.frame.column(name).ok()?;
        let values = (0..self.frame.height())
            .map(|idx| convert(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        Some(values)
    }

    fn warn_on_duplicate_countries(&self) {
        let Some(countries) = self.strings(COUNTRY) else {
            return;
        };
        let mut seen = HashSet::new();
        for country in countries.into_iter().flatten() {
            if !seen.insert(country.clone()) {
                warn!(country = %country, "duplicate country row; the first one is used");
            }
        }
    }
}
