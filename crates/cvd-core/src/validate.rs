//! Selection gate.
//!
//! Validation never transforms anything: it either hands the selection back
//! as a [`ValidatedSelection`] or says why the pass cannot run.

use std::collections::HashSet;

use cvd_ingest::Dataset;
use cvd_model::columns::{COUNTRY, REQUIRED_COLUMNS};
use cvd_model::{Selection, ValidationError};
use tracing::debug;

/// A selection that passed [`validate`]. The field is private, so `validate`
/// is the only way to get one:
///
/// ```compile_fail
/// use cvd_core::ValidatedSelection;
/// use cvd_model::Selection;
///
/// let forged = ValidatedSelection(Selection::new(["USA"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSelection(Selection);

impl ValidatedSelection {
    pub fn selection(&self) -> &Selection {
        &self.0
    }

    pub fn into_inner(self) -> Selection {
        self.0
    }
}

/// Check that the columns every chart needs are present.
pub fn validate_columns(table: &Dataset) -> Result<(), ValidationError> {
    for column in REQUIRED_COLUMNS {
        if !table.has_column(column) {
            return Err(ValidationError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Gate a selection against the table.
///
/// An empty selection is reported before missing columns. Countries that
/// are not in the table are fine here; they just match nothing.
pub fn validate(
    table: &Dataset,
    selection: &Selection,
) -> Result<ValidatedSelection, ValidationError> {
    if selection.is_empty() {
        return Err(ValidationError::EmptySelection);
    }
    validate_columns(table)?;
    debug!(countries = selection.len(), "selection validated");
    Ok(ValidatedSelection(selection.clone()))
}

/// Distinct countries in table order, for the country picker.
///
/// Columns are checked first so the picker never reads a table the charts
/// would reject.
pub fn available_countries(table: &Dataset) -> Result<Vec<String>, ValidationError> {
    validate_columns(table)?;
    let Some(cells) = table.strings(COUNTRY) else {
        return Err(ValidationError::MissingColumn {
            column: COUNTRY.to_string(),
        });
    };
    let mut seen = HashSet::new();
    Ok(cells
        .into_iter()
        .flatten()
        .filter(|country| seen.insert(country.clone()))
        .collect())
}
