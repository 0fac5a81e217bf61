mod common;

use cvd_core::{available_countries, validate, validate_columns};
use cvd_model::{Selection, ValidationError};
use polars::prelude::{IntoColumn, NamedFrom, Series};

use common::{frame_dataset, two_countries};

#[test]
fn empty_selection_is_rejected() {
    let table = two_countries();
    let err = validate(&table, &Selection::default()).unwrap_err();
    assert_eq!(err, ValidationError::EmptySelection);
}

#[test]
fn valid_selection_comes_back_unchanged() {
    let table = two_countries();
    let selection = Selection::new(["FR", "Atlantis"]);
    let validated = validate(&table, &selection).expect("valid selection");
    assert_eq!(validated.selection(), &selection);
    assert_eq!(validated.into_inner(), selection);
}

#[test]
fn missing_total_confirmed_is_reported() {
    let table = frame_dataset(vec![
        Series::new("country".into(), vec!["US".to_string()]).into_column(),
        Series::new("total_deaths".into(), vec![10i64]).into_column(),
    ]);
    let err = validate(&table, &Selection::new(["US"])).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingColumn {
            column: "total_confirmed".to_string()
        }
    );
}

#[test]
fn missing_country_is_reported_first() {
    let table = frame_dataset(vec![
        Series::new("total_deaths".into(), vec![10i64]).into_column(),
    ]);
    assert_eq!(
        validate_columns(&table),
        Err(ValidationError::MissingColumn {
            column: "country".to_string()
        })
    );
}

#[test]
fn empty_selection_wins_over_missing_columns() {
    let table = frame_dataset(vec![
        Series::new("total_deaths".into(), vec![10i64]).into_column(),
    ]);
    assert_eq!(
        validate(&table, &Selection::default()),
        Err(ValidationError::EmptySelection)
    );
}

#[test]
fn available_countries_are_distinct_in_table_order() {
    let table = frame_dataset(vec![
        Series::new(
            "country".into(),
            vec!["India".to_string(), "USA".to_string(), "India".to_string()],
        )
        .into_column(),
        Series::new("total_confirmed".into(), vec![3i64, 2, 1]).into_column(),
    ]);
    assert_eq!(
        available_countries(&table),
        Ok(vec!["India".to_string(), "USA".to_string()])
    );
}

#[test]
fn available_countries_checks_columns_first() {
    let table = frame_dataset(vec![
        Series::new("country".into(), vec!["USA".to_string()]).into_column(),
    ]);
    assert!(matches!(
        available_countries(&table),
        Err(ValidationError::MissingColumn { .. })
    ));
}
