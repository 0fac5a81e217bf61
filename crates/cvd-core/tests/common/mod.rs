//! Shared fixtures for cvd-core integration tests.

#![allow(dead_code)]

use cvd_ingest::Dataset;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

/// (country, total_confirmed, total_deaths, active_cases, latitude, longitude)
pub type Row<'a> = (&'a str, i64, i64, i64, f64, f64);

pub fn dataset(rows: &[Row<'_>]) -> Dataset {
    let cols: Vec<Column> = vec![
        Series::new(
            "country".into(),
            rows.iter().map(|r| r.0.to_string()).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new(
            "total_confirmed".into(),
            rows.iter().map(|r| r.1).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new(
            "total_deaths".into(),
            rows.iter().map(|r| r.2).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new(
            "active_cases".into(),
            rows.iter().map(|r| r.3).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new("latitude".into(), rows.iter().map(|r| r.4).collect::<Vec<_>>()).into_column(),
        Series::new(
            "longitude".into(),
            rows.iter().map(|r| r.5).collect::<Vec<_>>(),
        )
        .into_column(),
    ];
    Dataset::from_frame(DataFrame::new(cols).unwrap())
}

pub fn frame_dataset(columns: Vec<Column>) -> Dataset {
    Dataset::from_frame(DataFrame::new(columns).unwrap())
}

pub fn two_countries() -> Dataset {
    dataset(&[("US", 100, 10, 50, 1.0, 1.0), ("FR", 50, 5, 20, 2.0, 2.0)])
}
