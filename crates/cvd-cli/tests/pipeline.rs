//! Integration tests for the render pipeline.

use std::fs;
use std::sync::Arc;
use std::thread;

use cvd_cli::pipeline::Dashboard;
use cvd_ingest::Dataset;
use cvd_model::{DashboardError, Selection};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tempfile::TempDir;

fn dashboard() -> Dashboard {
    let cols: Vec<Column> = vec![
        Series::new(
            "country".into(),
            ["USA", "India", "France", "Peru"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new("total_confirmed".into(), vec![100i64, 80, 50, 10]).into_column(),
        Series::new("total_deaths".into(), vec![10i64, 8, 5, 1]).into_column(),
        Series::new("active_cases".into(), vec![50i64, 40, 20, 2]).into_column(),
        Series::new("latitude".into(), vec![38.0f64, 21.0, 46.0, -9.0]).into_column(),
        Series::new("longitude".into(), vec![-97.0f64, 78.0, 2.0, -75.0]).into_column(),
    ];
    Dashboard::new(Arc::new(Dataset::from_frame(DataFrame::new(cols).unwrap())))
}

#[test]
fn render_builds_charts_and_map() {
    let pass = dashboard()
        .render(&Selection::new(["France", "USA"]))
        .unwrap();

    assert_eq!(pass.subset.countries().collect::<Vec<_>>(), vec!["USA", "France"]);
    assert_eq!(pass.charts.bar.data.len(), 2);
    assert_eq!(pass.charts.treemap.data.len(), 2);
    let map = pass.map.expect("map");
    assert_eq!(map.markers.len(), 2);
}

#[test]
fn empty_selection_ends_the_pass() {
    let err = dashboard().render(&Selection::default()).unwrap_err();
    assert_eq!(err, DashboardError::EmptySelection);
}

#[test]
fn unmatched_selection_is_not_an_error() {
    let pass = dashboard().render(&Selection::new(["Atlantis"])).unwrap();
    assert!(pass.subset.is_empty());
    assert!(pass.charts.iter().all(|spec| spec.is_empty()));
    assert!(pass.map.is_none());
}

#[test]
fn missing_column_ends_the_pass() {
    let cols: Vec<Column> = vec![
        Series::new("country".into(), vec!["USA".to_string()]).into_column(),
        Series::new("total_deaths".into(), vec![1i64]).into_column(),
    ];
    let dashboard = Dashboard::new(Arc::new(Dataset::from_frame(DataFrame::new(cols).unwrap())));

    let err = dashboard.render(&Selection::new(["USA"])).unwrap_err();
    assert_eq!(
        err,
        DashboardError::MissingColumn {
            column: "total_confirmed".to_string()
        }
    );
    assert!(dashboard.available_countries().is_err());
}

#[test]
fn default_selection_drops_unknown_countries() {
    let selection = dashboard()
        .default_selection(["USA", "India", "Brazil", "France", "Germany"])
        .unwrap();
    assert_eq!(
        selection.iter().collect::<Vec<_>>(),
        vec!["USA", "India", "France"]
    );
}

#[test]
fn available_countries_follow_table_order() {
    assert_eq!(
        dashboard().available_countries().unwrap(),
        vec!["USA", "India", "France", "Peru"]
    );
}

#[test]
fn overlapping_passes_agree() {
    let dashboard = Arc::new(dashboard());
    let selection = Selection::new(["Peru", "India", "USA"]);
    let expected = serde_json::to_string(&dashboard.render(&selection).unwrap().charts.bar).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dashboard = Arc::clone(&dashboard);
            let selection = selection.clone();
            thread::spawn(move || {
                let pass = dashboard.render(&selection).unwrap();
                serde_json::to_string(&pass.charts.bar).unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn dataset_on_disk_renders() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("summary.csv");
    fs::write(
        &path,
        "country,continent,total_confirmed,total_deaths,active_cases,latitude,longitude\n\
         USA,North America,100,10,50,38.0,-97.0\n\
         France,Europe,50,5,,46.0,2.0\n",
    )
    .unwrap();
    let dashboard = Dashboard::new(Arc::new(Dataset::load(&path).unwrap()));
    assert!(dashboard.table().columns().contains(&"continent".to_string()));

    let pass = dashboard.render(&Selection::new(["France"])).unwrap();
    assert_eq!(pass.subset.len(), 1);
    let map = pass.map.unwrap();
    insta::assert_snapshot!(
        &map.markers[0].tooltip,
        @"Country:France<br>Active Cases:n/a<br>Total Confirmed:50"
    );
}
