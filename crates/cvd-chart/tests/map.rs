use cvd_chart::map::{MARKER_RADIUS, ZOOM, marker_tooltip};
use cvd_chart::map_spec;
use cvd_core::{build_subset, validate};
use cvd_ingest::Dataset;
use cvd_model::{CountryRecord, LatLon, Selection};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

fn table() -> Dataset {
    let cols: Vec<Column> = vec![
        Series::new(
            "country".into(),
            vec!["USA".to_string(), "France".to_string(), "Nowhere".to_string()],
        )
        .into_column(),
        Series::new("total_confirmed".into(), vec![34_567_890i64, 5_000, 1]).into_column(),
        Series::new("total_deaths".into(), vec![600_000i64, 100, 0]).into_column(),
        Series::new("active_cases".into(), vec![Some(1_234_567i64), None, Some(0)]).into_column(),
        Series::new("latitude".into(), vec![Some(40.0f64), Some(46.0), None]).into_column(),
        Series::new("longitude".into(), vec![Some(-100.0f64), Some(2.0), None]).into_column(),
    ];
    Dataset::from_frame(DataFrame::new(cols).unwrap())
}

#[test]
fn map_centers_on_mean_position() {
    let table = table();
    let selection = validate(&table, &Selection::new(["USA", "France", "Nowhere"])).unwrap();
    let subset = build_subset(&table, &selection).unwrap();
    let spec = map_spec(&subset).expect("map");

    assert_eq!(spec.center, LatLon { lat: 43.0, lon: -49.0 });
    assert_eq!(spec.zoom, ZOOM);
    assert_eq!(spec.viewport.height, 600);
    assert_eq!(spec.viewport.width, 800);
    assert_eq!(spec.markers.len(), 2);
    assert!(spec.markers.iter().all(|m| m.radius == MARKER_RADIUS));
    assert!(spec.markers.iter().all(|m| m.fill_color == "red"));
}

#[test]
fn map_is_skipped_for_empty_subset() {
    let table = table();
    let selection = validate(&table, &Selection::new(["Atlantis"])).unwrap();
    let subset = build_subset(&table, &selection).unwrap();
    assert!(map_spec(&subset).is_none());
}

#[test]
fn marker_tooltip_uses_thousands_separators() {
    let table = table();
    let selection = validate(&table, &Selection::new(["USA"])).unwrap();
    let subset = build_subset(&table, &selection).unwrap();
    let spec = map_spec(&subset).unwrap();

    insta::assert_snapshot!(
        &spec.markers[0].tooltip,
        @"Country:USA<br>Active Cases:1,234,567<br>Total Confirmed:34,567,890"
    );
}

#[test]
fn marker_tooltip_marks_missing_counts() {
    let row = CountryRecord {
        source_index: 0,
        country: "France".to_string(),
        total_confirmed: Some(5_000),
        total_deaths: None,
        active_cases: None,
        latitude: Some(46.0),
        longitude: Some(2.0),
        death_proportion: None,
    };
    insta::assert_snapshot!(
        marker_tooltip(&row),
        @"Country:France<br>Active Cases:n/a<br>Total Confirmed:5,000"
    );
}
