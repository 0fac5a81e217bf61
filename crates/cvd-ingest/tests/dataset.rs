use std::io::Write;

use cvd_ingest::{Dataset, IngestError};
use tempfile::NamedTempFile;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{content}").expect("write csv");
    file
}

#[test]
fn loads_summary_csv() {
    let file = create_temp_csv(
        "country,continent,total_confirmed,total_deaths,active_cases,latitude,longitude\n\
         USA,North America,100,10,50,38.0,-97.0\n\
         France,Europe,50,5,,46.0,2.0\n",
    );
    let dataset = Dataset::load(file.path()).expect("load dataset");

    assert_eq!(dataset.height(), 2);
    assert_eq!(dataset.source(), Some(file.path()));
    assert!(dataset.has_column("continent"));
    assert_eq!(
        dataset.integers("active_cases"),
        Some(vec![Some(50), None])
    );
    assert_eq!(
        dataset.floats("longitude"),
        Some(vec![Some(-97.0), Some(2.0)])
    );
}

#[test]
fn load_keeps_table_order() {
    let file = create_temp_csv("country,total_confirmed\nIndia,30\nBrazil,20\nUSA,10\n");
    let dataset = Dataset::load(file.path()).expect("load dataset");
    let countries: Vec<String> = dataset
        .strings("country")
        .expect("country column")
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(countries, vec!["India", "Brazil", "USA"]);
}

#[test]
fn load_reports_missing_file() {
    let err = Dataset::load(std::path::Path::new("/no/such/summary.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
