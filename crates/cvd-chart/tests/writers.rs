use cvd_chart::writer::writer_for;
use cvd_chart::{PlotlyWriter, VegaLiteWriter, Writer, build_charts};
use cvd_core::{build_subset, validate};
use cvd_ingest::Dataset;
use cvd_model::{ChartKind, Selection};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use serde_json::json;

fn charts() -> cvd_chart::ChartSet {
    let cols: Vec<Column> = vec![
        Series::new("country".into(), vec!["US".to_string(), "FR".to_string()]).into_column(),
        Series::new("total_confirmed".into(), vec![100i64, 50]).into_column(),
        Series::new("total_deaths".into(), vec![10i64, 5]).into_column(),
    ];
    let table = Dataset::from_frame(DataFrame::new(cols).unwrap());
    let selection = validate(&table, &Selection::new(["US", "FR"])).unwrap();
    build_charts(&build_subset(&table, &selection).unwrap())
}

#[test]
fn scatter_gets_interval_brush_param() {
    let doc = VegaLiteWriter::new().write(&charts().scatter).unwrap();
    assert_eq!(
        doc["params"],
        json!([{ "name": "brush", "select": { "type": "interval", "encodings": ["x", "y"] } }])
    );
    assert_eq!(doc["encoding"]["tooltip"][1]["format"], ",d");
    assert_eq!(doc["data"]["values"].as_array().unwrap().len(), 2);
}

#[test]
fn mosaic_stacks_and_sorts() {
    let doc = VegaLiteWriter::new().write(&charts().mosaic).unwrap();
    assert_eq!(doc["mark"]["type"], "rect");
    assert_eq!(doc["encoding"]["x"]["stack"], "zero");
    assert_eq!(
        doc["encoding"]["y"]["sort"],
        json!({ "field": "total_deaths", "op": "sum", "order": "descending" })
    );
    assert_eq!(doc["encoding"]["color"]["scale"]["scheme"], "blues");
}

#[test]
fn treemap_becomes_plotly_trace() {
    let doc = PlotlyWriter::new().write(&charts().treemap).unwrap();
    let trace = &doc["data"][0];
    assert_eq!(trace["type"], "treemap");
    assert_eq!(trace["labels"], json!(["US", "FR"]));
    assert_eq!(trace["parents"], json!(["", ""]));
    assert_eq!(trace["values"], json!([10, 5]));
    assert_eq!(trace["marker"]["colorscale"], "Reds");
    assert_eq!(trace["marker"]["line"]["width"], 0.0);
    assert_eq!(trace["root"]["color"], "lightgrey");
    assert_eq!(trace["hoverinfo"], "label+value");
    assert_eq!(doc["layout"]["title"]["text"], "COVID-19 Deaths by Country");
}

#[test]
fn every_chart_has_a_writer() {
    let charts = charts();
    for kind in ChartKind::ALL {
        let writer = writer_for(kind);
        assert!(writer.supports(kind));
        assert!(writer.render(charts.get(kind)).is_ok());
    }
}
