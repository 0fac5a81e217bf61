use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use comfy_table::Table;
use cvd_chart::writer::writer_for;
use cvd_ingest::Dataset;
use cvd_model::{DashboardError, Selection};
use serde_json::json;
use tracing::{debug, info, info_span};

use cvd_cli::config::DashboardConfig;
use cvd_cli::pipeline::{Dashboard, RenderPass};

use crate::cli::RenderArgs;
use crate::summary::{apply_table_style, columns_line};
use crate::types::{RenderResult, WrittenSpec};

pub const MAP_FILE: &str = "map.json";
pub const MANIFEST_FILE: &str = "dashboard.json";

pub fn open_dashboard(config: &DashboardConfig) -> Result<Dashboard> {
    let path = &config.dataset.path;
    let table = Dataset::load(path)
        .map_err(DashboardError::from)
        .with_context(|| format!("load dataset {}", path.display()))?;
    Ok(Dashboard::new(Arc::new(table)))
}

pub fn run_countries(config: &DashboardConfig) -> Result<()> {
    let dashboard = open_dashboard(config)?;
    let countries = dashboard
        .available_countries()
        .context("list countries")?;
    let mut table = Table::new();
    table.set_header(vec!["#", "Country"]);
    apply_table_style(&mut table);
    for (index, country) in countries.iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), country.clone()]);
    }
    println!("{table}");
    println!("{}", columns_line(&dashboard.table().columns()));
    Ok(())
}

pub fn run_render(args: &RenderArgs, config: &DashboardConfig) -> Result<RenderResult> {
    let dashboard = open_dashboard(config)?;
    let selection = if args.countries.is_empty() {
        dashboard
            .default_selection(&config.selection.defaults)
            .context("resolve default selection")?
    } else {
        Selection::new(args.countries.iter().cloned())
    };
    let span = info_span!("dashboard", countries = selection.len());
    let _guard = span.enter();

    let pass = dashboard.render(&selection).context("render dashboard")?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output.dir.clone());
    let mut result = RenderResult {
        page: config.page.clone(),
        columns: dashboard.table().columns(),
        pass,
        output_dir,
        charts: Vec::new(),
        map: None,
        manifest: None,
    };
    if args.dry_run {
        debug!("dry run, no files written");
        return Ok(result);
    }
    write_outputs(&mut result)?;
    info!(
        dir = %result.output_dir.display(),
        files = result.charts.len() + usize::from(result.map.is_some()) + 1,
        "dashboard written"
    );
    Ok(result)
}

fn write_outputs(result: &mut RenderResult) -> Result<()> {
    let dir = result.output_dir.clone();
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

    for spec in result.pass.charts.iter() {
        let writer = writer_for(spec.kind);
        let text = writer
            .render(spec)
            .with_context(|| format!("write {} chart", spec.kind))?;
        let path = dir.join(WrittenSpec::file_name(spec.kind, writer.as_ref()));
        write_file(&path, &text)?;
        result.charts.push(WrittenSpec {
            kind: spec.kind,
            writer: writer.name(),
            path,
        });
    }

    if let Some(map) = &result.pass.map {
        let path = dir.join(MAP_FILE);
        let text = serde_json::to_string_pretty(map).context("serialize map")?;
        write_file(&path, &text)?;
        result.map = Some(path);
    }

    let manifest = manifest(result);
    let path = dir.join(MANIFEST_FILE);
    let text = serde_json::to_string_pretty(&manifest).context("serialize manifest")?;
    write_file(&path, &text)?;
    result.manifest = Some(path);
    Ok(())
}

fn manifest(result: &RenderResult) -> serde_json::Value {
    let charts: Vec<_> = result
        .charts
        .iter()
        .map(|written| {
            json!({
                "kind": written.kind,
                "writer": written.writer,
                "file": file_name(&written.path),
            })
        })
        .collect();
    json!({
        "title": result.page.title,
        "heading": result.page.heading,
        "columns": result.columns,
        "icon": result.page.icon,
        "countries": selected_countries(&result.pass),
        "charts": charts,
        "map": result.map.as_deref().map(file_name),
    })
}

fn selected_countries(pass: &RenderPass) -> Vec<&str> {
    pass.subset.countries().collect()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), bytes = text.len(), "wrote file");
    Ok(())
}
