use std::path::PathBuf;

use cvd_chart::Writer;
use cvd_cli::config::PageConfig;
use cvd_cli::pipeline::RenderPass;
use cvd_model::ChartKind;

/// One file written by a render.
#[derive(Debug, Clone)]
pub struct WrittenSpec {
    pub kind: ChartKind,
    pub writer: &'static str,
    pub path: PathBuf,
}

impl WrittenSpec {
    pub fn file_name(kind: ChartKind, writer: &dyn Writer) -> String {
        let suffix = match writer.name() {
            "vega-lite" => "vl",
            other => other,
        };
        format!("{kind}.{suffix}.json")
    }
}

#[derive(Debug)]
pub struct RenderResult {
    pub page: PageConfig,
    /// Every column of the dataset, extras included.
    pub columns: Vec<String>,
    pub pass: RenderPass,
    pub output_dir: PathBuf,
    pub charts: Vec<WrittenSpec>,
    pub map: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
}
