//! Plotly JSON writer for the treemap.

use cvd_model::{ChartKind, ChartSpec};
use serde_json::{Value, json};

use super::{Result, Writer, WriterError};

/// Label of the invisible root every leaf hangs from.
const ROOT_LABEL: &str = "";

pub struct PlotlyWriter;

impl PlotlyWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlotlyWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for PlotlyWriter {
    fn name(&self) -> &'static str {
        "plotly"
    }

    fn supports(&self, kind: ChartKind) -> bool {
        kind == ChartKind::Treemap
    }

    fn write(&self, spec: &ChartSpec) -> Result<Value> {
        self.validate(spec)?;
        let label = spec
            .encoding
            .label
            .as_ref()
            .ok_or(WriterError::MissingChannel {
                kind: spec.kind,
                channel: "label",
            })?;
        let value = spec
            .encoding
            .value
            .as_ref()
            .ok_or(WriterError::MissingChannel {
                kind: spec.kind,
                channel: "value",
            })?;

        let labels: Vec<Value> = spec.field_values(&label.field).cloned().collect();
        let values: Vec<Value> = spec.field_values(&value.field).cloned().collect();
        let parents: Vec<&str> = vec![ROOT_LABEL; labels.len()];

        let mut marker = json!({ "line": { "width": 0.0 } });
        if let Some(color) = &spec.encoding.color {
            let colors: Vec<Value> = spec.field_values(&color.field).cloned().collect();
            marker["colors"] = json!(colors);
            if let Some(scheme) = color.scale.as_ref().and_then(|s| s.scheme.as_ref()) {
                marker["colorscale"] = json!(colorscale_name(scheme));
            }
        }

        let mut trace = json!({
            "type": "treemap",
            "labels": labels,
            "parents": parents,
            "values": values,
            "marker": marker,
        });
        if let Some(style) = &spec.treemap {
            trace["marker"]["line"]["width"] = json!(style.border_width);
            trace["hovertemplate"] = json!(style.hover_template);
            trace["hoverinfo"] = json!(style.hover_info);
            trace["root"] = json!({ "color": style.root_color });
        }

        Ok(json!({
            "data": [trace],
            "layout": { "title": { "text": spec.title } },
        }))
    }
}

/// Plotly names its sequential scales in title case.
fn colorscale_name(scheme: &str) -> String {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
