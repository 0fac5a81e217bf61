//! Vega-Lite JSON writer.
//!
//! Generates Vega-Lite v6 specifications from cartesian chart specs.

use cvd_model::{Channel, ChartKind, ChartSpec, FieldSort, FieldType, Mark, SortOrder, Stack};
use serde_json::{Map, Value, json};

use super::{Result, Writer, WriterError};

/// Vega-Lite JSON writer
pub struct VegaLiteWriter {
    /// Vega-Lite schema version
    schema: String,
}

impl VegaLiteWriter {
    pub fn new() -> Self {
        Self {
            schema: "https://vega.github.io/schema/vega-lite/v6.json".to_string(),
        }
    }

    fn mark(&self, mark: &Mark) -> Value {
        match mark {
            Mark::Bar => json!({ "type": "bar" }),
            Mark::Point { size } => json!({ "type": "point", "size": size }),
            Mark::Rect => json!({ "type": "rect" }),
            Mark::Treemap => json!({ "type": "rect" }),
        }
    }

    fn channel(&self, channel: &Channel) -> Value {
        let mut encoding = Map::new();
        encoding.insert("field".to_string(), json!(channel.field));
        encoding.insert("type".to_string(), json!(field_type(channel.field_type)));
        if let Some(title) = &channel.title {
            encoding.insert("title".to_string(), json!(title));
        }
        if let Some(format) = &channel.axis_format {
            encoding.insert("axis".to_string(), json!({ "format": format }));
        }
        if let Some(scale) = &channel.scale {
            let mut scale_obj = Map::new();
            if let Some(domain) = scale.domain {
                scale_obj.insert("domain".to_string(), json!(domain));
            }
            if let Some(scheme) = &scale.scheme {
                scale_obj.insert("scheme".to_string(), json!(scheme));
            }
            encoding.insert("scale".to_string(), Value::Object(scale_obj));
        }
        match &channel.sort {
            Some(FieldSort::DataOrder) => {
                encoding.insert("sort".to_string(), Value::Null);
            }
            Some(FieldSort::Sum { field, order }) => {
                encoding.insert(
                    "sort".to_string(),
                    json!({ "field": field, "op": "sum", "order": sort_order(*order) }),
                );
            }
            None => {}
        }
        if let Some(Stack::Zero) = channel.stack {
            encoding.insert("stack".to_string(), json!("zero"));
        }
        Value::Object(encoding)
    }
}

impl Default for VegaLiteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for VegaLiteWriter {
    fn name(&self) -> &'static str {
        "vega-lite"
    }

    fn supports(&self, kind: ChartKind) -> bool {
        matches!(kind, ChartKind::Bar | ChartKind::Scatter | ChartKind::Mosaic)
    }

    fn write(&self, spec: &ChartSpec) -> Result<Value> {
        self.validate(spec)?;
        let x = spec.encoding.x.as_ref().ok_or(WriterError::MissingChannel {
            kind: spec.kind,
            channel: "x",
        })?;
        let y = spec.encoding.y.as_ref().ok_or(WriterError::MissingChannel {
            kind: spec.kind,
            channel: "y",
        })?;

        let mut encoding = Map::new();
        encoding.insert("x".to_string(), self.channel(x));
        encoding.insert("y".to_string(), self.channel(y));
        if let Some(color) = &spec.encoding.color {
            encoding.insert("color".to_string(), self.channel(color));
        }
        if !spec.tooltip.is_empty() {
            let tooltip: Vec<Value> = spec
                .tooltip
                .iter()
                .map(|field| {
                    let mut obj = json!({
                        "field": field.field,
                        "type": field_type(field.field_type),
                        "title": field.title,
                    });
                    if let Some(format) = &field.format {
                        obj["format"] = json!(format);
                    }
                    obj
                })
                .collect();
            encoding.insert("tooltip".to_string(), Value::Array(tooltip));
        }

        let mut doc = json!({
            "$schema": self.schema,
            "title": spec.title,
            "width": "container",
            "data": { "values": spec.data },
            "mark": self.mark(&spec.mark),
            "encoding": Value::Object(encoding),
        });
        if let Some(selection) = &spec.selection {
            doc["params"] = json!([{
                "name": selection.name,
                "select": { "type": "interval", "encodings": selection.encodings },
            }]);
        }
        Ok(doc)
    }
}

fn field_type(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Nominal => "nominal",
        FieldType::Quantitative => "quantitative",
    }
}

fn sort_order(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Ascending => "ascending",
        SortOrder::Descending => "descending",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvd_model::Scale;

    fn bar_spec() -> ChartSpec {
        let mut spec = ChartSpec::new(ChartKind::Bar, "Bars", Mark::Bar);
        spec.encoding.x = Some(Channel::nominal("country").with_sort(FieldSort::DataOrder));
        spec.encoding.y = Some(
            Channel::quantitative("total_confirmed")
                .with_axis_format(",")
                .with_scale(Scale {
                    domain: Some([0.0, 110.0]),
                    scheme: None,
                }),
        );
        spec
    }

    #[test]
    fn test_schema_and_mark() {
        let doc = VegaLiteWriter::new().write(&bar_spec()).unwrap();
        assert_eq!(
            doc["$schema"],
            "https://vega.github.io/schema/vega-lite/v6.json"
        );
        assert_eq!(doc["mark"]["type"], "bar");
        assert_eq!(doc["title"], "Bars");
    }

    #[test]
    fn test_data_order_sort_is_null() {
        let doc = VegaLiteWriter::new().write(&bar_spec()).unwrap();
        assert!(doc["encoding"]["x"]["sort"].is_null());
        assert!(doc["encoding"]["x"].as_object().unwrap().contains_key("sort"));
        assert_eq!(doc["encoding"]["y"]["axis"]["format"], ",");
        assert_eq!(doc["encoding"]["y"]["scale"]["domain"], json!([0.0, 110.0]));
    }

    #[test]
    fn test_missing_axis_is_an_error() {
        let mut spec = bar_spec();
        spec.encoding.y = None;
        let err = VegaLiteWriter::new().write(&spec).unwrap_err();
        assert!(matches!(
            err,
            WriterError::MissingChannel { channel: "y", .. }
        ));
    }

    #[test]
    fn test_treemap_is_unsupported() {
        let spec = ChartSpec::new(ChartKind::Treemap, "Tree", Mark::Treemap);
        let err = VegaLiteWriter::new().write(&spec).unwrap_err();
        assert_eq!(err.to_string(), "vega-lite cannot render treemap charts");
    }
}
