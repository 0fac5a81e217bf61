//! Declarative chart specifications.
//!
//! A [`ChartSpec`] carries everything a renderer needs to draw one chart:
//! the data values, how fields map onto visual channels, axis formats,
//! tooltips and interaction. Nothing in here knows how to draw.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One data value: field name to JSON value.
pub type Datum = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Scatter,
    Mosaic,
    Treemap,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [Self::Bar, Self::Scatter, Self::Mosaic, Self::Treemap];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Scatter => "scatter",
            Self::Mosaic => "mosaic",
            Self::Treemap => "treemap",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mark {
    Bar,
    Point { size: f64 },
    Rect,
    Treemap,
}

/// Measurement level of an encoded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Nominal,
    Quantitative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Category order along a nominal axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum FieldSort {
    /// Keep the order in which values appear in the data.
    DataOrder,
    /// Order categories by the sum of another field.
    Sum { field: String, order: SortOrder },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stack {
    Zero,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,
    /// Named color scheme for continuous color channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

/// A field mapped onto one visual channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub field: String,
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// d3-format string for axis labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<FieldSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<Stack>,
}

impl Channel {
    pub fn nominal(field: &str) -> Self {
        Self::new(field, FieldType::Nominal)
    }

    pub fn quantitative(field: &str) -> Self {
        Self::new(field, FieldType::Quantitative)
    }

    fn new(field: &str, field_type: FieldType) -> Self {
        Self {
            field: field.to_string(),
            field_type,
            title: None,
            axis_format: None,
            scale: None,
            sort: None,
            stack: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    #[must_use]
    pub fn with_axis_format(mut self, format: &str) -> Self {
        self.axis_format = Some(format.to_string());
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: FieldSort) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: Stack) -> Self {
        self.stack = Some(stack);
        self
    }
}

/// Channel assignments. Cartesian charts use `x`/`y`, the treemap uses
/// `label`/`value`; all charts may use `color`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Encoding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Channel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipField {
    pub field: String,
    pub field_type: FieldType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl TooltipField {
    pub fn new(field: &str, field_type: FieldType, title: &str) -> Self {
        Self {
            field: field.to_string(),
            field_type,
            title: title.to_string(),
            format: None,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }
}

/// Rectangular brush the user can drag over the plot. The brush state lives
/// in the UI; the chart only declares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalSelection {
    pub name: String,
    pub encodings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapStyle {
    pub root_color: String,
    pub border_width: f64,
    pub hover_template: String,
    pub hover_info: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub mark: Mark,
    pub data: Vec<Datum>,
    pub encoding: Encoding,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tooltip: Vec<TooltipField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<IntervalSelection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treemap: Option<TreemapStyle>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, title: &str, mark: Mark) -> Self {
        Self {
            kind,
            title: title.to_string(),
            mark,
            data: Vec::new(),
            encoding: Encoding::default(),
            tooltip: Vec::new(),
            selection: None,
            treemap: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Values of one field across the data, skipping rows without it.
    pub fn field_values<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.data.iter().filter_map(move |datum| datum.get(field))
    }
}
