//! Single-level treemap of deaths.

use cvd_core::Subset;
use cvd_model::columns::{COUNTRY, TOTAL_DEATHS};
use cvd_model::{Channel, ChartKind, ChartSpec, FieldType, Mark, Scale, TooltipField, TreemapStyle};
use serde_json::json;
use tracing::debug;

use crate::datum::datum;

pub const TITLE: &str = "COVID-19 Deaths by Country";
pub const COLOR_SCHEME: &str = "reds";
pub const ROOT_COLOR: &str = "lightgrey";
pub const HOVER_TEMPLATE: &str = "<b>%{label}</b><br>Total Deaths: %{value:,}";
pub const HOVER_INFO: &str = "label+value";

/// One leaf per country sized and colored by deaths. Leaves carry only the
/// country and its deaths, so coordinates never reach the hover label.
pub fn treemap_chart(subset: &Subset) -> ChartSpec {
    let mut spec = ChartSpec::new(ChartKind::Treemap, TITLE, Mark::Treemap);
    for row in subset.ranked() {
        let Some(deaths) = row.total_deaths else {
            continue;
        };
        spec.data.push(datum([
            (COUNTRY, json!(row.country)),
            (TOTAL_DEATHS, json!(deaths)),
        ]));
    }

    spec.encoding.label = Some(Channel::nominal(COUNTRY));
    spec.encoding.value = Some(Channel::quantitative(TOTAL_DEATHS));
    spec.encoding.color = Some(Channel::quantitative(TOTAL_DEATHS).with_scale(Scale {
        domain: None,
        scheme: Some(COLOR_SCHEME.to_string()),
    }));
    spec.tooltip = vec![
        TooltipField::new(COUNTRY, FieldType::Nominal, "Country"),
        TooltipField::new(TOTAL_DEATHS, FieldType::Quantitative, "Total Deaths")
            .with_format(","),
    ];
    spec.treemap = Some(TreemapStyle {
        root_color: ROOT_COLOR.to_string(),
        border_width: 0.0,
        hover_template: HOVER_TEMPLATE.to_string(),
        hover_info: HOVER_INFO.to_string(),
    });

    debug!(leaves = spec.data.len(), "treemap built");
    spec
}
