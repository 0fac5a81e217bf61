//! Deaths vs confirmed scatter plot with a rectangular brush.

use cvd_core::Subset;
use cvd_model::columns::{COUNTRY, TOTAL_CONFIRMED, TOTAL_DEATHS};
use cvd_model::{
    Channel, ChartKind, ChartSpec, FieldType, IntervalSelection, Mark, TooltipField,
};
use serde_json::json;
use tracing::debug;

use crate::datum::datum;

pub const TITLE: &str = "Scatter Plot of Total Confirmed Cases vs. Total Deaths";
pub const POINT_SIZE: f64 = 60.0;
pub const BRUSH: &str = "brush";

pub fn scatter_chart(subset: &Subset) -> ChartSpec {
    let mut spec = ChartSpec::new(ChartKind::Scatter, TITLE, Mark::Point { size: POINT_SIZE });
    for row in subset.ranked() {
        let (Some(confirmed), Some(deaths)) = (row.total_confirmed, row.total_deaths) else {
            continue;
        };
        spec.data.push(datum([
            (COUNTRY, json!(row.country)),
            (TOTAL_CONFIRMED, json!(confirmed)),
            (TOTAL_DEATHS, json!(deaths)),
        ]));
    }

    spec.encoding.x = Some(
        Channel::quantitative(TOTAL_DEATHS)
            .with_title("Total Deaths")
            .with_axis_format(","),
    );
    spec.encoding.y = Some(
        Channel::quantitative(TOTAL_CONFIRMED)
            .with_title("Total Confirmed Cases")
            .with_axis_format(","),
    );
    spec.encoding.color = Some(Channel::nominal(COUNTRY));
    spec.tooltip = vec![
        TooltipField::new(COUNTRY, FieldType::Nominal, "Country"),
        TooltipField::new(TOTAL_CONFIRMED, FieldType::Quantitative, "Total Confirmed")
            .with_format(",d"),
        TooltipField::new(TOTAL_DEATHS, FieldType::Quantitative, "Total Deaths")
            .with_format(",d"),
    ];
    spec.selection = Some(IntervalSelection {
        name: BRUSH.to_string(),
        encodings: vec!["x".to_string(), "y".to_string()],
    });

    debug!(points = spec.data.len(), "scatter chart built");
    spec
}
