//! Stacked proportion chart of deaths.

use cvd_core::Subset;
use cvd_model::columns::{COUNTRY, DEATH_PROPORTION, TOTAL_DEATHS};
use cvd_model::{
    Channel, ChartKind, ChartSpec, FieldSort, FieldType, Mark, Scale, SortOrder, Stack,
    TooltipField,
};
use serde_json::json;
use tracing::debug;

use crate::datum::datum;

pub const TITLE: &str = "Mosaic Chart of Total Deaths by Country";
pub const COLOR_SCHEME: &str = "blues";

/// Each country's share of deaths stacked along x, countries along y by
/// deaths descending. A subset with no deaths yields zero-width bars.
pub fn mosaic_chart(subset: &Subset) -> ChartSpec {
    let mut spec = ChartSpec::new(ChartKind::Mosaic, TITLE, Mark::Rect);
    for row in subset.ranked() {
        let (Some(deaths), Some(proportion)) = (row.total_deaths, row.death_proportion) else {
            continue;
        };
        spec.data.push(datum([
            (COUNTRY, json!(row.country)),
            (TOTAL_DEATHS, json!(deaths)),
            (DEATH_PROPORTION, json!(proportion)),
        ]));
    }

    spec.encoding.x = Some(
        Channel::quantitative(DEATH_PROPORTION)
            .with_title("Proportion of Total Deaths")
            .with_stack(Stack::Zero),
    );
    spec.encoding.y = Some(Channel::nominal(COUNTRY).with_sort(FieldSort::Sum {
        field: TOTAL_DEATHS.to_string(),
        order: SortOrder::Descending,
    }));
    spec.encoding.color = Some(Channel::quantitative(TOTAL_DEATHS).with_scale(Scale {
        domain: None,
        scheme: Some(COLOR_SCHEME.to_string()),
    }));
    spec.tooltip = vec![
        TooltipField::new(COUNTRY, FieldType::Nominal, "Country"),
        TooltipField::new(TOTAL_DEATHS, FieldType::Quantitative, "Total Deaths")
            .with_format(",d"),
    ];

    debug!(segments = spec.data.len(), "mosaic chart built");
    spec
}
