//! Ranked bar chart of confirmed cases.

use cvd_core::Subset;
use cvd_model::columns::{COUNTRY, TOTAL_CONFIRMED};
use cvd_model::{Channel, ChartKind, ChartSpec, FieldSort, Mark, Scale};
use serde_json::json;
use tracing::debug;

use crate::datum::datum;

pub const TITLE: &str = "Total Confirmed Cases by Country";

/// Y axis upper bound relative to the tallest bar (10% headroom).
pub const HEADROOM_FACTOR: f64 = 1.1;

/// One bar per country in ranked order. Rows without a confirmed count are
/// left out.
pub fn bar_chart(subset: &Subset) -> ChartSpec {
    let mut spec = ChartSpec::new(ChartKind::Bar, TITLE, Mark::Bar);
    let mut max_confirmed: Option<i64> = None;
    for row in subset.ranked() {
        let Some(confirmed) = row.total_confirmed else {
            continue;
        };
        max_confirmed = Some(max_confirmed.map_or(confirmed, |max| max.max(confirmed)));
        spec.data.push(datum([
            (COUNTRY, json!(row.country)),
            (TOTAL_CONFIRMED, json!(confirmed)),
        ]));
    }

    let mut y = Channel::quantitative(TOTAL_CONFIRMED)
        .with_title("Total Confirmed Cases")
        .with_axis_format(",");
    if let Some(max) = max_confirmed {
        y = y.with_scale(Scale {
            domain: Some([0.0, y_domain_max(max)]),
            scheme: None,
        });
    }
    spec.encoding.x = Some(
        Channel::nominal(COUNTRY)
            .with_title("Country")
            .with_sort(FieldSort::DataOrder),
    );
    spec.encoding.y = Some(y);
    spec.encoding.color = Some(Channel::nominal(COUNTRY));

    debug!(bars = spec.data.len(), "bar chart built");
    spec
}

/// Upper bound of the y axis for a given tallest bar.
pub fn y_domain_max(max_confirmed: i64) -> f64 {
    max_confirmed as f64 * HEADROOM_FACTOR
}
