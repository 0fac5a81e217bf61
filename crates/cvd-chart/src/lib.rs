//! Chart and map specification builders.
//!
//! Every builder is a pure function of a [`Subset`](cvd_core::Subset). The
//! specs are plain data; the [`writer`] module turns them into documents a
//! browser-side renderer understands.

pub mod bar;
pub mod datum;
pub mod map;
pub mod mosaic;
pub mod scatter;
pub mod treemap;
pub mod writer;

use cvd_core::Subset;
use cvd_model::{ChartKind, ChartSpec};

pub use bar::bar_chart;
pub use map::{build_map_spec, map_spec};
pub use mosaic::mosaic_chart;
pub use scatter::scatter_chart;
pub use treemap::treemap_chart;
pub use writer::{PlotlyWriter, VegaLiteWriter, Writer, WriterError};

/// The four charts of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub bar: ChartSpec,
    pub scatter: ChartSpec,
    pub mosaic: ChartSpec,
    pub treemap: ChartSpec,
}

impl ChartSet {
    pub fn get(&self, kind: ChartKind) -> &ChartSpec {
        match kind {
            ChartKind::Bar => &self.bar,
            ChartKind::Scatter => &self.scatter,
            ChartKind::Mosaic => &self.mosaic,
            ChartKind::Treemap => &self.treemap,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartSpec> {
        [&self.bar, &self.scatter, &self.mosaic, &self.treemap].into_iter()
    }
}

/// Build all four charts from one subset.
pub fn build_charts(subset: &Subset) -> ChartSet {
    ChartSet {
        bar: bar_chart(subset),
        scatter: scatter_chart(subset),
        mosaic: mosaic_chart(subset),
        treemap: treemap_chart(subset),
    }
}
