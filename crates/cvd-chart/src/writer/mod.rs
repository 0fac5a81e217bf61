//! Output writers for chart specifications.
//!
//! A writer checks that it can express a [`ChartSpec`] and then turns it into
//! a JSON document for a specific front-end library:
//!
//! - [`VegaLiteWriter`]: bar, scatter and mosaic charts
//! - [`PlotlyWriter`]: the treemap, which Vega-Lite has no mark for

mod plotly;
mod vegalite;

pub use plotly::PlotlyWriter;
pub use vegalite::VegaLiteWriter;

use cvd_model::{ChartKind, ChartSpec};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriterError {
    #[error("{writer} cannot render {kind} charts")]
    Unsupported {
        writer: &'static str,
        kind: ChartKind,
    },
    #[error("{kind} chart is missing its {channel} channel")]
    MissingChannel {
        kind: ChartKind,
        channel: &'static str,
    },
    #[error("failed to serialize chart: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WriterError>;

/// Trait for chart output writers.
pub trait Writer {
    /// Short name used in messages and file suffixes.
    fn name(&self) -> &'static str;

    /// Chart kinds this writer can express.
    fn supports(&self, kind: ChartKind) -> bool;

    /// Generate the output document for one chart.
    ///
    /// # Errors
    ///
    /// Returns `WriterError` if the chart kind is unsupported or a channel
    /// the format needs is absent.
    fn write(&self, spec: &ChartSpec) -> Result<Value>;

    /// Check compatibility without producing output.
    fn validate(&self, spec: &ChartSpec) -> Result<()> {
        if self.supports(spec.kind) {
            Ok(())
        } else {
            Err(WriterError::Unsupported {
                writer: self.name(),
                kind: spec.kind,
            })
        }
    }

    /// Write the chart as pretty-printed JSON text.
    fn render(&self, spec: &ChartSpec) -> Result<String> {
        let value = self.write(spec)?;
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

/// Pick the writer able to express a chart kind.
pub fn writer_for(kind: ChartKind) -> Box<dyn Writer> {
    match kind {
        ChartKind::Treemap => Box::new(PlotlyWriter::new()),
        _ => Box::new(VegaLiteWriter::new()),
    }
}
