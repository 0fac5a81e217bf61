//! One render pass: validate, subset, charts, map.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use cvd_chart::{ChartSet, build_charts, map_spec};
use cvd_core::{Subset, available_countries, build_subset, validate};
use cvd_ingest::Dataset;
use cvd_model::{DashboardError, MapSpec, Selection};
use tracing::{debug, info, info_span};

/// Everything one pass produces for the page.
#[derive(Debug, Clone)]
pub struct RenderPass {
    pub subset: Arc<Subset>,
    pub charts: ChartSet,
    /// `None` when the subset has nothing to place on a map.
    pub map: Option<MapSpec>,
}

/// Render host over a dataset loaded once at startup.
///
/// Passes never interleave: a caller that arrives while another pass is
/// running waits for it to finish.
#[derive(Debug)]
pub struct Dashboard {
    table: Arc<Dataset>,
    pass_lock: Mutex<()>,
}

impl Dashboard {
    pub fn new(table: Arc<Dataset>) -> Self {
        Self {
            table,
            pass_lock: Mutex::new(()),
        }
    }

    pub fn table(&self) -> &Dataset {
        &self.table
    }

    /// Countries the user may pick from, in table order.
    pub fn available_countries(&self) -> Result<Vec<String>, DashboardError> {
        Ok(available_countries(&self.table)?)
    }

    /// Configured defaults that exist in the table, in configured order.
    pub fn default_selection<I, S>(&self, defaults: I) -> Result<Selection, DashboardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let available = self.available_countries()?;
        Ok(defaults
            .into_iter()
            .filter(|country| available.iter().any(|known| known == country.as_ref()))
            .map(|country| country.as_ref().to_string())
            .collect())
    }

    /// Run one pass for `selection`.
    ///
    /// # Errors
    ///
    /// `EmptySelection` or `MissingColumn` from the selection gate, `Data`
    /// when the table cannot be read into rows. An unmatched selection is not
    /// an error; it yields empty charts and no map.
    pub fn render(&self, selection: &Selection) -> Result<RenderPass, DashboardError> {
        let _pass = self
            .pass_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let span = info_span!("render", selected = selection.len());
        let _guard = span.enter();
        let start = Instant::now();

        let validated = validate(&self.table, selection)?;
        let subset = Arc::new(build_subset(&self.table, &validated)?);
        let charts = build_charts(&subset);
        let map = map_spec(&subset);
        debug!(map = map.is_some(), "specs built");

        info!(
            countries = subset.len(),
            duration_ms = start.elapsed().as_millis(),
            "render pass complete"
        );
        Ok(RenderPass {
            subset,
            charts,
            map,
        })
    }
}
