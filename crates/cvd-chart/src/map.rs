//! Marker map specification.

use cvd_core::{Subset, format_count};
use cvd_model::{CountryRecord, LatLon, MapSpec, MarkerDescriptor, Viewport};
use tracing::debug;

/// World-level zoom, whatever the spread of the markers.
pub const ZOOM: u8 = 2;
pub const MARKER_RADIUS: f64 = 5.0;
pub const MARKER_COLOR: &str = "red";
pub const MARKER_FILL_OPACITY: f64 = 0.6;
pub const VIEWPORT: Viewport = Viewport {
    height: 600,
    width: 800,
};

/// Map for a subset, or `None` when the subset has nothing to center on.
pub fn map_spec(subset: &Subset) -> Option<MapSpec> {
    let Some(center) = subset.map_center() else {
        debug!("map skipped: no rows with coordinates");
        return None;
    };
    Some(build_map_spec(subset, center))
}

/// One marker per row that has both coordinates.
pub fn build_map_spec(subset: &Subset, center: LatLon) -> MapSpec {
    let markers: Vec<MarkerDescriptor> = subset.rows().iter().filter_map(marker).collect();
    debug!(markers = markers.len(), "map built");
    MapSpec {
        center,
        zoom: ZOOM,
        control_scale: true,
        viewport: VIEWPORT,
        markers,
    }
}

fn marker(row: &CountryRecord) -> Option<MarkerDescriptor> {
    let (lat, lon) = row.position()?;
    Some(MarkerDescriptor {
        position: LatLon { lat, lon },
        radius: MARKER_RADIUS,
        color: MARKER_COLOR.to_string(),
        fill_color: MARKER_COLOR.to_string(),
        fill_opacity: MARKER_FILL_OPACITY,
        tooltip: marker_tooltip(row),
    })
}

/// Hover text for one marker.
pub fn marker_tooltip(row: &CountryRecord) -> String {
    format!(
        "Country:{}<br>Active Cases:{}<br>Total Confirmed:{}",
        row.country,
        format_count(row.active_cases),
        format_count(row.total_confirmed)
    )
}
