use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub height: u32,
    pub width: u32,
}

/// One circle marker on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDescriptor {
    pub position: LatLon,
    pub radius: f64,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    /// HTML fragment shown on hover.
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSpec {
    pub center: LatLon,
    pub zoom: u8,
    pub control_scale: bool,
    pub viewport: Viewport,
    pub markers: Vec<MarkerDescriptor>,
}
