pub mod chart;
pub mod columns;
pub mod error;
pub mod map;
pub mod record;
pub mod selection;

pub use chart::{
    Channel, ChartKind, ChartSpec, Datum, Encoding, FieldSort, FieldType, IntervalSelection,
    Mark, Scale, SortOrder, Stack, TooltipField, TreemapStyle,
};
pub use columns::{OPTIONAL_COLUMNS, REQUIRED_COLUMNS};
pub use error::{DashboardError, Result, ValidationError};
pub use map::{LatLon, MapSpec, MarkerDescriptor, Viewport};
pub use record::CountryRecord;
pub use selection::{DEFAULT_COUNTRIES, Selection};
