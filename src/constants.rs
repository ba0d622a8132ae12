// SRID of the bump location points served by the API (WGS84 lat/lon).
pub const SRID_WGS84: u32 = 4326;

// Severity band upper bounds (inclusive). Severe is unbounded above.
pub const SMOOTH_MAX_FACTOR: f64 = 50.0;
pub const MINOR_MAX_FACTOR: f64 = 100.0;
pub const MODERATE_MAX_FACTOR: f64 = 150.0;
pub const MAJOR_MAX_FACTOR: f64 = 200.0;

pub const SMOOTH_COLOR: &str = "#00FF00";
pub const MINOR_COLOR: &str = "#ADFF2F";
pub const MODERATE_COLOR: &str = "#FFFF00";
pub const MAJOR_COLOR: &str = "#FFA500";
pub const SEVERE_COLOR: &str = "#FF0000";

pub const HEAT_INTENSITY_SCALE: f64 = 3.0;

pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;
pub const VIEWPORT_EVENT_BUFFER: usize = 16;
pub const FETCH_RESULT_BUFFER: usize = 16;
