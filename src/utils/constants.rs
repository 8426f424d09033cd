/// Distance conversion factors (meters per unit)
pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const METERS_PER_MILE: f64 = 1609.344;
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const METERS_PER_YARD: f64 = 0.9144;
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Time conversion factors (seconds per unit)
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Map boundary adjustments, in degrees
pub const BOUNDARY_DEGENERATE_SPAN: f64 = 0.0001;
pub const BOUNDARY_DEGENERATE_MARGIN: f64 = 0.05;
pub const BOUNDARY_PADDING: f64 = 0.01;

/// Default node styling
pub const DEFAULT_LEAFLET_ICON_PREFIX: &str = "glyphicon";
pub const DEFAULT_LEAFLET_ICON_TYPE: &str = "info-sign";
pub const DEFAULT_LEAFLET_ICON_COLOR: &str = "blue";
pub const DEFAULT_CESIUM_ICON_TYPE: &str = "pin";
pub const DEFAULT_CESIUM_ICON_COLOR: &str = "Cesium.Color.BLUE";

/// Default arc styling
pub const DEFAULT_LEAFLET_ARC_COLOR: &str = "orange";
pub const DEFAULT_LEAFLET_ARC_WEIGHT: u32 = 3;
pub const DEFAULT_LEAFLET_ARC_OPACITY: f64 = 0.8;
pub const DEFAULT_CESIUM_ARC_COLOR: &str = "Cesium.Color.ORANGE";
pub const DEFAULT_CESIUM_ARC_WEIGHT: u32 = 3;
pub const DEFAULT_CESIUM_ARC_OPACITY: f64 = 0.8;

/// Identifier defaults
pub const DEFAULT_START_ID: u32 = 1;
pub const DEFAULT_INCREMENT_START: i64 = 1;

/// Export defaults
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const ENV_PREFIX: &str = "GEO_TABLES";
