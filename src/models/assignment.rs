use serde::{Deserialize, Serialize};

use crate::models::LineStyle;
use crate::table::{TableKind, TableRow};

/// One row of an Assignments table: an object moving along an arc over a time window.
///
/// No builder in this crate produces assignments; the type exists so that
/// assignment tables can be initialized, imported and exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(rename = "odID")]
    pub od_id: u32,
    #[serde(rename = "objectID")]
    pub object_id: String,
    pub model_file: String,
    pub model_scale: f64,
    pub model_min_px_size: f64,
    pub start_time_sec: f64,
    pub start_lat: f64,
    pub start_lon: f64,
    pub start_alt_meters: f64,
    pub end_time_sec: f64,
    pub end_lat: f64,
    pub end_lon: f64,
    pub end_alt_meters: f64,
    pub leaflet_color: String,
    pub leaflet_weight: u32,
    pub leaflet_style: LineStyle,
    pub leaflet_opacity: f64,
    pub use_arrows: bool,
    pub cesium_color: String,
    pub cesium_weight: u32,
    pub cesium_style: LineStyle,
    pub cesium_opacity: f64,
}

impl TableRow for Assignment {
    const KIND: TableKind = TableKind::Assignments;

    fn row_id(&self) -> u32 {
        self.od_id
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.od_id.to_string(),
            self.object_id.clone(),
            self.model_file.clone(),
            self.model_scale.to_string(),
            self.model_min_px_size.to_string(),
            self.start_time_sec.to_string(),
            self.start_lat.to_string(),
            self.start_lon.to_string(),
            self.start_alt_meters.to_string(),
            self.end_time_sec.to_string(),
            self.end_lat.to_string(),
            self.end_lon.to_string(),
            self.end_alt_meters.to_string(),
            self.leaflet_color.clone(),
            self.leaflet_weight.to_string(),
            self.leaflet_style.to_string(),
            self.leaflet_opacity.to_string(),
            self.use_arrows.to_string(),
            self.cesium_color.clone(),
            self.cesium_weight.to_string(),
            self.cesium_style.to_string(),
            self.cesium_opacity.to_string(),
        ]
    }
}
