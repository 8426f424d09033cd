use serde::{Deserialize, Serialize};

use crate::models::{ArcStyle, LineStyle, Location};
use crate::table::{TableKind, TableRow};

/// One row of an Arcs table, a directed segment between two locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arc {
    #[serde(rename = "odID")]
    pub od_id: u32,
    pub start_lat: f64,
    pub start_lon: f64,
    pub end_lat: f64,
    pub end_lon: f64,
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

impl Arc {
    pub fn new(
        od_id: u32,
        start: &Location,
        end: &Location,
        leaflet: &ArcStyle,
        cesium: &ArcStyle,
        use_arrows: bool,
    ) -> Self {
        Self {
            od_id,
            start_lat: start.lat,
            start_lon: start.lon,
            end_lat: end.lat,
            end_lon: end.lon,
            leaflet_color: leaflet.color.clone(),
            leaflet_weight: leaflet.weight,
            leaflet_style: leaflet.style,
            leaflet_opacity: leaflet.opacity,
            use_arrows,
            cesium_color: cesium.color.clone(),
            cesium_weight: cesium.weight,
            cesium_style: cesium.style,
            cesium_opacity: cesium.opacity,
        }
    }

    pub fn start(&self) -> Location {
        Location::new(self.start_lat, self.start_lon)
    }

    pub fn end(&self) -> Location {
        Location::new(self.end_lat, self.end_lon)
    }
}

impl TableRow for Arc {
    const KIND: TableKind = TableKind::Arcs;

    fn row_id(&self) -> u32 {
        self.od_id
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.od_id.to_string(),
            self.start_lat.to_string(),
            self.start_lon.to_string(),
            self.end_lat.to_string(),
            self.end_lon.to_string(),
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
