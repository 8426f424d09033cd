use serde::{Deserialize, Serialize};

use crate::models::{CesiumIconStyle, LeafletIconStyle, Location};
use crate::table::{TableKind, TableRow};

/// One row of a Nodes table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: u32,
    pub lat: f64,
    pub lon: f64,
    pub alt_meters: f64,
    #[serde(default)]
    pub node_name: String,
    #[serde(default)]
    pub node_type: Option<String>,
    pub leaflet_icon_prefix: String,
    pub leaflet_icon_type: String,
    pub leaflet_color: String,
    pub leaflet_icon_text: String,
    pub cesium_icon_type: String,
    pub cesium_color: String,
    pub cesium_icon_text: String,
}

impl Node {
    /// Create a node with the given styling; unset icon texts become the id
    pub fn new(
        id: u32,
        location: Location,
        node_name: String,
        node_type: Option<String>,
        leaflet: &LeafletIconStyle,
        cesium: &CesiumIconStyle,
    ) -> Self {
        let id_text = id.to_string();

        Self {
            id,
            lat: location.lat,
            lon: location.lon,
            alt_meters: location.alt,
            node_name,
            node_type,
            leaflet_icon_prefix: leaflet.prefix.clone(),
            leaflet_icon_type: leaflet.icon_type.clone(),
            leaflet_color: leaflet.color.clone(),
            leaflet_icon_text: leaflet.text.clone().unwrap_or_else(|| id_text.clone()),
            cesium_icon_type: cesium.icon_type.clone(),
            cesium_color: cesium.color.clone(),
            cesium_icon_text: cesium.text.clone().unwrap_or(id_text),
        }
    }
}

impl TableRow for Node {
    const KIND: TableKind = TableKind::Nodes;

    fn row_id(&self) -> u32 {
        self.id
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.lat.to_string(),
            self.lon.to_string(),
            self.alt_meters.to_string(),
            self.node_name.clone(),
            self.node_type.clone().unwrap_or_default(),
            self.leaflet_icon_prefix.clone(),
            self.leaflet_icon_type.clone(),
            self.leaflet_color.clone(),
            self.leaflet_icon_text.clone(),
            self.cesium_icon_type.clone(),
            self.cesium_color.clone(),
            self.cesium_icon_text.clone(),
        ]
    }
}
