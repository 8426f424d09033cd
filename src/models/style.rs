use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use crate::error::{GeoTableError, Result};
use crate::utils::constants::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dotted,
    Dashed,
}

impl LineStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dotted => "dotted",
            LineStyle::Dashed => "dashed",
        }
    }
}

impl FromStr for LineStyle {
    type Err = GeoTableError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "solid" => Ok(LineStyle::Solid),
            "dotted" => Ok(LineStyle::Dotted),
            "dashed" => Ok(LineStyle::Dashed),
            other => Err(GeoTableError::Config(format!(
                "Unsupported line style: '{}' (expected solid, dotted or dashed)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for LineStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Node marker styling for the Leaflet renderer.
///
/// `text` falls back to the node id when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeafletIconStyle {
    pub prefix: String,
    pub icon_type: String,
    pub color: String,
    pub text: Option<String>,
}

impl Default for LeafletIconStyle {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_LEAFLET_ICON_PREFIX.to_string(),
            icon_type: DEFAULT_LEAFLET_ICON_TYPE.to_string(),
            color: DEFAULT_LEAFLET_ICON_COLOR.to_string(),
            text: None,
        }
    }
}

/// Node marker styling for the Cesium renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CesiumIconStyle {
    pub icon_type: String,
    pub color: String,
    pub text: Option<String>,
}

impl Default for CesiumIconStyle {
    fn default() -> Self {
        Self {
            icon_type: DEFAULT_CESIUM_ICON_TYPE.to_string(),
            color: DEFAULT_CESIUM_ICON_COLOR.to_string(),
            text: None,
        }
    }
}

/// Line styling shared by both renderers; only the defaults differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ArcStyle {
    pub color: String,

    #[validate(range(min = 1))]
    pub weight: u32,

    pub style: LineStyle,

    #[validate(range(min = 0.0, max = 1.0))]
    pub opacity: f64,
}

impl ArcStyle {
    pub fn leaflet() -> Self {
        Self {
            color: DEFAULT_LEAFLET_ARC_COLOR.to_string(),
            weight: DEFAULT_LEAFLET_ARC_WEIGHT,
            style: LineStyle::Solid,
            opacity: DEFAULT_LEAFLET_ARC_OPACITY,
        }
    }

    pub fn cesium() -> Self {
        Self {
            color: DEFAULT_CESIUM_ARC_COLOR.to_string(),
            weight: DEFAULT_CESIUM_ARC_WEIGHT,
            style: LineStyle::Solid,
            opacity: DEFAULT_CESIUM_ARC_OPACITY,
        }
    }
}

impl Default for ArcStyle {
    fn default() -> Self {
        Self::leaflet()
    }
}
