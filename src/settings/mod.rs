use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::Result;
use crate::models::{ArcStyle, CesiumIconStyle, LeafletIconStyle};
use crate::utils::constants::ENV_PREFIX;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeDefaults {
    pub leaflet: LeafletIconStyle,
    pub cesium: CesiumIconStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcDefaults {
    pub leaflet: ArcStyle,
    pub cesium: ArcStyle,
    pub use_arrows: bool,
}

impl Default for ArcDefaults {
    fn default() -> Self {
        Self {
            leaflet: ArcStyle::leaflet(),
            cesium: ArcStyle::cesium(),
            use_arrows: true,
        }
    }
}

/// Default styling and output behaviour for builders and exporters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub nodes: NodeDefaults,
    pub arcs: ArcDefaults,
    /// Print a confirmation line after each successful export
    pub show_output_message: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nodes: NodeDefaults::default(),
            arcs: ArcDefaults::default(),
            show_output_message: true,
        }
    }
}

impl Settings {
    /// Layer built-in defaults, an optional settings file and
    /// `GEO_TABLES__*` environment variables, later sources winning.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        settings.arcs.leaflet.validate()?;
        settings.arcs.cesium.validate()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_without_file_uses_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.nodes, NodeDefaults::default());
        assert_eq!(settings.arcs.cesium.color, "Cesium.Color.ORANGE");
        assert!(settings.show_output_message);
    }

    #[test]
    fn test_file_overrides_individual_keys() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "show_output_message = false").unwrap();
        writeln!(file, "[arcs.cesium]").unwrap();
        writeln!(file, "color = \"Cesium.Color.RED\"").unwrap();
        writeln!(file, "[nodes.leaflet]").unwrap();
        writeln!(file, "color = \"green\"").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();

        assert!(!settings.show_output_message);
        assert_eq!(settings.arcs.cesium.color, "Cesium.Color.RED");
        assert_eq!(settings.arcs.cesium.weight, 3);
        assert_eq!(settings.nodes.leaflet.color, "green");
        assert_eq!(settings.nodes.leaflet.prefix, "glyphicon");
    }

    #[test]
    fn test_invalid_opacity_in_file_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[arcs.leaflet]").unwrap();
        writeln!(file, "opacity = 3.0").unwrap();

        assert!(Settings::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Settings::load(Some(Path::new("does/not/exist.toml"))).is_err());
    }
}
