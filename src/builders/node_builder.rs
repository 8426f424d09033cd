use tracing::debug;
use validator::Validate;

use crate::error::Result;
use crate::models::{CesiumIconStyle, LeafletIconStyle, Location, Node};
use crate::snap::{snap_locations, RoadSnapper};
use crate::settings::Settings;
use crate::table::Table;
use crate::utils::constants::{DEFAULT_INCREMENT_START, DEFAULT_START_ID};

/// Builds Nodes tables from ordered location lists
pub struct NodeBuilder<'a> {
    node_type: Option<String>,
    node_name: String,
    start_id: u32,
    increment_name: bool,
    increment_start: i64,
    snapper: Option<&'a dyn RoadSnapper>,
    leaflet: LeafletIconStyle,
    cesium: CesiumIconStyle,
}

impl<'a> NodeBuilder<'a> {
    pub fn new() -> Self {
        Self {
            node_type: None,
            node_name: String::new(),
            start_id: DEFAULT_START_ID,
            increment_name: false,
            increment_start: DEFAULT_INCREMENT_START,
            snapper: None,
            leaflet: LeafletIconStyle::default(),
            cesium: CesiumIconStyle::default(),
        }
    }

    /// Start from the configured default node styles
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new()
            .with_leaflet_style(settings.nodes.leaflet.clone())
            .with_cesium_style(settings.nodes.cesium.clone())
    }

    pub fn with_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    pub fn with_node_name(mut self, node_name: impl Into<String>) -> Self {
        self.node_name = node_name.into();
        self
    }

    pub fn with_start_id(mut self, start_id: u32) -> Self {
        self.start_id = start_id;
        self
    }

    /// Suffix each name with a running counter beginning at `start`
    pub fn with_incrementing_names(mut self, start: i64) -> Self {
        self.increment_name = true;
        self.increment_start = start;
        self
    }

    pub fn with_snapper(mut self, snapper: &'a dyn RoadSnapper) -> Self {
        self.snapper = Some(snapper);
        self
    }

    pub fn with_leaflet_style(mut self, style: LeafletIconStyle) -> Self {
        self.leaflet = style;
        self
    }

    pub fn with_cesium_style(mut self, style: CesiumIconStyle) -> Self {
        self.cesium = style;
        self
    }

    fn name_for(&self, index: usize) -> String {
        if self.increment_name {
            format!("{}{}", self.node_name, self.increment_start + index as i64)
        } else {
            self.node_name.clone()
        }
    }

    /// Build one node per location, appended after `prior` when given.
    ///
    /// Ids run contiguously from `start_id`, raised past the largest id in
    /// `prior`. When a snapper is set the whole list is snapped as one batch
    /// first.
    pub fn build(&self, locations: &[Location], prior: Option<&Table<Node>>) -> Result<Table<Node>> {
        let snapped;
        let locations = match self.snapper {
            Some(snapper) => {
                snapped = snap_locations(snapper, locations)?;
                &snapped[..]
            }
            None => locations,
        };

        for location in locations {
            location.validate()?;
        }

        let first_id = Table::reserve_ids(prior, self.start_id, locations.len())?;
        debug!(
            "Creating {} nodes starting at id {}",
            locations.len(),
            first_id
        );

        let nodes = locations
            .iter()
            .enumerate()
            .map(|(i, location)| {
                Node::new(
                    first_id + i as u32,
                    *location,
                    self.name_for(i),
                    self.node_type.clone(),
                    &self.leaflet,
                    &self.cesium,
                )
            })
            .collect();

        Ok(Table::appended(prior, nodes))
    }
}

impl Default for NodeBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoTableError;
    use crate::snap::NearestVertexSnapper;

    fn locs(points: &[[f64; 2]]) -> Vec<Location> {
        points.iter().copied().map(Location::from).collect()
    }

    #[test]
    fn test_incrementing_names() {
        let nodes = NodeBuilder::new()
            .with_node_name("stop")
            .with_incrementing_names(1)
            .build(&locs(&[[40.0, -75.0], [41.0, -76.0]]), None)
            .unwrap();

        let ids: Vec<u32> = nodes.iter().map(|n| n.id).collect();
        let names: Vec<&str> = nodes.iter().map(|n| n.node_name.as_str()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(names, vec!["stop1", "stop2"]);
    }

    #[test]
    fn test_shared_name_and_type() {
        let nodes = NodeBuilder::new()
            .with_node_name("depot")
            .with_node_type("warehouse")
            .with_start_id(5)
            .build(&locs(&[[40.0, -75.0], [41.0, -76.0]]), None)
            .unwrap();

        assert!(nodes.iter().all(|n| n.node_name == "depot"));
        assert!(nodes.iter().all(|n| n.node_type.as_deref() == Some("warehouse")));
        assert_eq!(nodes.rows()[0].id, 5);
        assert_eq!(nodes.rows()[1].leaflet_icon_text, "6");
    }

    #[test]
    fn test_append_continues_ids() {
        let builder = NodeBuilder::new();
        let prior = builder
            .build(&locs(&[[40.0, -75.0], [40.5, -75.5]]), None)
            .unwrap();

        let extended = builder
            .build(&locs(&[[41.0, -76.0]]), Some(&prior))
            .unwrap();

        assert_eq!(extended.len(), 3);
        assert_eq!(&extended.rows()[..2], prior.rows());
        assert_eq!(extended.rows()[2].id, 3);
    }

    #[test]
    fn test_start_id_above_existing_wins() {
        let prior = NodeBuilder::new()
            .build(&locs(&[[40.0, -75.0]]), None)
            .unwrap();
        let extended = NodeBuilder::new()
            .with_start_id(100)
            .build(&locs(&[[41.0, -76.0]]), Some(&prior))
            .unwrap();

        assert_eq!(extended.rows()[1].id, 100);
    }

    #[test]
    fn test_snapping_replaces_coordinates() {
        let network = NearestVertexSnapper::new(locs(&[[40.0, -75.0]]));
        let nodes = NodeBuilder::new()
            .with_snapper(&network)
            .build(&locs(&[[40.001, -75.002], [39.999, -74.998]]), None)
            .unwrap();

        assert_eq!(nodes.len(), 2);
        assert!(nodes.iter().all(|n| n.lat == 40.0 && n.lon == -75.0));
    }

    #[test]
    fn test_out_of_range_location_rejected() {
        let result = NodeBuilder::new().build(&locs(&[[95.0, 0.0]]), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_input_keeps_prior() {
        let prior = NodeBuilder::new()
            .build(&locs(&[[40.0, -75.0]]), None)
            .unwrap();
        let same = NodeBuilder::new().build(&[], Some(&prior)).unwrap();
        assert_eq!(same, prior);
    }

    #[test]
    fn test_start_id_must_be_positive() {
        let result = NodeBuilder::new()
            .with_start_id(0)
            .build(&locs(&[[40.0, -75.0]]), None);
        assert!(matches!(result, Err(GeoTableError::InvalidStartId(0))));
    }

    #[test]
    fn test_ids_never_wrap_past_u32_max() {
        let two = locs(&[[40.0, -75.0], [41.0, -76.0]]);

        let result = NodeBuilder::new().with_start_id(u32::MAX).build(&two, None);
        assert!(matches!(result, Err(GeoTableError::IdOverflow { .. })));

        let last = NodeBuilder::new()
            .with_start_id(u32::MAX)
            .build(&two[..1], None)
            .unwrap();
        assert_eq!(last.rows()[0].id, u32::MAX);

        let result = NodeBuilder::new().build(&two[..1], Some(&last));
        assert!(matches!(result, Err(GeoTableError::IdOverflow { .. })));
    }
}
