use serde::{Deserialize, Serialize};

use crate::error::{GeoTableError, Result};
use crate::models::{Arc, Location, Node};
use crate::table::Table;
use crate::utils::constants::{
    BOUNDARY_DEGENERATE_MARGIN, BOUNDARY_DEGENERATE_SPAN, BOUNDARY_PADDING,
};

/// A padded lat/lon rectangle framing a map view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBoundary {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl MapBoundary {
    /// The two opposite corners as `[lat, lon]` pairs: south-east first,
    /// north-west second. Leaflet's `fitBounds` accepts them in this order.
    pub fn corners(&self) -> [[f64; 2]; 2] {
        [
            [self.min_lat, self.max_lon],
            [self.max_lat, self.min_lon],
        ]
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn contains(&self, location: &Location) -> bool {
        (self.min_lat..=self.max_lat).contains(&location.lat)
            && (self.min_lon..=self.max_lon).contains(&location.lon)
    }
}

/// Widen a degenerate axis, then pad both ends
fn padded_range(values: &[f64]) -> (f64, f64) {
    let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if (max - min).abs() < BOUNDARY_DEGENERATE_SPAN {
        min -= BOUNDARY_DEGENERATE_MARGIN;
        max += BOUNDARY_DEGENERATE_MARGIN;
    }

    (min - BOUNDARY_PADDING, max + BOUNDARY_PADDING)
}

/// Compute the map boundary covering every node, arc endpoint and location.
///
/// Returns [`GeoTableError::EmptyBoundary`] when the sources hold no coordinates.
pub fn compute_boundary(
    nodes: Option<&Table<Node>>,
    arcs: Option<&Table<Arc>>,
    locs: Option<&[Location]>,
) -> Result<MapBoundary> {
    let mut lats = Vec::new();
    let mut lons = Vec::new();

    if let Some(nodes) = nodes {
        for node in nodes {
            lats.push(node.lat);
            lons.push(node.lon);
        }
    }

    if let Some(arcs) = arcs {
        for arc in arcs {
            lats.extend([arc.start_lat, arc.end_lat]);
            lons.extend([arc.start_lon, arc.end_lon]);
        }
    }

    if let Some(locs) = locs {
        for loc in locs {
            lats.push(loc.lat);
            lons.push(loc.lon);
        }
    }

    if lats.is_empty() {
        return Err(GeoTableError::EmptyBoundary);
    }

    let (min_lat, max_lat) = padded_range(&lats);
    let (min_lon, max_lon) = padded_range(&lons);

    Ok(MapBoundary {
        min_lat,
        max_lat,
        min_lon,
        max_lon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ArcBuilder;

    #[test]
    fn test_single_point_is_widened_and_padded() {
        let locs = vec![Location::new(40.0, -75.0); 3];
        let boundary = compute_boundary(None, None, Some(&locs[..])).unwrap();

        assert!((boundary.lat_span() - 0.12).abs() < 1e-9);
        assert!((boundary.lon_span() - 0.12).abs() < 1e-9);
        assert!(boundary.contains(&Location::new(40.0, -75.0)));
    }

    #[test]
    fn test_regular_span_only_padded() {
        let locs = vec![Location::new(40.0, -76.0), Location::new(41.0, -75.0)];
        let boundary = compute_boundary(None, None, Some(&locs[..])).unwrap();

        assert!((boundary.min_lat - 39.99).abs() < 1e-9);
        assert!((boundary.max_lat - 41.01).abs() < 1e-9);
        assert_eq!(
            boundary.corners(),
            [[boundary.min_lat, boundary.max_lon], [boundary.max_lat, boundary.min_lon]]
        );
    }

    #[test]
    fn test_arcs_contribute_both_endpoints() {
        let seq = vec![Location::new(10.0, 20.0), Location::new(12.0, 25.0)];
        let arcs = ArcBuilder::new().build(&seq, None).unwrap();
        let boundary = compute_boundary(None, Some(&arcs), None).unwrap();

        assert!((boundary.min_lon - 19.99).abs() < 1e-9);
        assert!((boundary.max_lon - 25.01).abs() < 1e-9);
    }

    #[test]
    fn test_empty_sources_fail() {
        assert!(matches!(
            compute_boundary(None, None, None),
            Err(GeoTableError::EmptyBoundary)
        ));
        let empty: Table<Node> = Table::new();
        assert!(compute_boundary(Some(&empty), None, Some(&[][..])).is_err());
    }
}
