use tracing::debug;

use crate::error::{GeoTableError, Result};
use crate::models::Location;
use crate::utils::coordinates::haversine_distance;

/// Maps raw coordinates onto a routable network.
///
/// Implementations receive the whole batch in one call and must return one
/// location per input, in input order. Provider selection, credentials and
/// retries belong to the implementation.
pub trait RoadSnapper {
    fn snap_batch(&self, locations: &[Location]) -> Result<Vec<Location>>;
}

/// Run a snap batch and check that the provider honoured the cardinality contract
pub fn snap_locations(snapper: &dyn RoadSnapper, locations: &[Location]) -> Result<Vec<Location>> {
    debug!("Snapping {} locations to the road network", locations.len());
    let snapped = snapper.snap_batch(locations)?;

    if snapped.len() != locations.len() {
        return Err(GeoTableError::SnapMismatch {
            expected: locations.len(),
            actual: snapped.len(),
        });
    }

    Ok(snapped)
}

/// Offline snapper that moves each location onto the closest known network vertex.
///
/// Several inputs may land on the same vertex; results are not deduplicated.
pub struct NearestVertexSnapper {
    vertices: Vec<Location>,
}

impl NearestVertexSnapper {
    pub fn new(vertices: Vec<Location>) -> Self {
        Self { vertices }
    }

    fn nearest(&self, location: &Location) -> Option<&Location> {
        self.vertices.iter().min_by(|a, b| {
            let da = haversine_distance(location.lat, location.lon, a.lat, a.lon);
            let db = haversine_distance(location.lat, location.lon, b.lat, b.lon);
            da.total_cmp(&db)
        })
    }
}

impl RoadSnapper for NearestVertexSnapper {
    fn snap_batch(&self, locations: &[Location]) -> Result<Vec<Location>> {
        locations
            .iter()
            .map(|loc| {
                self.nearest(loc)
                    .map(|v| Location::with_altitude(v.lat, v.lon, loc.alt))
                    .ok_or_else(|| GeoTableError::Snap("road network has no vertices".to_string()))
            })
            .collect()
    }
}
