use tracing::debug;
use validator::Validate;

use crate::error::Result;
use crate::models::{Arc, ArcStyle, Location};
use crate::settings::Settings;
use crate::table::Table;
use crate::utils::constants::DEFAULT_START_ID;

/// Builds Arcs tables connecting consecutive points of a location sequence
pub struct ArcBuilder {
    start_id: u32,
    leaflet: ArcStyle,
    cesium: ArcStyle,
    use_arrows: bool,
}

impl ArcBuilder {
    pub fn new() -> Self {
        Self {
            start_id: DEFAULT_START_ID,
            leaflet: ArcStyle::leaflet(),
            cesium: ArcStyle::cesium(),
            use_arrows: true,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new()
            .with_leaflet_style(settings.arcs.leaflet.clone())
            .with_cesium_style(settings.arcs.cesium.clone())
            .with_arrows(settings.arcs.use_arrows)
    }

    pub fn with_start_id(mut self, start_id: u32) -> Self {
        self.start_id = start_id;
        self
    }

    pub fn with_leaflet_style(mut self, style: ArcStyle) -> Self {
        self.leaflet = style;
        self
    }

    pub fn with_cesium_style(mut self, style: ArcStyle) -> Self {
        self.cesium = style;
        self
    }

    pub fn with_arrows(mut self, use_arrows: bool) -> Self {
        self.use_arrows = use_arrows;
        self
    }

    /// Build `N - 1` arcs from `N` locations, appended after `prior` when given
    pub fn build(&self, sequence: &[Location], prior: Option<&Table<Arc>>) -> Result<Table<Arc>> {
        self.leaflet.validate()?;
        self.cesium.validate()?;
        for location in sequence {
            location.validate()?;
        }

        let arc_count = sequence.len().saturating_sub(1);
        let first_id = Table::reserve_ids(prior, self.start_id, arc_count)?;
        let arcs: Vec<Arc> = sequence
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                Arc::new(
                    first_id + i as u32,
                    &pair[0],
                    &pair[1],
                    &self.leaflet,
                    &self.cesium,
                    self.use_arrows,
                )
            })
            .collect();

        debug!("Created {} arcs starting at odID {}", arcs.len(), first_id);
        Ok(Table::appended(prior, arcs))
    }
}

impl Default for ArcBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoTableError;
    use crate::models::LineStyle;

    fn sequence() -> Vec<Location> {
        vec![
            Location::new(42.1325, -78.2134),
            Location::new(42.5341, -78.3252),
            Location::new(42.3424, -78.6424),
        ]
    }

    #[test]
    fn test_consecutive_pairs() {
        let seq = sequence();
        let arcs = ArcBuilder::new().build(&seq, None).unwrap();

        assert_eq!(arcs.len(), 2);
        for (arc, pair) in arcs.iter().zip(seq.windows(2)) {
            assert_eq!(arc.start(), pair[0]);
            assert_eq!(arc.end(), pair[1]);
        }
        let ids: Vec<u32> = arcs.iter().map(|a| a.od_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_single_point_and_empty_sequence() {
        let builder = ArcBuilder::new();
        assert!(builder.build(&sequence()[..1], None).unwrap().is_empty());
        assert!(builder.build(&[], None).unwrap().is_empty());
    }

    #[test]
    fn test_append_continues_od_ids() {
        let builder = ArcBuilder::new().with_start_id(3);
        let prior = builder.build(&sequence(), None).unwrap();
        let extended = builder.build(&sequence(), Some(&prior)).unwrap();

        let ids: Vec<u32> = extended.iter().map(|a| a.od_id).collect();
        assert_eq!(ids, vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_styles_applied_to_every_row() {
        let dashed = ArcStyle {
            style: LineStyle::Dashed,
            weight: 5,
            ..ArcStyle::leaflet()
        };
        let arcs = ArcBuilder::new()
            .with_leaflet_style(dashed)
            .with_arrows(false)
            .build(&sequence(), None)
            .unwrap();

        assert!(arcs.iter().all(|a| a.leaflet_style == LineStyle::Dashed));
        assert!(arcs.iter().all(|a| a.leaflet_weight == 5 && !a.use_arrows));
        assert!(arcs.iter().all(|a| a.cesium_color == "Cesium.Color.ORANGE"));
    }

    #[test]
    fn test_invalid_opacity_rejected() {
        let style = ArcStyle {
            opacity: 2.0,
            ..ArcStyle::cesium()
        };
        let result = ArcBuilder::new()
            .with_cesium_style(style)
            .build(&sequence(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_start_id_rejected() {
        let result = ArcBuilder::new().with_start_id(0).build(&sequence(), None);
        assert!(matches!(result, Err(GeoTableError::InvalidStartId(0))));
    }

    #[test]
    fn test_od_ids_never_wrap_past_u32_max() {
        let result = ArcBuilder::new()
            .with_start_id(u32::MAX)
            .build(&sequence(), None);
        assert!(matches!(result, Err(GeoTableError::IdOverflow { .. })));

        let last = ArcBuilder::new()
            .with_start_id(u32::MAX)
            .build(&sequence()[..2], None)
            .unwrap();
        assert_eq!(last.rows()[0].od_id, u32::MAX);

        let result = ArcBuilder::new().build(&sequence()[..2], Some(&last));
        assert!(matches!(result, Err(GeoTableError::IdOverflow { .. })));
    }
}
