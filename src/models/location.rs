use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{GeoTableError, Result};

/// A latitude/longitude pair in degrees with altitude in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,

    #[serde(default)]
    pub alt: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon, alt: 0.0 }
    }

    pub fn with_altitude(lat: f64, lon: f64, alt: f64) -> Self {
        Self { lat, lon, alt }
    }

    /// Build a location from `[lat, lon]` or `[lat, lon, alt]`
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [lat, lon] => Ok(Self::new(lat, lon)),
            [lat, lon, alt] => Ok(Self::with_altitude(lat, lon, alt)),
            _ => Err(GeoTableError::InvalidCoordinate(format!(
                "Expected [lat, lon] or [lat, lon, alt], got {} values",
                values.len()
            ))),
        }
    }
}

impl From<[f64; 2]> for Location {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self::new(lat, lon)
    }
}

impl From<[f64; 3]> for Location {
    fn from([lat, lon, alt]: [f64; 3]) -> Self {
        Self::with_altitude(lat, lon, alt)
    }
}

impl From<(f64, f64)> for Location {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_altitude_defaults_to_zero() {
        let loc = Location::from([40.0, -75.0]);
        assert_eq!(loc.alt, 0.0);

        let loc = Location::from_slice(&[40.0, -75.0, 120.0]).unwrap();
        assert_eq!(loc.alt, 120.0);
    }

    #[test]
    fn test_invalid_slice_length() {
        assert!(Location::from_slice(&[40.0]).is_err());
        assert!(Location::from_slice(&[1.0, 2.0, 3.0, 4.0]).is_err());
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Location::new(51.5074, -0.1278).validate().is_ok());
        assert!(Location::new(91.0, 0.0).validate().is_err());
        assert!(Location::new(0.0, -181.0).validate().is_err());
    }
}
