use crate::error::{GeoTableError, Result};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Convert a `DD:MM:SS` coordinate to decimal degrees
///
/// # Examples
/// ```
/// use geo_tables::utils::dms_to_decimal;
///
/// let decimal = dms_to_decimal("-75:09:36").unwrap();
/// assert!((decimal - -75.16).abs() < 0.000001);
/// ```
pub fn dms_to_decimal(dms: &str) -> Result<f64> {
    let parts: Vec<&str> = dms.split(':').collect();

    if parts.len() != 3 {
        return Err(GeoTableError::InvalidCoordinate(format!(
            "Invalid DMS format: '{}'. Expected format: 'DD:MM:SS'",
            dms
        )));
    }

    let component = |label: &str, raw: &str| {
        raw.trim().parse::<f64>().map_err(|_| {
            GeoTableError::InvalidCoordinate(format!("Invalid {} value: '{}'", label, raw))
        })
    };

    let degrees = component("degrees", parts[0])?;
    let minutes = component("minutes", parts[1])?;
    let seconds = component("seconds", parts[2])?;

    if !(0.0..60.0).contains(&minutes) || !(0.0..60.0).contains(&seconds) {
        return Err(GeoTableError::InvalidCoordinate(format!(
            "Minutes and seconds must be in [0, 60): '{}'",
            dms
        )));
    }

    // "-0:30:00" has a zero degree part, so the sign comes from the text
    let magnitude = degrees.abs() + minutes / 60.0 + seconds / 3600.0;
    if dms.trim_start().starts_with('-') {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}

/// Parse a coordinate given either in decimal degrees or as `DD:MM:SS`
pub fn parse_coordinate(coord_str: &str) -> Result<f64> {
    let trimmed = coord_str.trim();

    if trimmed.contains(':') {
        dms_to_decimal(trimmed)
    } else {
        trimmed.parse::<f64>().map_err(|_| {
            GeoTableError::InvalidCoordinate(format!("Invalid coordinate value: '{}'", coord_str))
        })
    }
}

/// Great-circle distance in kilometers (Haversine formula)
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * a.sqrt().asin()
}
