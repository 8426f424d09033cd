use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{GeoTableError, Result};
use crate::utils::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    Miles,
    Feet,
    Yards,
    NauticalMiles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 6] = [
        DistanceUnit::Meters,
        DistanceUnit::Kilometers,
        DistanceUnit::Miles,
        DistanceUnit::Feet,
        DistanceUnit::Yards,
        DistanceUnit::NauticalMiles,
    ];

    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Some(DistanceUnit::Meters),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Some(DistanceUnit::Kilometers)
            }
            "mi" | "mile" | "miles" => Some(DistanceUnit::Miles),
            "ft" | "foot" | "feet" => Some(DistanceUnit::Feet),
            "yard" | "yards" | "yd" | "yds" => Some(DistanceUnit::Yards),
            "nmi" | "nm" | "nautical mile" | "nautical miles" => Some(DistanceUnit::NauticalMiles),
            _ => None,
        }
    }

    /// Canonical token for this unit
    pub fn token(&self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::Feet => "ft",
            DistanceUnit::Yards => "yard",
            DistanceUnit::NauticalMiles => "nmi",
        }
    }

    /// Meters per one of this unit
    pub fn meters(&self) -> f64 {
        match self {
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Kilometers => METERS_PER_KILOMETER,
            DistanceUnit::Miles => METERS_PER_MILE,
            DistanceUnit::Feet => METERS_PER_FOOT,
            DistanceUnit::Yards => METERS_PER_YARD,
            DistanceUnit::NauticalMiles => METERS_PER_NAUTICAL_MILE,
        }
    }

    pub fn convert(&self, value: f64, to: DistanceUnit) -> f64 {
        value * self.meters() / to.meters()
    }
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Seconds, TimeUnit::Minutes, TimeUnit::Hours];

    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => Some(TimeUnit::Seconds),
            "min" | "mins" | "minute" | "minutes" => Some(TimeUnit::Minutes),
            "h" | "hr" | "hrs" | "hour" | "hours" => Some(TimeUnit::Hours),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "h",
        }
    }

    /// Seconds per one of this unit
    pub fn seconds(&self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => SECONDS_PER_MINUTE,
            TimeUnit::Hours => SECONDS_PER_HOUR,
        }
    }

    pub fn convert(&self, value: f64, to: TimeUnit) -> f64 {
        value * self.seconds() / to.seconds()
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoTableError;

    fn from_str(s: &str) -> Result<Self> {
        DistanceUnit::parse(s).ok_or_else(|| GeoTableError::UnrecognizedUnit {
            unit: s.to_string(),
            kind: "distance",
        })
    }
}

impl FromStr for TimeUnit {
    type Err = GeoTableError;

    fn from_str(s: &str) -> Result<Self> {
        TimeUnit::parse(s).ok_or_else(|| GeoTableError::UnrecognizedUnit {
            unit: s.to_string(),
            kind: "time",
        })
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Convert a distance between two unit tokens, pivoting through meters
///
/// # Examples
/// ```
/// use geo_tables::units::convert_distance;
///
/// let km = convert_distance(1.0, "mi", "km").unwrap();
/// assert!((km - 1.609344).abs() < 1e-9);
/// ```
pub fn convert_distance(value: f64, from_units: &str, to_units: &str) -> Result<f64> {
    let from: DistanceUnit = from_units.parse()?;
    let to: DistanceUnit = to_units.parse()?;
    Ok(from.convert(value, to))
}

/// Convert a duration between two unit tokens, pivoting through seconds
pub fn convert_time(value: f64, from_units: &str, to_units: &str) -> Result<f64> {
    let from: TimeUnit = from_units.parse()?;
    let to: TimeUnit = to_units.parse()?;
    Ok(from.convert(value, to))
}

/// Convert a speed given as `from_dist`/`from_time` into `to_dist`/`to_time`.
///
/// The numerator goes through meters and the denominator through seconds,
/// so every unit is parsed before any arithmetic happens.
pub fn convert_speed(
    value: f64,
    from_dist: &str,
    from_time: &str,
    to_dist: &str,
    to_time: &str,
) -> Result<f64> {
    let from_dist: DistanceUnit = from_dist.parse()?;
    let from_time: TimeUnit = from_time.parse()?;
    let to_dist: DistanceUnit = to_dist.parse()?;
    let to_time: TimeUnit = to_time.parse()?;

    let meters_per_second = value * from_dist.meters() / from_time.seconds();
    Ok(meters_per_second / to_dist.meters() * to_time.seconds())
}
