use crate::error::{GeoTableError, Result};
use crate::models::Location;
use crate::utils::coordinates::parse_coordinate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

/// Reads ordered location lists from delimited text.
///
/// The header must name a latitude and a longitude column; an altitude
/// column is optional. Coordinates may be decimal or `DD:MM:SS`.
pub struct LocationReader {
    delimiter: u8,
}

struct ColumnLayout {
    lat: usize,
    lon: usize,
    alt: Option<usize>,
}

impl LocationReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn read_locations(&self, path: &Path) -> Result<Vec<Location>> {
        let file = std::fs::File::open(path)?;
        self.read_from(file)
    }

    pub fn read_from<R: Read>(&self, source: R) -> Result<Vec<Location>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        let layout = Self::detect_columns(reader.headers()?)?;
        let mut locations = Vec::new();

        for (index, record) in reader.records().enumerate() {
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            locations.push(Self::parse_record(&record, &layout, index + 1)?);
        }

        Ok(locations)
    }

    fn detect_columns(headers: &StringRecord) -> Result<ColumnLayout> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.contains(&h.to_lowercase().as_str()))
        };

        let lat = find(&["lat", "latitude"]).ok_or_else(|| {
            GeoTableError::InvalidCoordinate("Location file has no latitude column".to_string())
        })?;
        let lon = find(&["lon", "lng", "long", "longitude"]).ok_or_else(|| {
            GeoTableError::InvalidCoordinate("Location file has no longitude column".to_string())
        })?;
        let alt = find(&["alt", "altitude", "altmeters"]);

        Ok(ColumnLayout { lat, lon, alt })
    }

    fn parse_record(record: &StringRecord, layout: &ColumnLayout, row: usize) -> Result<Location> {
        let field = |index: usize| {
            record.get(index).ok_or_else(|| {
                GeoTableError::InvalidCoordinate(format!("Row {} is missing column {}", row, index))
            })
        };

        let lat = parse_coordinate(field(layout.lat)?)?;
        let lon = parse_coordinate(field(layout.lon)?)?;
        let alt = match layout.alt.and_then(|i| record.get(i)) {
            Some(raw) if !raw.is_empty() => raw.parse::<f64>().map_err(|_| {
                GeoTableError::InvalidCoordinate(format!(
                    "Invalid altitude '{}' on row {}",
                    raw, row
                ))
            })?,
            _ => 0.0,
        };

        Ok(Location::with_altitude(lat, lon, alt))
    }
}

impl Default for LocationReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_decimal_and_dms() {
        let data = "lat,lon\n40.0,-75.0\n39:57:00,-75:09:36\n";
        let locations = LocationReader::new().read_from(data.as_bytes()).unwrap();

        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0], Location::new(40.0, -75.0));
        assert!((locations[1].lat - 39.95).abs() < 1e-9);
        assert!((locations[1].lon - -75.16).abs() < 1e-9);
    }

    #[test]
    fn test_optional_altitude_column() {
        let data = "Latitude,Longitude,Alt\n40.0,-75.0,12.5\n41.0,-76.0,\n";
        let locations = LocationReader::new().read_from(data.as_bytes()).unwrap();

        assert_eq!(locations[0].alt, 12.5);
        assert_eq!(locations[1].alt, 0.0);
    }

    #[test]
    fn test_missing_columns_rejected() {
        let data = "x,y\n1,2\n";
        assert!(LocationReader::new().read_from(data.as_bytes()).is_err());
    }

    #[test]
    fn test_read_locations_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "lat;lon")?;
        writeln!(file, "40.0;-75.0")?;

        let locations = LocationReader::with_delimiter(b';').read_locations(file.path())?;
        assert_eq!(locations, vec![Location::new(40.0, -75.0)]);

        Ok(())
    }
}
