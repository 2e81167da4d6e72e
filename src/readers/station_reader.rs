use std::path::Path;

use tracing::warn;

use crate::error::{MapperError, Result};
use crate::models::{Station, StationCatalog};

/// Lenient station list loader.
///
/// The source is CSV-like text with a header row followed by
/// `id,name,lat,lon` rows. Parsing is deliberately forgiving: every data row
/// yields exactly one catalog entry, and missing or unparseable tokens fall
/// back to zero values (empty string for the name) instead of rejecting the
/// row. Station names may contain spaces but not embedded commas.
pub struct StationReader {
    has_headers: bool,
}

impl StationReader {
    pub fn new() -> Self {
        Self { has_headers: true }
    }

    pub fn with_headers(has_headers: bool) -> Self {
        Self { has_headers }
    }

    /// Read the station catalog from a CSV file, in source order.
    pub fn read_stations(&self, path: &Path) -> Result<StationCatalog> {
        if !path.exists() {
            return Err(MapperError::ResourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut stations = Vec::new();
        for record in reader.records() {
            let record = record?;
            stations.push(self.parse_record(&record));
        }

        Ok(StationCatalog::from_stations(stations))
    }

    /// Turn one CSV record into a station, defaulting any missing field.
    fn parse_record(&self, record: &csv::StringRecord) -> Station {
        if record.len() < 4 {
            warn!(
                fields = record.len(),
                "short station row, missing fields default to zero"
            );
        }

        let id = record.get(0).and_then(|s| s.parse().ok()).unwrap_or(0);
        let name = record.get(1).unwrap_or("").to_string();
        let lat = record.get(2).and_then(|s| s.parse().ok()).unwrap_or(0.0);
        let lon = record.get(3).and_then(|s| s.parse().ok()).unwrap_or(0.0);

        Station::new(id, name, lat, lon)
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}
