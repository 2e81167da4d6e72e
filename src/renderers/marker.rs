use tracing::warn;

use crate::models::StationCatalog;
use crate::raster::GeoRaster;
use crate::utils::constants::{MARKER_ALPHA, MARKER_EXTENT};

/// Stamps soft circular markers onto a georeferenced raster.
///
/// A marker covers the 10x10 pixel neighborhood `[-5, 5) x [-5, 5)` around
/// the projected coordinate (center biased toward the lower-right by
/// convention) and is blended additively with a fixed low alpha, so
/// overlapping markers accumulate color.
pub struct MarkerRenderer {
    color: [u8; 3],
}

/// Outcome of stamping a batch of stations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StampSummary {
    pub drawn: usize,
    pub skipped: usize,
}

impl MarkerRenderer {
    pub fn new(color: [u8; 3]) -> Self {
        Self { color }
    }

    /// Stamp one marker at a geographic coordinate. A coordinate projecting
    /// outside the raster is logged with the original lat/lon and skipped;
    /// it never fails a batch. Returns whether the marker was drawn.
    pub fn stamp(&self, raster: &mut GeoRaster, lat: f64, lon: f64) -> bool {
        let (x, y) = match raster.project_to_pixel(lat, lon) {
            Ok(pixel) => pixel,
            Err(_) => {
                warn!(lat, lon, "coordinate projects outside the map, marker skipped");
                return false;
            }
        };

        for i in -MARKER_EXTENT..MARKER_EXTENT {
            for j in -MARKER_EXTENT..MARKER_EXTENT {
                let px = x as i64 + i;
                let py = y as i64 + j;
                if px < 0 || px >= raster.width() as i64 || py < 0 || py >= raster.height() as i64
                {
                    continue;
                }
                raster.blend_pixel(px as u32, py as u32, self.color, MARKER_ALPHA);
            }
        }

        true
    }

    /// Stamp a marker for every station in the catalog, in catalog order.
    pub fn stamp_all(&self, raster: &mut GeoRaster, catalog: &StationCatalog) -> StampSummary {
        let mut summary = StampSummary::default();
        for station in catalog {
            if self.stamp(raster, station.lat, station.lon) {
                summary.drawn += 1;
            } else {
                summary.skipped += 1;
            }
        }
        summary
    }
}
