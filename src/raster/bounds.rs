use serde::{Deserialize, Serialize};

use crate::error::{MapperError, Result};

/// Axis-aligned lat/lon rectangle described by the raster's top-left and
/// bottom-right corners. Drives the linear geo-to-pixel transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top_left_lat: f64,
    pub top_left_lon: f64,
    pub bottom_right_lat: f64,
    pub bottom_right_lon: f64,
}

impl BoundingBox {
    /// Build a bounding box, rejecting boxes with zero lat or lon extent
    /// since those would make the projection divide by zero.
    pub fn new(
        top_left_lat: f64,
        top_left_lon: f64,
        bottom_right_lat: f64,
        bottom_right_lon: f64,
    ) -> Result<Self> {
        if top_left_lon == bottom_right_lon {
            return Err(MapperError::DegenerateBounds(format!(
                "zero longitude extent at {}",
                top_left_lon
            )));
        }
        if top_left_lat == bottom_right_lat {
            return Err(MapperError::DegenerateBounds(format!(
                "zero latitude extent at {}",
                top_left_lat
            )));
        }

        Ok(Self {
            top_left_lat,
            top_left_lon,
            bottom_right_lat,
            bottom_right_lon,
        })
    }

    pub fn lat_extent(&self) -> f64 {
        self.top_left_lat - self.bottom_right_lat
    }

    pub fn lon_extent(&self) -> f64 {
        self.top_left_lon - self.bottom_right_lon
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        let (lat_lo, lat_hi) = ordered(self.bottom_right_lat, self.top_left_lat);
        let (lon_lo, lon_hi) = ordered(self.bottom_right_lon, self.top_left_lon);
        lat >= lat_lo && lat <= lat_hi && lon >= lon_lo && lon <= lon_hi
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bounds() {
        let bounds = BoundingBox::new(61.0, -8.0, 49.5, 2.0).unwrap();
        assert_eq!(bounds.lat_extent(), 11.5);
        assert_eq!(bounds.lon_extent(), -10.0);
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        assert!(BoundingBox::new(61.0, 2.0, 49.5, 2.0).is_err());
        assert!(BoundingBox::new(49.5, -8.0, 49.5, 2.0).is_err());
    }

    #[test]
    fn test_contains() {
        let bounds = BoundingBox::new(61.0, -8.0, 49.5, 2.0).unwrap();
        assert!(bounds.contains(51.5, -0.1)); // London
        assert!(!bounds.contains(48.8, 2.35)); // Paris, outside both axes
    }
}
