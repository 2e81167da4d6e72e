use std::path::Path;

use tracing::debug;

use crate::error::{MapperError, Result};
use crate::raster::GeoRaster;
use crate::readers::read_bounds;

/// Load a georeferenced map: decode the bitmap into an RGBA buffer and pair
/// it with the bounding box from the config file. Either file missing is a
/// [`MapperError::ResourceNotFound`] naming the offending path.
pub fn load_map(image_path: &Path, bounds_path: &Path) -> Result<GeoRaster> {
    if !image_path.exists() {
        return Err(MapperError::ResourceNotFound {
            path: image_path.to_path_buf(),
        });
    }

    let bounds = read_bounds(bounds_path)?;

    let image = image::open(image_path)?.into_rgba8();
    let (width, height) = image.dimensions();
    debug!(width, height, "decoded map image");

    GeoRaster::from_rgba(image.into_raw(), width, height, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::BoundingBox;
    use crate::writers::save_map;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_missing_image_reported_with_path() {
        let dir = TempDir::new().unwrap();
        let bounds = dir.path().join("bounds.txt");
        std::fs::write(&bounds, "# header\n10.0, 0.0, 0.0, 10.0\n").unwrap();

        let missing = dir.path().join("missing.bmp");
        match load_map(&missing, &bounds) {
            Err(MapperError::ResourceNotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected ResourceNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_roundtrip_through_bmp() -> Result<()> {
        let dir = TempDir::new().unwrap();

        let bounds = BoundingBox::new(10.0, 0.0, 0.0, 10.0)?;
        let mut raster = GeoRaster::new(8, 8, bounds);
        raster.set_pixel(1, 2, [200, 100, 50, 255]);

        let image_path = dir.path().join("map.bmp");
        save_map(&raster, &image_path)?;

        let bounds_path = dir.path().join("bounds.txt");
        let mut f = std::fs::File::create(&bounds_path)?;
        writeln!(f, "# tl_lat, tl_lon, br_lat, br_lon")?;
        writeln!(f, "10.0, 0.0, 0.0, 10.0")?;

        let loaded = load_map(&image_path, &bounds_path)?;
        assert_eq!(loaded.width(), 8);
        assert_eq!(loaded.height(), 8);
        // BMP carries no alpha; compare the color channels only.
        assert_eq!(loaded.pixel(1, 2)[..3], [200, 100, 50]);

        Ok(())
    }
}
