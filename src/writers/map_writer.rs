use std::path::Path;

use crate::error::Result;
use crate::raster::GeoRaster;

/// Encode the raster's RGBA buffer to an image file. The format follows the
/// output extension (BMP and PNG are the supported targets). Parent
/// directories are created as needed.
pub fn save_map(raster: &GeoRaster, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image::save_buffer(
        path,
        raster.pixels(),
        raster.width(),
        raster.height(),
        image::ColorType::Rgba8,
    )?;

    Ok(())
}
