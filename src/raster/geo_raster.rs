use crate::error::{MapperError, Result};
use crate::raster::BoundingBox;
use crate::utils::constants::RGBA_CHANNELS as CHANNELS;

/// Georeferenced RGBA raster. Owns its pixel buffer (row-major, origin
/// top-left, four bytes per pixel) together with the lat/lon bounding box the
/// image covers.
#[derive(Debug, Clone)]
pub struct GeoRaster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    bounds: BoundingBox,
}

impl GeoRaster {
    /// Create a raster with a zeroed (transparent black) pixel buffer.
    pub fn new(width: u32, height: u32, bounds: BoundingBox) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * CHANNELS],
            bounds,
        }
    }

    /// Wrap an existing RGBA buffer, checking that its length matches the
    /// declared dimensions.
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32, bounds: BoundingBox) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(MapperError::InvalidFormat(format!(
                "pixel buffer length {} does not match {}x{} RGBA raster (expected {})",
                pixels.len(),
                width,
                height,
                expected
            )));
        }

        Ok(Self {
            width,
            height,
            pixels,
            bounds,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Byte offset of pixel (x, y). The only place that knows the row-major
    /// buffer layout.
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Project a geographic coordinate onto the pixel grid with the linear
    /// georeferencing transform:
    ///
    /// ```text
    /// x = width  * (lon - br_lon) / (tl_lon - br_lon)
    /// y = height - height * (lat - br_lat) / (tl_lat - br_lat) - 1
    /// ```
    ///
    /// Both values are truncated toward zero. Coordinates landing outside
    /// `[0, width) x [0, height)` fail with [`MapperError::OutOfBounds`]; the
    /// upper y bound is strict (a `y == height` write would land one row past
    /// the buffer).
    pub fn project_to_pixel(&self, lat: f64, lon: f64) -> Result<(u32, u32)> {
        let b = &self.bounds;
        let width = self.width as f64;
        let height = self.height as f64;

        let x = (width * (lon - b.bottom_right_lon) / b.lon_extent()) as i64;
        let y = (height - height * (lat - b.bottom_right_lat) / b.lat_extent() - 1.0) as i64;

        if x < 0 || x >= self.width as i64 || y < 0 || y >= self.height as i64 {
            return Err(MapperError::OutOfBounds { lat, lon });
        }

        Ok((x as u32, y as u32))
    }

    /// Overwrite all four channel bytes at (x, y). Callers validate bounds
    /// first, normally via [`GeoRaster::project_to_pixel`]; an out-of-range
    /// pixel is a programmer error and panics on the slice index.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.pixels[i..i + CHANNELS].copy_from_slice(&rgba);
    }

    /// Additive blend of an RGB color into (x, y): each color channel gains
    /// `component * alpha / 255` (integer truncation). The alpha channel is
    /// deliberately left untouched; markers tint the map without changing its
    /// transparency. No clamping is applied, so repeated blends wrap around
    /// the byte range. That wraparound is reproducible and accepted.
    pub fn blend_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3], alpha: u8) {
        let i = self.offset(x, y);
        for (c, component) in rgb.iter().enumerate() {
            let add = (*component as u16 * alpha as u16 / 255) as u8;
            self.pixels[i + c] = self.pixels[i + c].wrapping_add(add);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }
}
