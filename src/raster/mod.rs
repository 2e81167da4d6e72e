pub mod bounds;
pub mod geo_raster;

pub use bounds::BoundingBox;
pub use geo_raster::GeoRaster;
