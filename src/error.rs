use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MapperError>;

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Resource not found: {}", .path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("Coordinate ({lat}, {lon}) projects outside the raster")]
    OutOfBounds { lat: f64, lon: f64 },

    #[error("Station catalog is empty")]
    EmptyCatalog,

    #[error("Degenerate bounding box: {0}")]
    DegenerateBounds(String),

    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
