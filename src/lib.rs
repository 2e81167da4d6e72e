pub mod analyzers;
pub mod cli;
pub mod error;
pub mod models;
pub mod raster;
pub mod readers;
pub mod renderers;
pub mod utils;
pub mod writers;

pub use error::{MapperError, Result};
pub use models::Version;
