pub mod catalog;
pub mod station;
pub mod version;

pub use catalog::StationCatalog;
pub use station::Station;
pub use version::Version;
