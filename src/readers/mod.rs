pub mod bounds_reader;
pub mod map_reader;
pub mod station_reader;

pub use bounds_reader::read_bounds;
pub use map_reader::load_map;
pub use station_reader::StationReader;
