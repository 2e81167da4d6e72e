pub mod map_writer;

pub use map_writer::save_map;
