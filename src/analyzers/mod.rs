pub mod nearest;

pub use nearest::{distance_in_km, nearest_station};
