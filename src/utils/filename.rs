use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate the default output filename with format:
/// output/station-map-{YYMMDD}.bmp
pub fn generate_default_map_filename() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("station-map-{:02}{:02}{:02}.bmp", year, month, day);
    PathBuf::from("output").join(filename)
}
