use serde::{Deserialize, Serialize};
use validator::Validate;

/// Maximum station name length in bytes. Longer names are truncated on a
/// character boundary when the station is constructed.
pub const MAX_NAME_BYTES: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Station {
    pub id: u32,

    #[validate(length(max = 255))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
}

impl Station {
    pub fn new(id: u32, name: String, lat: f64, lon: f64) -> Self {
        Self {
            id,
            name: truncate_name(name),
            lat,
            lon,
        }
    }
}

/// Truncate a station name to [`MAX_NAME_BYTES`] without splitting a
/// multi-byte character.
fn truncate_name(name: String) -> String {
    if name.len() <= MAX_NAME_BYTES {
        return name;
    }
    let mut cut = MAX_NAME_BYTES;
    while !name.is_char_boundary(cut) {
        cut -= 1;
    }
    let mut name = name;
    name.truncate(cut);
    name
}
