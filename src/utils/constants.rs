/// Marker geometry: offsets span `[-MARKER_EXTENT, MARKER_EXTENT)` on both
/// axes, a 10x10 neighborhood biased toward the lower-right.
pub const MARKER_EXTENT: i64 = 5;

/// Fixed blend alpha for marker pixels; low enough that overlapping markers
/// read as denser color.
pub const MARKER_ALPHA: u8 = 32;

/// Bytes per RGBA pixel.
pub const RGBA_CHANNELS: usize = 4;
