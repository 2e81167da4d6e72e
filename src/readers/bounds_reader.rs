use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{MapperError, Result};
use crate::raster::BoundingBox;

/// Read a bounding-box config file.
///
/// The first line is a header or comment and is ignored. The second line
/// carries `top_left_lat, top_left_lon, bottom_right_lat, bottom_right_lon`
/// as comma-separated floating point values.
pub fn read_bounds(path: &Path) -> Result<BoundingBox> {
    if !path.exists() {
        return Err(MapperError::ResourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    // Header line
    lines.next().transpose()?;

    let line = lines.next().transpose()?.ok_or_else(|| {
        MapperError::InvalidFormat(format!(
            "bounding box line missing in {}",
            path.display()
        ))
    })?;

    parse_bounds_line(&line)
}

fn parse_bounds_line(line: &str) -> Result<BoundingBox> {
    let parts: Vec<&str> = line.split(',').map(|s| s.trim()).collect();
    if parts.len() != 4 {
        return Err(MapperError::InvalidFormat(format!(
            "expected 4 comma-separated bounding box values, got {}",
            parts.len()
        )));
    }

    let mut values = [0.0_f64; 4];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part.parse::<f64>().map_err(|_| {
            MapperError::InvalidCoordinate(format!("invalid bounding box value: '{}'", part))
        })?;
    }

    BoundingBox::new(values[0], values[1], values[2], values[3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_bounds_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "# tl_lat, tl_lon, br_lat, br_lon")?;
        writeln!(temp_file, "61.0, -8.0, 49.5, 2.0")?;

        let bounds = read_bounds(temp_file.path())?;
        assert_eq!(bounds.top_left_lat, 61.0);
        assert_eq!(bounds.top_left_lon, -8.0);
        assert_eq!(bounds.bottom_right_lat, 49.5);
        assert_eq!(bounds.bottom_right_lon, 2.0);

        Ok(())
    }

    #[test]
    fn test_malformed_value_rejected() {
        assert!(matches!(
            parse_bounds_line("61.0, west, 49.5, 2.0"),
            Err(MapperError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_wrong_field_count_rejected() {
        assert!(matches!(
            parse_bounds_line("61.0, -8.0, 49.5"),
            Err(MapperError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_degenerate_box_rejected() {
        assert!(matches!(
            parse_bounds_line("61.0, 2.0, 49.5, 2.0"),
            Err(MapperError::DegenerateBounds(_))
        ));
    }

    #[test]
    fn test_missing_second_line() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "# header only")?;

        assert!(matches!(
            read_bounds(temp_file.path()),
            Err(MapperError::InvalidFormat(_))
        ));

        Ok(())
    }
}
