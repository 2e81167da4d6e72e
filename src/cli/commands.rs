use serde::Serialize;

use crate::cli::args::{Cli, Commands};
use crate::error::{MapperError, Result};
use crate::models::{Station, Version};
use crate::readers::{load_map, StationReader};
use crate::renderers::MarkerRenderer;
use crate::utils::filename::generate_default_map_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::save_map;

#[derive(Serialize)]
struct NearestReport {
    station: Station,
    /// Planar degree-distance, see `analyzers::distance_in_km`
    distance: f64,
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            map,
            bounds,
            stations,
            output,
            color,
        } => {
            let color = parse_color(&color)?;

            let catalog = StationReader::new().read_stations(&stations)?;
            println!("Loaded {} stations from {}", catalog.len(), stations.display());

            let mut raster = load_map(&map, &bounds)?;
            println!(
                "Loaded {}x{} map covering ({}, {}) to ({}, {})",
                raster.width(),
                raster.height(),
                raster.bounds().top_left_lat,
                raster.bounds().top_left_lon,
                raster.bounds().bottom_right_lat,
                raster.bounds().bottom_right_lon,
            );

            let renderer = MarkerRenderer::new(color);
            let progress = ProgressReporter::new(catalog.len() as u64, "Stamping markers...", false);

            let mut summary = crate::renderers::StampSummary::default();
            for station in &catalog {
                if renderer.stamp(&mut raster, station.lat, station.lon) {
                    summary.drawn += 1;
                } else {
                    summary.skipped += 1;
                }
                progress.increment(1);
            }
            progress.finish_with_message(&format!(
                "Stamped {} markers ({} outside the map)",
                summary.drawn, summary.skipped
            ));

            let output = output.unwrap_or_else(generate_default_map_filename);
            save_map(&raster, &output)?;
            println!("Map written to {}", output.display());
        }

        Commands::Nearest {
            stations,
            lat,
            lon,
            json,
        } => {
            let catalog = StationReader::new().read_stations(&stations)?;
            let (station, distance) = crate::analyzers::nearest_station(&catalog, lat, lon)?;

            if json {
                let report = NearestReport { station, distance };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "Nearest station to ({}, {}): {} (id {}) at ({}, {}), distance {:.4} degree units",
                    lat, lon, station.name, station.id, station.lat, station.lon, distance
                );
            }
        }

        Commands::Version => {
            println!("station-mapper library {}", Version::CURRENT);
        }
    }

    Ok(())
}

/// Parse an `R,G,B` byte triple from the command line.
fn parse_color(value: &str) -> Result<[u8; 3]> {
    let parts: Vec<&str> = value.split(',').map(|s| s.trim()).collect();
    if parts.len() != 3 {
        return Err(MapperError::InvalidFormat(format!(
            "expected color as R,G,B, got '{}'",
            value
        )));
    }

    let mut color = [0u8; 3];
    for (slot, part) in color.iter_mut().zip(&parts) {
        *slot = part.parse::<u8>().map_err(|_| {
            MapperError::InvalidFormat(format!("invalid color component: '{}'", part))
        })?;
    }

    Ok(color)
}
