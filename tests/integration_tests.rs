use std::io::Write;

use station_mapper::analyzers::nearest_station;
use station_mapper::models::{Station, Version};
use station_mapper::raster::{BoundingBox, GeoRaster};
use station_mapper::readers::{load_map, StationReader};
use station_mapper::renderers::{MarkerRenderer, StampSummary};
use station_mapper::writers::save_map;
use tempfile::TempDir;

#[test]
fn test_render_pipeline() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    // Map covering a 10x10 degree box: tl = (10, 0), br = (0, 10)
    let bounds_path = temp_dir.path().join("bounds.txt");
    let mut bounds_file = std::fs::File::create(&bounds_path).unwrap();
    writeln!(bounds_file, "# tl_lat, tl_lon, br_lat, br_lon").unwrap();
    writeln!(bounds_file, "10.0, 0.0, 0.0, 10.0").unwrap();

    let map_path = temp_dir.path().join("map.bmp");
    let bounds = BoundingBox::new(10.0, 0.0, 0.0, 10.0).unwrap();
    save_map(&GeoRaster::new(100, 100, bounds), &map_path).unwrap();

    let stations_path = temp_dir.path().join("stations.csv");
    let mut stations_file = std::fs::File::create(&stations_path).unwrap();
    writeln!(stations_file, "id,name,lat,lon").unwrap();
    writeln!(stations_file, "1,Inland Station,5.0,5.0").unwrap();
    writeln!(stations_file, "2,Far Away Station,60.0,60.0").unwrap();

    let catalog = StationReader::new().read_stations(&stations_path).unwrap();
    assert_eq!(catalog.len(), 2);

    let mut raster = load_map(&map_path, &bounds_path).unwrap();
    let summary = MarkerRenderer::new([255, 0, 0]).stamp_all(&mut raster, &catalog);
    assert_eq!(summary, StampSummary { drawn: 1, skipped: 1 });

    // (5.0, 5.0) projects to pixel (50, 49); the blend adds 32 red there
    assert_eq!(raster.pixel(50, 49)[0], 32);

    let output_path = temp_dir.path().join("annotated.bmp");
    save_map(&raster, &output_path).unwrap();
    assert!(output_path.exists());

    let reloaded = load_map(&output_path, &bounds_path).unwrap();
    assert_eq!(reloaded.pixel(50, 49)[0], 32);
}

#[test]
fn test_nearest_station_from_csv() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let stations_path = temp_dir.path().join("stations.csv");
    let mut stations_file = std::fs::File::create(&stations_path).unwrap();
    writeln!(stations_file, "id,name,lat,lon").unwrap();
    writeln!(stations_file, "10,Alpha,0.0,0.0").unwrap();
    writeln!(stations_file, "20,Beta,10.0,10.0").unwrap();

    let catalog = StationReader::new().read_stations(&stations_path).unwrap();
    let (station, distance) = nearest_station(&catalog, 1.0, 1.0).unwrap();

    assert_eq!(station.id, 10);
    assert_eq!(station.name, "Alpha");
    assert!((distance - 2.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_lenient_parse_keeps_short_rows() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let stations_path = temp_dir.path().join("stations.csv");
    let mut stations_file = std::fs::File::create(&stations_path).unwrap();
    writeln!(stations_file, "id,name,lat,lon").unwrap();
    writeln!(stations_file, "7,Name Only").unwrap();

    let catalog = StationReader::new().read_stations(&stations_path).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.get(0),
        Some(&Station::new(7, "Name Only".to_string(), 0.0, 0.0))
    );
}

#[test]
fn test_library_version() {
    let version = Version::CURRENT;
    assert_eq!((version.major, version.minor, version.patch), (1, 0, 2));
}
