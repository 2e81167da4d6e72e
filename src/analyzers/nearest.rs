use crate::error::{MapperError, Result};
use crate::models::{Station, StationCatalog};

/// Planar Euclidean distance over raw degree pairs:
/// `sqrt((lat1-lat2)^2 + (lon1-lon2)^2)`.
///
/// The name promises kilometres but the value is unitless degree-distance;
/// there is no spherical correction and no degrees-to-km scaling. The
/// mismatch is kept intentionally for API compatibility with the original
/// library. For ranking nearby stations the two metrics agree on small
/// regions, which is the only use this crate puts it to.
pub fn distance_in_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    ((lat1 - lat2).powi(2) + (lon1 - lon2).powi(2)).sqrt()
}

/// Find the station closest to `(lat, lon)` under [`distance_in_km`].
///
/// Single pass over the catalog; strict `<` comparison means the first
/// station achieving the minimum distance wins ties. The returned station is
/// a clone together with its distance, so the caller's result is independent
/// of the catalog's lifetime. An empty catalog is an explicit
/// [`MapperError::EmptyCatalog`] error.
pub fn nearest_station(catalog: &StationCatalog, lat: f64, lon: f64) -> Result<(Station, f64)> {
    let mut best: Option<(&Station, f64)> = None;

    for station in catalog {
        let dist = distance_in_km(station.lat, station.lon, lat, lon);
        match best {
            Some((_, min)) if dist >= min => {}
            _ => best = Some((station, dist)),
        }
    }

    best.map(|(station, dist)| (station.clone(), dist))
        .ok_or(MapperError::EmptyCatalog)
}
