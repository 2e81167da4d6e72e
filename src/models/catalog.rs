use serde::{Deserialize, Serialize};

use crate::models::Station;

/// Ordered collection of stations. Insertion order matches the source file,
/// and the set is fixed once loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationCatalog {
    stations: Vec<Station>,
}

impl StationCatalog {
    pub fn from_stations(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Station> {
        self.stations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }
}

impl<'a> IntoIterator for &'a StationCatalog {
    type Item = &'a Station;
    type IntoIter = std::slice::Iter<'a, Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}

impl FromIterator<Station> for StationCatalog {
    fn from_iter<I: IntoIterator<Item = Station>>(iter: I) -> Self {
        Self {
            stations: iter.into_iter().collect(),
        }
    }
}
