use std::fs;
use std::path::Path;

use crate::{MAX_NAME_LEN, MAX_STATIONS, RError, RResult};

// ------------------------------------------------------------------------------------------------
// --- Station
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    ordinal: usize,
    name: String,
}

impl Station {
    pub fn new(ordinal: usize, name: String) -> Self {
        Self { ordinal, name }
    }

    // Getters/Setters

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

// ------------------------------------------------------------------------------------------------
// --- StationCatalog
// ------------------------------------------------------------------------------------------------

/// The ordered, immutable list of stations on the line. Stations are addressed by their
/// 1-based ordinal.
#[derive(Debug, Clone)]
pub struct StationCatalog {
    stations: Vec<Station>,
}

impl StationCatalog {
    /// Builds a catalog from station names in line order.
    pub fn new<I, S>(names: I) -> RResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut stations = Vec::new();

        for name in names {
            let name = name.into();
            let ordinal = stations.len() + 1;

            if ordinal > MAX_STATIONS {
                return Err(RError::CatalogOverflow);
            }
            if name.chars().count() > MAX_NAME_LEN
                || name.contains('|')
                || name.chars().any(char::is_control)
            {
                return Err(RError::InvalidStationName { ordinal, name });
            }

            stations.push(Station::new(ordinal, name));
        }

        if stations.is_empty() {
            return Err(RError::EmptyCatalog);
        }

        Ok(Self { stations })
    }

    /// Loads the catalog from a text file holding one station name per line.
    /// Blank lines are skipped.
    pub fn load(path: impl AsRef<Path>) -> RResult<Self> {
        let path = path.as_ref();
        log::info!("Loading stations from {}...", path.display());

        let content = fs::read_to_string(path).map_err(|source| RError::CatalogUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(&content)?;
        log::info!("{} stations loaded", catalog.len());
        Ok(catalog)
    }

    pub fn parse(content: &str) -> RResult<Self> {
        Self::new(
            content
                .lines()
                .map(|line| line.trim_end_matches('\r'))
                .filter(|line| !line.trim().is_empty()),
        )
    }

    // Functions

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn contains(&self, ordinal: usize) -> bool {
        (1..=self.len()).contains(&ordinal)
    }

    pub fn get(&self, ordinal: usize) -> Option<&Station> {
        ordinal
            .checked_sub(1)
            .and_then(|index| self.stations.get(index))
    }

    /// Name of the station at `ordinal`. Callers must pass a validated ordinal.
    pub fn name_of(&self, ordinal: usize) -> &str {
        self.get(ordinal).map_or("?", Station::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }
}
