//! Store dataset loading.
//!
//! The dataset is a CSV file with the header
//! `Store Name,Store Location,Address,City,State,Zip Code,Latitude,Longitude,County`.
//! A leading UTF-8 byte-order mark is tolerated.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::geo::Coordinate;

const UTF8_BOM: char = '\u{feff}';

/// One row of the store dataset.
///
/// Field names serialize back to the dataset's column headers so the JSON
/// report carries the same keys as the CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    #[serde(rename = "Store Name")]
    pub name: String,
    #[serde(rename = "Store Location")]
    pub location: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Zip Code")]
    pub zip_code: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "County")]
    pub county: String,
}

impl StoreRecord {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Parse the full dataset from CSV text, preserving file order.
///
/// # Errors
///
/// Returns [`DatasetError::Csv`] on the first row that is missing a column or
/// has a non-numeric coordinate, [`DatasetError::NonFiniteCoordinate`] for a
/// `NaN` or infinite coordinate, and [`DatasetError::Empty`] when the file
/// holds a header but no rows.
pub fn parse_stores(text: &str) -> Result<Vec<StoreRecord>, DatasetError> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let stores = reader
        .deserialize::<StoreRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    if let Some((index, store)) = stores
        .iter()
        .enumerate()
        .find(|(_, s)| !(s.latitude.is_finite() && s.longitude.is_finite()))
    {
        return Err(DatasetError::NonFiniteCoordinate {
            row: index + 1,
            name: store.name.clone(),
        });
    }

    if stores.is_empty() {
        return Err(DatasetError::Empty);
    }

    tracing::debug!(count = stores.len(), "parsed store dataset");
    Ok(stores)
}

/// Read and parse the dataset at `path`.
///
/// The file is read in full and closed before parsing starts.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_stores`].
pub fn load_stores(path: &Path) -> Result<Vec<StoreRecord>, DatasetError> {
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_stores(&text)
}
