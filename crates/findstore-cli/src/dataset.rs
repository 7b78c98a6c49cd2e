//! Where the store dataset comes from.
//!
//! The CSV under `data/` is compiled into the binary so the tool finds it
//! regardless of the working directory. `FIND_STORE_DATA_PATH` swaps in a
//! file on disk.

use std::path::PathBuf;

use findstore_core::{AppConfig, DatasetError, StoreRecord};

const BUNDLED_DATASET: &str = include_str!("../data/store_locations.csv");

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DatasetSource {
    Bundled,
    File(PathBuf),
}

impl DatasetSource {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        config
            .data_path
            .clone()
            .map_or(DatasetSource::Bundled, DatasetSource::File)
    }

    pub(crate) fn load(&self) -> Result<Vec<StoreRecord>, DatasetError> {
        match self {
            DatasetSource::Bundled => findstore_core::parse_stores(BUNDLED_DATASET),
            DatasetSource::File(path) => {
                tracing::debug!(path = %path.display(), "loading store dataset from file");
                findstore_core::load_stores(path)
            }
        }
    }
}
