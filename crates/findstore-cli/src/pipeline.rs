//! The geocode, search, render sequence behind a single CLI invocation.

use findstore_core::{
    nearest_store, render_json, render_text, DatasetError, DistanceUnit, SearchResult, StoreRecord,
};
use findstore_geocode::Geocoder;
use thiserror::Error;

use crate::OutputFormat;

/// User-facing failures. Each one ends the run with its message on stderr.
#[derive(Debug, Error)]
pub(crate) enum FindStoreError {
    #[error("Please provide a starting address or zip code.")]
    MissingInput,

    #[error(
        "There was an issue connecting to the Google Maps API. Please check \
         network status and try again."
    )]
    GeocodingUnreachable,

    #[error(
        "The Google Maps API did not return a result. Please check your API \
         credentials and the provided address or zip code before trying again."
    )]
    GeocodingNoResult,

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Render(#[from] serde_json::Error),
}

/// Picks the location to geocode. A non-blank address wins over the zip code.
pub(crate) fn starting_location<'a>(
    address: Option<&'a str>,
    zip: Option<&'a str>,
) -> Result<&'a str, FindStoreError> {
    [address, zip]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .ok_or(FindStoreError::MissingInput)
}

/// Geocodes `location`, then scans the dataset produced by `load_stores`.
///
/// `load_stores` is only invoked once a coordinate is in hand.
pub(crate) async fn find_nearest_store<G, L>(
    geocoder: &G,
    location: &str,
    load_stores: L,
) -> Result<SearchResult, FindStoreError>
where
    G: Geocoder,
    L: FnOnce() -> Result<Vec<StoreRecord>, DatasetError>,
{
    let origin = match geocoder.resolve(location).await {
        Ok(Some(origin)) => origin,
        Ok(None) => return Err(FindStoreError::GeocodingNoResult),
        Err(e) => {
            tracing::debug!(error = %e, "geocoding request failed");
            return Err(FindStoreError::GeocodingUnreachable);
        }
    };

    let stores = load_stores()?;
    let result = nearest_store(origin, &stores).ok_or(DatasetError::Empty)?;
    tracing::info!(
        store = %result.store.name,
        distance_miles = result.distance_miles,
        "found nearest store"
    );
    Ok(result)
}

pub(crate) fn render(
    result: &SearchResult,
    unit: DistanceUnit,
    format: OutputFormat,
) -> Result<String, FindStoreError> {
    match format {
        OutputFormat::Text => Ok(render_text(result, unit)),
        OutputFormat::Json => Ok(render_json(result, unit)?),
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
