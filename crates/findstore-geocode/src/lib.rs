pub mod client;
pub mod error;
pub mod types;

use std::future::Future;

use findstore_core::Coordinate;

pub use client::GoogleGeocoder;
pub use error::GeocodeError;

/// Resolves a free-text location into a coordinate.
///
/// `Ok(None)` means the service answered but produced no usable coordinate
/// (unknown place, rejected credentials, malformed reply). Connectivity
/// failures surface as [`GeocodeError::Unreachable`].
pub trait Geocoder {
    fn resolve(
        &self,
        location: &str,
    ) -> impl Future<Output = Result<Option<Coordinate>, GeocodeError>> + Send;
}
