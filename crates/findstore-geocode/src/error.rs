use thiserror::Error;

/// Errors returned by the geocoding client.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The request never produced a response: DNS, connect, TLS or timeout.
    #[error("geocoding service unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The underlying `reqwest::Client` could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid geocoder URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
