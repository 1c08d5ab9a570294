//! Error types emitted by the Hangspot CLI.
//!
//! Validation failures (missing or malformed arguments) are reported
//! before any upstream request is issued; upstream failures surface as a
//! single diagnostic line and a non-zero exit.

use hangspot_curated::DatasetError;
use hangspot_data::{ClientBuildError, GeocodeError, VenueSourceError};
use thiserror::Error;

/// Errors emitted by the Hangspot CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// A required option was not supplied.
    #[error("missing required --{field}")]
    MissingArgument {
        /// The flag that must be set.
        field: &'static str,
    },
    /// An option value could not be parsed.
    #[error("invalid --{field}: {message}")]
    InvalidArgument {
        /// The offending flag.
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },
    /// An upstream HTTP client could not be constructed.
    #[error("failed to build an upstream client: {0}")]
    BuildClient(#[from] ClientBuildError),
    /// Geocoding the requested location failed.
    #[error("geocoding failed: {0}")]
    Geocode(#[from] GeocodeError),
    /// Fetching candidate venues failed.
    #[error("fetching candidate venues failed: {0}")]
    Venues(#[from] VenueSourceError),
    /// The curated dataset could not be loaded.
    #[error("loading the curated dataset failed: {0}")]
    Dataset(#[from] DatasetError),
    /// The response could not be serialized.
    #[error("failed to serialize the response: {0}")]
    SerializeResponse(#[source] serde_json::Error),
}
