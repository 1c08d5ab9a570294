//! The built-in curated dataset.
#![forbid(unsafe_code)]

use thiserror::Error;

use crate::types::CuratedPlace;

/// The curated venue list shipped with the crate.
const BUILTIN_PLACES: &str = include_str!("data/places.json");

/// Errors raised when loading a curated dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The JSON payload did not match the dataset schema.
    #[error("failed to parse curated places dataset")]
    Parse(#[from] serde_json::Error),
}

/// Load the built-in curated venues.
///
/// # Errors
/// Returns [`DatasetError::Parse`] when the embedded JSON is malformed;
/// with the shipped dataset this only happens if the file is edited
/// inconsistently with the schema.
pub fn builtin_places() -> Result<Vec<CuratedPlace>, DatasetError> {
    parse_places(BUILTIN_PLACES)
}

/// Parse a curated dataset from a JSON string.
///
/// # Errors
/// Returns [`DatasetError::Parse`] when the payload is not a JSON array of
/// curated places.
pub fn parse_places(json: &str) -> Result<Vec<CuratedPlace>, DatasetError> {
    Ok(serde_json::from_str(json)?)
}
