//! Provider clients for the Hangspot engine.
//!
//! Everything here talks to the outside world: Nominatim for geocoding and
//! reverse geocoding, Overpass for candidate venues, plus the cleaning
//! stage that turns raw geodata elements into core
//! [`Place`](hangspot_core::Place) values and the concurrent address
//! enrichment over ranked results. The core engine stays pure; these
//! clients are injected behind small async traits so tests can substitute
//! stubs.

use thiserror::Error;

pub mod clean;
pub mod enrich;
pub mod nominatim;
pub mod overpass;

pub use clean::clean_elements;
pub use enrich::{ADDRESS_UNAVAILABLE, address_cache_key, enrich_addresses};
pub use nominatim::{
    DEFAULT_NOMINATIM_BASE_URL, GeocodeError, Geocoder, NominatimClient, NominatimConfig,
    ReverseGeocoder,
};
pub use overpass::{
    DEFAULT_OVERPASS_BASE_URL, DEFAULT_SEARCH_RADIUS_M, OverpassClient, OverpassConfig,
    VenueSource, VenueSourceError,
};

/// Default user agent sent with upstream requests.
pub const DEFAULT_USER_AGENT: &str = "hangspot/0.1";

/// Default request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while constructing an HTTP client.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
