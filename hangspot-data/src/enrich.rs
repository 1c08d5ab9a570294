//! Concurrent address enrichment for ranked results.
//!
//! Each of the top results gets a best-effort street address: the session
//! cache is consulted first, then the remaining lookups fan out
//! concurrently and are joined before the response is built. A failed
//! lookup degrades that one result to a placeholder; it never fails the
//! request.

use futures_util::future;
use geo::Coord;
use hangspot_core::{ScoredPlace, Session};

use crate::nominatim::ReverseGeocoder;

/// Placeholder address used when reverse geocoding fails.
pub const ADDRESS_UNAVAILABLE: &str = "Address unavailable";

/// Session cache key for a coordinate pair, as `"lat,lng"`.
///
/// Six decimal places is roughly 0.1 m of precision, comfortably finer
/// than geodata coordinates vary.
pub fn address_cache_key(lat: f64, lng: f64) -> String {
    format!("{lat:.6},{lng:.6}")
}

/// Fill in `address` for every result, from cache or concurrent lookups.
pub async fn enrich_addresses(
    results: &mut [ScoredPlace],
    reverse: &dyn ReverseGeocoder,
    session: &dyn Session,
) {
    let mut pending: Vec<(usize, String, Coord<f64>)> = Vec::new();
    for (index, place) in results.iter_mut().enumerate() {
        let key = address_cache_key(place.lat, place.lng);
        if let Some(address) = session.cached_address(&key) {
            place.address = Some(address);
        } else {
            let location = Coord {
                x: place.lng,
                y: place.lat,
            };
            pending.push((index, key, location));
        }
    }

    let lookups = pending
        .iter()
        .map(|(_, _, location)| reverse.reverse(*location));
    let outcomes = future::join_all(lookups).await;

    for ((index, key, _), outcome) in pending.into_iter().zip(outcomes) {
        let address = match outcome {
            Ok(resolved) => {
                session.cache_address(&key, &resolved);
                resolved
            }
            Err(error) => {
                log::warn!("reverse geocoding failed, using placeholder: {error}");
                ADDRESS_UNAVAILABLE.to_owned()
            }
        };
        if let Some(place) = results.get_mut(index) {
            place.address = Some(address);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nominatim::GeocodeError;
    use async_trait::async_trait;
    use hangspot_core::{Category, InMemorySession};
    use std::sync::Mutex;

    /// Stub reverse geocoder that records how many calls it served.
    struct ScriptedReverse {
        calls: Mutex<u32>,
        fail: bool,
    }

    impl ScriptedReverse {
        fn new(fail: bool) -> Self {
            Self {
                calls: Mutex::new(0),
                fail,
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().expect("calls lock should not be poisoned")
        }
    }

    #[async_trait]
    impl ReverseGeocoder for ScriptedReverse {
        async fn reverse(&self, location: Coord<f64>) -> Result<String, GeocodeError> {
            let mut calls = self.calls.lock().expect("calls lock should not be poisoned");
            *calls += 1;
            if self.fail {
                Err(GeocodeError::Parse {
                    message: "scripted failure".to_owned(),
                })
            } else {
                Ok(format!("{:.2} Street", location.y))
            }
        }
    }

    fn scored(id: u64, lat: f64, lng: f64) -> ScoredPlace {
        ScoredPlace {
            id,
            name: format!("Venue {id}"),
            category: Category::Cafe,
            lat,
            lng,
            opening_hours: "unavailable".to_owned(),
            popular_items: Vec::new(),
            distance_km: 0.5,
            eta_minutes: 5,
            score: 0.9,
            match_percentage: 90,
            reason: "Good for friends".to_owned(),
            rank: 1,
            address: None,
        }
    }

    #[tokio::test]
    async fn resolves_and_caches_addresses() {
        let session = InMemorySession::new();
        let reverse = ScriptedReverse::new(false);
        let mut results = vec![scored(1, 13.05, 80.28), scored(2, 13.06, 80.29)];

        enrich_addresses(&mut results, &reverse, &session).await;

        assert_eq!(reverse.calls(), 2);
        assert_eq!(results[0].address.as_deref(), Some("13.05 Street"));
        assert_eq!(
            session.cached_address(&address_cache_key(13.05, 80.28)).as_deref(),
            Some("13.05 Street")
        );
    }

    #[tokio::test]
    async fn cached_addresses_skip_the_lookup() {
        let session = InMemorySession::new();
        session.cache_address(&address_cache_key(13.05, 80.28), "Cached Street");
        let reverse = ScriptedReverse::new(false);
        let mut results = vec![scored(1, 13.05, 80.28)];

        enrich_addresses(&mut results, &reverse, &session).await;

        assert_eq!(reverse.calls(), 0);
        assert_eq!(results[0].address.as_deref(), Some("Cached Street"));
    }

    #[tokio::test]
    async fn failures_degrade_to_the_placeholder() {
        let session = InMemorySession::new();
        let reverse = ScriptedReverse::new(true);
        let mut results = vec![scored(1, 13.05, 80.28)];

        enrich_addresses(&mut results, &reverse, &session).await;

        assert_eq!(results[0].address.as_deref(), Some(ADDRESS_UNAVAILABLE));
        // Failures are not cached, so a later request can retry.
        assert!(session.cached_address(&address_cache_key(13.05, 80.28)).is_none());
    }

    #[test]
    fn cache_keys_are_lat_lng_at_six_decimals() {
        assert_eq!(address_cache_key(13.05, 80.2824), "13.050000,80.282400");
    }
}
