//! Session-scoped mutable state: rejections and the address cache.
//!
//! The state lives for the process lifetime and is injected into the
//! ranking pipeline and the reject operation as a trait object, so it can
//! be swapped for a real store later without touching scoring logic.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Normalise a venue identifier for comparison.
///
/// Identifiers arrive as numbers from geodata and as text from callers;
/// both forms must hit the same rejection entry, so ids are compared as
/// trimmed strings.
///
/// # Examples
/// ```
/// use hangspot_core::normalise_id;
///
/// assert_eq!(normalise_id(" 42 "), "42");
/// assert_eq!(normalise_id("42"), 42_u64.to_string());
/// ```
pub fn normalise_id(id: &str) -> String {
    id.trim().to_owned()
}

/// Mutable per-session state shared across requests.
///
/// Implementations must be thread-safe: reject and rank calls can
/// interleave when the host runtime is multi-threaded.
pub trait Session: Send + Sync {
    /// Whether the venue id has been rejected this session.
    fn is_rejected(&self, id: &str) -> bool;

    /// Add a venue id to the rejection set. Idempotent.
    fn reject(&self, id: &str);

    /// Number of distinct rejected venue ids.
    fn rejected_count(&self) -> usize;

    /// Look up a cached reverse-geocoded address by `"lat,lng"` key.
    fn cached_address(&self, key: &str) -> Option<String>;

    /// Cache a resolved address under its `"lat,lng"` key.
    fn cache_address(&self, key: &str, address: &str);
}

/// In-memory [`Session`] guarded by mutexes.
///
/// Unbounded: nothing is evicted until the process restarts.
///
/// # Examples
/// ```
/// use hangspot_core::{InMemorySession, Session};
///
/// let session = InMemorySession::new();
/// session.reject("42");
/// session.reject("42");
/// assert!(session.is_rejected(" 42 "));
/// assert_eq!(session.rejected_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemorySession {
    rejected: Mutex<HashSet<String>>,
    addresses: Mutex<HashMap<String, String>>,
}

impl InMemorySession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Session for InMemorySession {
    fn is_rejected(&self, id: &str) -> bool {
        let Ok(rejected) = self.rejected.lock() else {
            return false;
        };
        rejected.contains(&normalise_id(id))
    }

    fn reject(&self, id: &str) {
        let Ok(mut rejected) = self.rejected.lock() else {
            return;
        };
        rejected.insert(normalise_id(id));
    }

    fn rejected_count(&self) -> usize {
        let Ok(rejected) = self.rejected.lock() else {
            return 0;
        };
        rejected.len()
    }

    fn cached_address(&self, key: &str) -> Option<String> {
        let Ok(addresses) = self.addresses.lock() else {
            return None;
        };
        addresses.get(key).cloned()
    }

    fn cache_address(&self, key: &str, address: &str) {
        let Ok(mut addresses) = self.addresses.lock() else {
            return;
        };
        addresses.insert(key.to_owned(), address.to_owned());
    }
}
