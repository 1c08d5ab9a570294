//! Nominatim geocoding and reverse geocoding.
//!
//! Search resolves a free-text "area, city" description to a single
//! best-match coordinate; an empty result set is a miss, not an error.
//! Reverse resolves a coordinate to a display address and is always
//! treated as best-effort by callers.

use std::time::Duration;

use async_trait::async_trait;
use geo::Coord;
use serde::Deserialize;
use thiserror::Error;

use crate::{ClientBuildError, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Default base URL for the public Nominatim instance.
pub const DEFAULT_NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Errors from geocoding calls.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The request exceeded the configured timeout.
    #[error("geocoding request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with an error status.
    #[error("geocoding request to {url} failed with HTTP {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description from the HTTP layer.
        message: String,
    },
    /// The request never completed.
    #[error("geocoding request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Error description from the HTTP layer.
        message: String,
    },
    /// The response body was not in the expected shape.
    #[error("failed to parse geocoder response: {message}")]
    Parse {
        /// What went wrong.
        message: String,
    },
}

/// Resolve a free-text place description to a coordinate.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Geocode "area, city". `Ok(None)` means the geocoder found nothing.
    async fn geocode(&self, city: &str, area: &str) -> Result<Option<Coord<f64>>, GeocodeError>;
}

/// Resolve a coordinate to a human-readable address.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Reverse geocode a WGS84 coordinate (`x = longitude`, `y = latitude`).
    async fn reverse(&self, location: Coord<f64>) -> Result<String, GeocodeError>;
}

/// Configuration for [`NominatimClient`].
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Base URL of the Nominatim service.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests. Nominatim's usage policy requires
    /// an identifying agent.
    pub user_agent: String,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NOMINATIM_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// One hit from the Nominatim search API.
///
/// Nominatim serialises coordinates as strings; parsing happens in
/// [`first_hit_coord`].
#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    pub(crate) lat: String,
    pub(crate) lon: String,
}

/// Response body from the Nominatim reverse API.
#[derive(Debug, Deserialize)]
pub(crate) struct ReverseReply {
    pub(crate) display_name: Option<String>,
}

/// Take the best-match coordinate from a search result list.
pub(crate) fn first_hit_coord(hits: Vec<SearchHit>) -> Result<Option<Coord<f64>>, GeocodeError> {
    let Some(hit) = hits.into_iter().next() else {
        return Ok(None);
    };
    let lat: f64 = hit.lat.parse().map_err(|_| GeocodeError::Parse {
        message: format!("invalid latitude '{}'", hit.lat),
    })?;
    let lon: f64 = hit.lon.parse().map_err(|_| GeocodeError::Parse {
        message: format!("invalid longitude '{}'", hit.lon),
    })?;
    Ok(Some(Coord { x: lon, y: lat }))
}

/// HTTP client for the Nominatim search and reverse APIs.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    config: NominatimConfig,
}

impl NominatimClient {
    /// Create a client against the public Nominatim instance.
    ///
    /// # Errors
    /// Returns [`ClientBuildError`] when the HTTP client fails to build.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_config(NominatimConfig::default())
    }

    /// Create a client with explicit configuration.
    ///
    /// # Errors
    /// Returns [`ClientBuildError`] when the HTTP client fails to build.
    pub fn with_config(config: NominatimConfig) -> Result<Self, ClientBuildError> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn convert_error(&self, error: &reqwest::Error, url: &str) -> GeocodeError {
        if error.is_timeout() {
            return GeocodeError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return GeocodeError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        GeocodeError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn geocode(&self, city: &str, area: &str) -> Result<Option<Coord<f64>>, GeocodeError> {
        let url = self.endpoint("search");
        let query = format!("{area}, {city}");

        let response = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("q", query.as_str())])
            .send()
            .await
            .map_err(|err| self.convert_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_error(&err, &url))?;

        let hits: Vec<SearchHit> = response.json().await.map_err(|err| GeocodeError::Parse {
            message: err.to_string(),
        })?;

        first_hit_coord(hits)
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    async fn reverse(&self, location: Coord<f64>) -> Result<String, GeocodeError> {
        let url = self.endpoint("reverse");
        let lat = format!("{:.6}", location.y);
        let lon = format!("{:.6}", location.x);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "json"),
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
            ])
            .send()
            .await
            .map_err(|err| self.convert_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_error(&err, &url))?;

        let reply: ReverseReply = response.json().await.map_err(|err| GeocodeError::Parse {
            message: err.to_string(),
        })?;

        reply.display_name.ok_or_else(|| GeocodeError::Parse {
            message: "reverse geocoder response missing display_name".to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn deserialise_search_hits() {
        let json = r#"[
            {"lat": "13.0500", "lon": "80.2824", "display_name": "Besant Nagar, Chennai"},
            {"lat": "12.9000", "lon": "80.1000", "display_name": "Elsewhere"}
        ]"#;

        let hits: Vec<SearchHit> = serde_json::from_str(json).expect("should deserialise");
        let coord = first_hit_coord(hits).expect("should parse").expect("should hit");

        assert!((coord.y - 13.05).abs() < 1e-9);
        assert!((coord.x - 80.2824).abs() < 1e-9);
    }

    #[rstest]
    fn empty_search_results_are_a_miss_not_an_error() {
        let hits: Vec<SearchHit> = serde_json::from_str("[]").expect("should deserialise");
        assert!(first_hit_coord(hits).expect("should parse").is_none());
    }

    #[rstest]
    fn malformed_coordinates_are_a_parse_error() {
        let hits = vec![SearchHit {
            lat: "not-a-number".to_owned(),
            lon: "80.0".to_owned(),
        }];

        let err = first_hit_coord(hits).expect_err("should fail");
        assert!(matches!(err, GeocodeError::Parse { .. }));
    }

    #[rstest]
    fn deserialise_reverse_reply() {
        let json = r#"{"display_name": "1, Beach Road, Chennai", "place_id": 12345}"#;
        let reply: ReverseReply = serde_json::from_str(json).expect("should deserialise");
        assert_eq!(reply.display_name.as_deref(), Some("1, Beach Road, Chennai"));
    }

    #[rstest]
    fn endpoint_strips_trailing_slash() {
        let client = NominatimClient::with_config(NominatimConfig::new(
            "https://nominatim.example.com/",
        ))
        .expect("client should build");

        assert_eq!(
            client.endpoint("search"),
            "https://nominatim.example.com/search"
        );
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = NominatimConfig::new("https://example.com")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }
}
