//! Overpass candidate-venue source.
//!
//! Builds the Overpass QL query for food and leisure nodes around a
//! centre point, posts it to an interpreter endpoint, and hands the raw
//! elements to the cleaning stage.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use geo::Coord;
use hangspot_core::Place;
use serde::Deserialize;
use thiserror::Error;

use crate::clean::clean_elements;
use crate::{ClientBuildError, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Default base URL for the Overpass interpreter.
pub const DEFAULT_OVERPASS_BASE_URL: &str = "https://overpass.kumi.systems";

/// Default candidate search radius in metres.
pub const DEFAULT_SEARCH_RADIUS_M: u32 = 3000;

/// Errors from the candidate-venue source.
#[derive(Debug, Error)]
pub enum VenueSourceError {
    /// The request exceeded the configured timeout.
    #[error("venue query to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with an error status.
    #[error("venue query to {url} failed with HTTP {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description from the HTTP layer.
        message: String,
    },
    /// The request never completed.
    #[error("venue query to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Error description from the HTTP layer.
        message: String,
    },
    /// The response body was not in the expected shape.
    #[error("failed to parse venue source response: {message}")]
    Parse {
        /// What went wrong.
        message: String,
    },
}

/// Fetch candidate venues around a centre point.
#[async_trait]
pub trait VenueSource: Send + Sync {
    /// Return cleaned candidate venues within `radius_m` of `center`.
    async fn venues_near(
        &self,
        center: Coord<f64>,
        radius_m: u32,
    ) -> Result<Vec<Place>, VenueSourceError>;
}

/// Configuration for [`OverpassClient`].
#[derive(Debug, Clone)]
pub struct OverpassConfig {
    /// Base URL of the Overpass service.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OVERPASS_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl OverpassConfig {
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

/// Raw Overpass response envelope.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    /// Point-of-interest elements, possibly untagged or unnamed.
    #[serde(default)]
    pub elements: Vec<RawElement>,
}

/// One raw element from Overpass, before cleaning.
#[derive(Debug, Clone, Deserialize)]
pub struct RawElement {
    /// Element identifier.
    pub id: u64,
    /// Latitude in degrees, absent for non-node elements.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude in degrees, absent for non-node elements.
    #[serde(default)]
    pub lon: Option<f64>,
    /// Free-form OSM tags.
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Build the Overpass QL query for food and leisure nodes around `center`.
pub(crate) fn build_query(center: Coord<f64>, radius_m: u32) -> String {
    let lat = center.y;
    let lon = center.x;
    format!(
        "[out:json];\n(\n  node[\"amenity\"~\"restaurant|cafe|fast_food\"](around:{radius_m},{lat},{lon});\n  node[\"leisure\"](around:{radius_m},{lat},{lon});\n);\nout body;\n"
    )
}

/// HTTP client for an Overpass interpreter.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: reqwest::Client,
    config: OverpassConfig,
}

impl OverpassClient {
    /// Create a client against the default interpreter.
    ///
    /// # Errors
    /// Returns [`ClientBuildError`] when the HTTP client fails to build.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_config(OverpassConfig::default())
    }

    /// Create a client with explicit configuration.
    ///
    /// # Errors
    /// Returns [`ClientBuildError`] when the HTTP client fails to build.
    pub fn with_config(config: OverpassConfig) -> Result<Self, ClientBuildError> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    fn interpreter_url(&self) -> String {
        format!(
            "{}/api/interpreter",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn convert_error(&self, error: &reqwest::Error, url: &str) -> VenueSourceError {
        if error.is_timeout() {
            return VenueSourceError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return VenueSourceError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        VenueSourceError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl VenueSource for OverpassClient {
    async fn venues_near(
        &self,
        center: Coord<f64>,
        radius_m: u32,
    ) -> Result<Vec<Place>, VenueSourceError> {
        let url = self.interpreter_url();
        let query = build_query(center, radius_m);

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(query)
            .send()
            .await
            .map_err(|err| self.convert_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_error(&err, &url))?;

        let parsed: OverpassResponse =
            response.json().await.map_err(|err| VenueSourceError::Parse {
                message: err.to_string(),
            })?;

        Ok(clean_elements(parsed.elements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn query_targets_food_and_leisure_around_the_centre() {
        let query = build_query(Coord { x: 80.2824, y: 13.05 }, 3000);

        assert!(query.starts_with("[out:json];"));
        assert!(query.contains("node[\"amenity\"~\"restaurant|cafe|fast_food\"](around:3000,13.05,80.2824);"));
        assert!(query.contains("node[\"leisure\"](around:3000,13.05,80.2824);"));
        assert!(query.trim_end().ends_with("out body;"));
    }

    #[rstest]
    fn deserialise_elements_with_and_without_tags() {
        let json = r#"{
            "version": 0.6,
            "elements": [
                {"type": "node", "id": 1, "lat": 13.05, "lon": 80.28,
                 "tags": {"name": "Corner Cafe", "amenity": "cafe"}},
                {"type": "node", "id": 2, "lat": 13.06, "lon": 80.29}
            ]
        }"#;

        let response: OverpassResponse = serde_json::from_str(json).expect("should deserialise");

        assert_eq!(response.elements.len(), 2);
        assert_eq!(
            response.elements[0].tags.get("name").map(String::as_str),
            Some("Corner Cafe")
        );
        assert!(response.elements[1].tags.is_empty());
    }

    #[rstest]
    fn deserialise_empty_response() {
        let response: OverpassResponse =
            serde_json::from_str(r#"{"elements": []}"#).expect("should deserialise");
        assert!(response.elements.is_empty());
    }

    #[rstest]
    fn interpreter_url_strips_trailing_slash() {
        let client = OverpassClient::with_config(OverpassConfig::new("https://overpass.example.com/"))
            .expect("client should build");
        assert_eq!(
            client.interpreter_url(),
            "https://overpass.example.com/api/interpreter"
        );
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = OverpassConfig::new("https://example.com")
            .with_timeout(Duration::from_secs(10))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }
}
