//! The `recommend` subcommand: the live ranking pipeline.

use clap::Parser;
use hangspot_core::{
    Budget, GroupType, InMemorySession, RankRequest, RankingEngine, ScoredPlace, Session,
    TimeBudget, TransportMode, UserPreferences, evaluate_convergence,
};
use hangspot_data::{
    DEFAULT_SEARCH_RADIUS_M, Geocoder, NominatimClient, NominatimConfig, OverpassClient,
    OverpassConfig, VenueSource, enrich_addresses,
};
use serde::Serialize;

use crate::CliError;

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(
    long_about = "Geocode the city and area, fetch nearby venues from the \
                 geodata source, and rank them against the group, time, \
                 budget, and transport preferences.",
    about = "Rank live venues near a geocoded city and area"
)]
pub(crate) struct RecommendArgs {
    /// City to search in.
    #[arg(long, value_name = "name")]
    city: Option<String>,
    /// Area or neighbourhood within the city.
    #[arg(long, value_name = "name")]
    area: Option<String>,
    /// Social group: solo, friends, couple, family, or colleagues.
    #[arg(long, value_name = "group", default_value = "friends")]
    group: String,
    /// Time budget in hours: 1, 2, or 4.
    #[arg(long, value_name = "hours", default_value = "2")]
    time: String,
    /// Spending budget: low, medium, or high.
    #[arg(long, value_name = "tier", default_value = "medium")]
    budget: String,
    /// Transport mode: walk, bike, car, or bus.
    #[arg(long, value_name = "mode", default_value = "car")]
    transport: String,
    /// Venue id rejected earlier this session. Repeatable.
    #[arg(long = "reject", value_name = "id")]
    rejections: Vec<String>,
    /// Override the Nominatim base URL.
    #[arg(long, value_name = "url")]
    nominatim_url: Option<String>,
    /// Override the Overpass base URL.
    #[arg(long, value_name = "url")]
    overpass_url: Option<String>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let city = self
            .city
            .filter(|value| !value.trim().is_empty())
            .ok_or(CliError::MissingArgument { field: "city" })?;
        let area = self
            .area
            .filter(|value| !value.trim().is_empty())
            .ok_or(CliError::MissingArgument { field: "area" })?;

        let group: GroupType = self
            .group
            .parse()
            .map_err(|message| CliError::InvalidArgument {
                field: "group",
                message,
            })?;
        let budget: Budget = self
            .budget
            .parse()
            .map_err(|message| CliError::InvalidArgument {
                field: "budget",
                message,
            })?;
        let time_budget: TimeBudget =
            self.time
                .parse()
                .map_err(|message| CliError::InvalidArgument {
                    field: "time",
                    message,
                })?;

        // Unknown transport modes fall back to the default speed rather
        // than failing the request.
        let transport = match self.transport.parse::<TransportMode>() {
            Ok(mode) => Some(mode),
            Err(message) => {
                log::warn!("{message}; assuming the default travel speed");
                None
            }
        };

        Ok(RecommendConfig {
            city,
            area,
            preferences: UserPreferences {
                group,
                budget,
                time_budget,
                transport,
            },
            rejections: self.rejections,
            nominatim_url: self.nominatim_url,
            overpass_url: self.overpass_url,
        })
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) city: String,
    pub(crate) area: String,
    pub(crate) preferences: UserPreferences,
    pub(crate) rejections: Vec<String>,
    pub(crate) nominatim_url: Option<String>,
    pub(crate) overpass_url: Option<String>,
}

/// JSON response for the `recommend` subcommand.
#[derive(Debug, Serialize)]
pub(crate) struct RecommendResponse {
    pub(crate) results: Vec<ScoredPlace>,
    pub(crate) converged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<String>,
}

impl RecommendResponse {
    fn empty() -> Self {
        Self {
            results: Vec::new(),
            converged: false,
            message: None,
        }
    }
}

pub(crate) async fn run(config: RecommendConfig) -> Result<RecommendResponse, CliError> {
    let session = InMemorySession::new();
    for id in &config.rejections {
        session.reject(id);
    }

    let nominatim_config = config
        .nominatim_url
        .as_deref()
        .map_or_else(NominatimConfig::default, NominatimConfig::new);
    let nominatim = NominatimClient::with_config(nominatim_config)?;

    let Some(center) = nominatim.geocode(&config.city, &config.area).await? else {
        log::info!(
            "geocoder found nothing for '{}, {}'",
            config.area,
            config.city
        );
        return Ok(RecommendResponse::empty());
    };

    let overpass_config = config
        .overpass_url
        .as_deref()
        .map_or_else(OverpassConfig::default, OverpassConfig::new);
    let overpass = OverpassClient::with_config(overpass_config)?;
    let candidates = overpass.venues_near(center, DEFAULT_SEARCH_RADIUS_M).await?;
    log::debug!("{} candidate venues after cleaning", candidates.len());

    let engine = RankingEngine::default();
    let request = RankRequest::from_preferences(center, &config.preferences);
    let mut results = engine.rank(&candidates, &request, &session);

    enrich_addresses(&mut results, &nominatim, &session).await;

    let verdict = evaluate_convergence(&results, session.rejected_count());
    Ok(RecommendResponse {
        results,
        converged: verdict.is_converged(),
        message: verdict.message().map(ToOwned::to_owned),
    })
}
