//! The `curated` subcommand: score the built-in venue list.

use clap::Parser;
use hangspot_curated::{
    BudgetTier, CuratedPick, CuratedQuery, GroupKind, Mood, TimeSlot, builtin_places, shortlist,
};
use serde::Serialize;

use crate::CliError;

/// CLI arguments for the `curated` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(
    long_about = "Score the built-in curated venue list against the area, \
                 group, budget, time window, and moods, and print the top \
                 three with per-factor explanations.",
    about = "Score the built-in curated venue list"
)]
pub(crate) struct CuratedArgs {
    /// Area the user is in.
    #[arg(long, value_name = "name")]
    area: Option<String>,
    /// Group kind: friends, family, or office.
    #[arg(long, value_name = "group", default_value = "friends")]
    group: String,
    /// Budget tier: low, medium, or high.
    #[arg(long, value_name = "tier", default_value = "low")]
    budget: String,
    /// Time window: 1-2, 2-4, or half.
    #[arg(long, value_name = "window", default_value = "1-2")]
    time: String,
    /// Desired mood: chill, nature, fun, or food. Repeatable.
    #[arg(long = "mood", value_name = "mood")]
    moods: Vec<String>,
}

impl CuratedArgs {
    pub(crate) fn into_query(self) -> Result<CuratedQuery, CliError> {
        let area = self
            .area
            .filter(|value| !value.trim().is_empty())
            .ok_or(CliError::MissingArgument { field: "area" })?;

        let group: GroupKind = self
            .group
            .parse()
            .map_err(|message| CliError::InvalidArgument {
                field: "group",
                message,
            })?;
        let budget: BudgetTier =
            self.budget
                .parse()
                .map_err(|message| CliError::InvalidArgument {
                    field: "budget",
                    message,
                })?;
        let time_slot: TimeSlot =
            self.time
                .parse()
                .map_err(|message| CliError::InvalidArgument {
                    field: "time",
                    message,
                })?;
        let moods = self
            .moods
            .iter()
            .map(|raw| {
                raw.parse::<Mood>().map_err(|message| CliError::InvalidArgument {
                    field: "mood",
                    message,
                })
            })
            .collect::<Result<Vec<Mood>, CliError>>()?;

        Ok(CuratedQuery {
            area,
            group,
            budget,
            time_slot,
            moods,
        })
    }
}

/// JSON response for the `curated` subcommand.
#[derive(Debug, Serialize)]
pub(crate) struct CuratedResponse {
    pub(crate) results: Vec<CuratedPick>,
    pub(crate) fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<String>,
}

pub(crate) fn run(query: &CuratedQuery) -> Result<CuratedResponse, CliError> {
    let places = builtin_places()?;
    let list = shortlist(&places, query);

    Ok(CuratedResponse {
        fallback: list.confidence.is_fallback(),
        message: list.confidence.message().map(ToOwned::to_owned),
        results: list.entries,
    })
}
