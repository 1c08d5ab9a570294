//! Command-line interface for the Hangspot engine.
//!
//! Two subcommands expose the engine's operations: `recommend` runs the
//! live pipeline (geocode, fetch, clean, rank, enrich, convergence) and
//! `curated` scores the built-in venue list. Both print a JSON response
//! to stdout. Rejections are session-scoped; the `--reject` flag seeds
//! the session for this invocation.

#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use serde::Serialize;

mod curated;
mod error;
mod recommend;

pub use error::CliError;

/// Run the Hangspot CLI with the current process arguments.
///
/// # Errors
/// Returns [`CliError`] for argument validation failures and upstream
/// failures; the binary converts these into a diagnostic line and a
/// non-zero exit.
pub async fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => {
            let config = args.into_config()?;
            let response = recommend::run(config).await?;
            emit(&response)
        }
        Command::Curated(args) => {
            let query = args.into_query()?;
            let response = curated::run(&query)?;
            emit(&response)
        }
    }
}

fn emit<T: Serialize>(response: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(response).map_err(CliError::SerializeResponse)?;
    println!("{payload}");
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "hangspot",
    about = "Recommend nearby venues to hang out at",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank live venues near a geocoded city and area.
    Recommend(recommend::RecommendArgs),
    /// Score the built-in curated venue list.
    Curated(curated::CuratedArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[rstest]
    fn recommend_subcommand_parses() {
        let cli = parse(&[
            "hangspot",
            "recommend",
            "--city",
            "Chennai",
            "--area",
            "Besant Nagar",
            "--group",
            "friends",
            "--reject",
            "11",
            "--reject",
            "12",
        ]);
        assert!(matches!(cli.command, Command::Recommend(_)));
    }

    #[rstest]
    fn curated_subcommand_parses() {
        let cli = parse(&[
            "hangspot",
            "curated",
            "--area",
            "Besant Nagar",
            "--mood",
            "chill",
            "--mood",
            "nature",
        ]);
        assert!(matches!(cli.command, Command::Curated(_)));
    }

    #[rstest]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["hangspot", "wander"]).is_err());
    }
}
