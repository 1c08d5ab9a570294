//! Facade crate for the Hangspot venue recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the curated
//! dataset variant and the live geodata providers behind feature flags.

#![forbid(unsafe_code)]

pub use hangspot_core::{
    Budget, BudgetFilter, Category, ConvergenceVerdict, GroupPreferences, GroupType,
    InMemorySession, Place, RankRequest, RankingEngine, ScoreBreakdown, ScoreWeights, ScoredPlace,
    Session, SpeedTable, TimeBudget, TransportMode, UserPreferences, WeightsError,
    evaluate_convergence, haversine_km,
};

#[cfg(feature = "curated")]
pub use hangspot_curated::{CuratedPlace, CuratedQuery, MatchConfidence, Shortlist};

#[cfg(feature = "live")]
pub use hangspot_data::{Geocoder, NominatimClient, OverpassClient, ReverseGeocoder, VenueSource};
