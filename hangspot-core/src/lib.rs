//! Core domain types and the ranking engine for Hangspot.
//!
//! The crate is pure: it owns the distance estimator, the scoring engine,
//! the reason generator, the ranking pipeline, the convergence heuristic,
//! and the session-state contract. Fetching candidates and resolving
//! addresses are provider concerns and live in `hangspot-data`.

pub mod convergence;
pub mod distance;
pub mod place;
pub mod preferences;
pub mod rank;
pub mod reason;
pub mod score;
pub mod session;

pub use convergence::{
    ConvergenceVerdict, DOMINANT_WINNER_MESSAGE, REJECTION_FATIGUE_MESSAGE, evaluate_convergence,
};
pub use distance::{EARTH_RADIUS_KM, SpeedTable, haversine_km};
pub use place::{Category, OPENING_HOURS_UNAVAILABLE, Place};
pub use preferences::{Budget, GroupType, TimeBudget, TransportMode, UserPreferences};
pub use rank::{BudgetFilter, RankRequest, RankingEngine, ScoredPlace, TOP_N};
pub use reason::{CLOSE_DISTANCE_KM, FALLBACK_REASON, derive_reason};
pub use score::{GroupPreferences, ScoreBreakdown, ScoreWeights, WeightsError};
pub use session::{InMemorySession, Session, normalise_id};
