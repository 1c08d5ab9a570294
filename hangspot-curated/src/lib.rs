//! Curated-dataset scoring for Hangspot.
//!
//! The crate scores a small, hand-picked venue list against the user's
//! area, group kind, budget, time window, and moods using an additive
//! point model, then shortlists the top three with per-factor
//! explanations. When even the best entry scores below the acceptability
//! threshold the shortlist is flagged as fallback quality rather than
//! withheld.
//!
//! # Examples
//!
//! ```
//! use hangspot_curated::{BudgetTier, CuratedQuery, GroupKind, Mood, TimeSlot, shortlist};
//!
//! let places = hangspot_curated::builtin_places().expect("parse built-in dataset");
//! let query = CuratedQuery {
//!     area: "Besant Nagar".to_owned(),
//!     group: GroupKind::Friends,
//!     budget: BudgetTier::Low,
//!     time_slot: TimeSlot::OneToTwo,
//!     moods: vec![Mood::Chill, Mood::Nature],
//! };
//!
//! let shortlist = shortlist(&places, &query);
//! assert_eq!(shortlist.entries.len(), 3);
//! assert_eq!(shortlist.entries[0].name, "Elliot’s Beach");
//! ```

#![forbid(unsafe_code)]

use serde::Serialize;

mod dataset;
mod score;
mod types;

pub use dataset::{DatasetError, builtin_places, parse_places};
pub use score::{
    AREA_EXACT_POINTS, AREA_NEARBY_POINTS, BUDGET_POINTS, GROUP_POINTS, MOOD_PAIR_POINTS,
    MOOD_SINGLE_POINTS, NO_MATCH_EXPLANATION, TIME_POINTS, explain, score_place,
};
pub use types::{
    BudgetTier, CuratedPlace, CuratedQuery, FactorPoints, GroupKind, Mood, TimeSlot,
};

/// Total score at or above which the shortlist counts as confident.
pub const ACCEPTABLE_SCORE: u32 = 40;

/// Number of venues returned per query.
pub const SHORTLIST_LEN: usize = 3;

/// Message attached when the shortlist is fallback quality.
pub const FALLBACK_MESSAGE: &str = "No perfect matches found. Showing closest possible options.";

/// One shortlisted venue with its score and explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuratedPick {
    /// 1-based position in the shortlist.
    pub rank: u32,
    /// Dataset identifier of the venue.
    pub id: u32,
    /// Venue name.
    pub name: String,
    /// The area the venue sits in.
    pub area: String,
    /// Free-form category label.
    pub category: String,
    /// One-line sales pitch.
    pub highlight: String,
    /// Total additive score.
    pub score: u32,
    /// Per-factor points behind the score.
    pub breakdown: FactorPoints,
    /// Fixed-phrase explanation of the non-zero factors.
    pub explanation: String,
}

/// How trustworthy a shortlist is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    /// At least one entry met the acceptability threshold.
    Confident,
    /// Best effort only; nothing scored acceptably.
    Fallback,
}

impl MatchConfidence {
    /// Whether the shortlist is fallback quality.
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback)
    }

    /// The fixed caller-facing message, present only for fallbacks.
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Confident => None,
            Self::Fallback => Some(FALLBACK_MESSAGE),
        }
    }
}

/// The shortlist returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shortlist {
    /// Up to [`SHORTLIST_LEN`] venues, best first.
    pub entries: Vec<CuratedPick>,
    /// Whether any entry met the acceptability threshold.
    pub confidence: MatchConfidence,
}

/// Score every venue, shortlist the best three, and judge confidence.
///
/// The sort is stable and descending on the total score, so tied venues
/// keep their dataset order. Low-scoring entries are never excluded; a
/// weak field only downgrades [`Shortlist::confidence`].
#[must_use]
pub fn shortlist(places: &[CuratedPlace], query: &CuratedQuery) -> Shortlist {
    let mut scored: Vec<(u32, CuratedPick)> = places
        .iter()
        .map(|place| {
            let points = score_place(place, query);
            let total = points.total();
            let pick = CuratedPick {
                rank: 0,
                id: place.id,
                name: place.name.clone(),
                area: place.area.clone(),
                category: place.category.clone(),
                highlight: place.highlight.clone(),
                score: total,
                breakdown: points,
                explanation: explain(points),
            };
            (total, pick)
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(SHORTLIST_LEN);

    let confidence = if scored
        .first()
        .is_some_and(|(total, _)| *total >= ACCEPTABLE_SCORE)
    {
        MatchConfidence::Confident
    } else {
        MatchConfidence::Fallback
    };

    let entries = scored
        .into_iter()
        .enumerate()
        .map(|(index, (_, mut pick))| {
            pick.rank = index_to_rank(index);
            pick
        })
        .collect();

    Shortlist {
        entries,
        confidence,
    }
}

fn index_to_rank(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |value| value.saturating_add(1))
}
