//! Score a candidate venue for a user.
//!
//! The score is a convex combination of two components: how well the
//! venue's distance fits the time budget, and how well its category suits
//! the social group. Both components are retained in the
//! [`ScoreBreakdown`] so the reason generator never re-derives them.

use std::collections::HashMap;

use geo::Coord;
use thiserror::Error;

use crate::{Category, GroupType, Place, haversine_km};

/// Suitability weight for a category the group prefers.
pub const SUITABLE: f64 = 1.0;

/// Suitability weight for any other category. Never zero: an off-category
/// venue stays viable, just down-weighted.
pub const UNSUITABLE: f64 = 0.4;

/// Relative weighting of the score components.
///
/// The coefficients must sum to 1.0 so scores stay on the 0–1 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier applied to the distance-fit component.
    pub time_fit: f64,
    /// Multiplier applied to the group-suitability component.
    pub group_suitability: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            time_fit: 0.6,
            group_suitability: 0.4,
        }
    }
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::Invalid`] when either coefficient is not
    /// finite, is negative, or the pair does not sum to 1.0.
    pub fn validate(self) -> Result<Self, WeightsError> {
        let finite = self.time_fit.is_finite() && self.group_suitability.is_finite();
        let non_negative = self.time_fit >= 0.0 && self.group_suitability >= 0.0;
        let convex = (self.time_fit + self.group_suitability - 1.0).abs() < 1e-9;
        if finite && non_negative && convex {
            Ok(self)
        } else {
            Err(WeightsError::Invalid)
        }
    }
}

/// Errors raised when configuring the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// The coefficients were unusable.
    #[error("score weights must be finite, non-negative, and sum to 1.0")]
    Invalid,
}

/// Which venue categories suit which social groups.
///
/// A configuration structure injected into the engine so the table is
/// independently testable and tunable. Membership yields [`SUITABLE`],
/// anything else [`UNSUITABLE`], including groups absent from the table.
///
/// # Examples
/// ```
/// use hangspot_core::{Category, GroupType};
/// use hangspot_core::score::{GroupPreferences, SUITABLE, UNSUITABLE};
///
/// let prefs = GroupPreferences::default();
/// assert_eq!(prefs.suitability(GroupType::Family, Category::Restaurant), SUITABLE);
/// assert_eq!(prefs.suitability(GroupType::Family, Category::Cafe), UNSUITABLE);
/// ```
#[derive(Debug, Clone)]
pub struct GroupPreferences {
    acceptable: HashMap<GroupType, Vec<Category>>,
}

impl GroupPreferences {
    /// Create an empty table. Every lookup yields [`UNSUITABLE`].
    pub fn new() -> Self {
        Self {
            acceptable: HashMap::new(),
        }
    }

    /// Replace the acceptable categories for a group, consuming `self`.
    #[must_use]
    pub fn with_group(mut self, group: GroupType, categories: Vec<Category>) -> Self {
        self.acceptable.insert(group, categories);
        self
    }

    /// Suitability weight of `category` for `group`: 1.0 or 0.4, never 0.
    pub fn suitability(&self, group: GroupType, category: Category) -> f64 {
        let accepted = self
            .acceptable
            .get(&group)
            .is_some_and(|categories| categories.contains(&category));
        if accepted { SUITABLE } else { UNSUITABLE }
    }
}

impl Default for GroupPreferences {
    fn default() -> Self {
        Self::new()
            .with_group(GroupType::Solo, vec![Category::Cafe])
            .with_group(
                GroupType::Friends,
                vec![
                    Category::Restaurant,
                    Category::Cafe,
                    Category::FastFood,
                    Category::Leisure,
                ],
            )
            .with_group(GroupType::Couple, vec![Category::Cafe, Category::Leisure])
            .with_group(GroupType::Family, vec![Category::Restaurant])
            .with_group(
                GroupType::Colleagues,
                vec![Category::Cafe, Category::Restaurant],
            )
    }
}

/// The components that produced a score, retained for explanation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Full-precision distance from the user to the venue, in km.
    pub distance_km: f64,
    /// Linear distance fitness in `[0.0, 1.0]`.
    pub time_fit: f64,
    /// Group suitability: [`SUITABLE`] or [`UNSUITABLE`].
    pub group_suitability: f64,
    /// Full-precision weighted score in `[0.0, 1.0]`.
    pub score: f64,
}

/// Score one candidate, or drop it when it lies beyond the ceiling.
///
/// Returning `None` is the hard distance filter: a venue past
/// `max_distance_km` is neither scored nor reported, and the drop is not
/// an error.
pub fn score_place(
    place: &Place,
    center: Coord<f64>,
    group: GroupType,
    max_distance_km: f64,
    weights: ScoreWeights,
    preferences: &GroupPreferences,
) -> Option<ScoreBreakdown> {
    let distance_km = haversine_km(center, place.location);
    if distance_km > max_distance_km {
        return None;
    }

    let time_fit = (1.0 - distance_km / max_distance_km).max(0.0);
    let group_suitability = preferences.suitability(group, place.category);
    let score = weights.time_fit * time_fit + weights.group_suitability * group_suitability;

    Some(ScoreBreakdown {
        distance_km,
        time_fit,
        group_suitability,
        score,
    })
}

/// Round to two decimal places for output; comparisons use full precision.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
