//! The ranking pipeline: filter, score, sort, truncate.

use std::cmp::Ordering;
use std::collections::HashMap;

use geo::Coord;
use serde::Serialize;

use crate::score::{ScoreWeights, round2, score_place};
use crate::{
    Budget, Category, GroupPreferences, GroupType, Place, Session, SpeedTable, TransportMode,
    UserPreferences, WeightsError, derive_reason,
};

/// Maximum number of ranked venues returned per request.
pub const TOP_N: usize = 5;

/// Which venue categories each budget tier can afford.
///
/// A hard filter: off-budget venues are removed before scoring.
///
/// # Examples
/// ```
/// use hangspot_core::{Budget, BudgetFilter, Category};
///
/// let filter = BudgetFilter::default();
/// assert!(filter.allows(Budget::Low, Category::FastFood));
/// assert!(!filter.allows(Budget::Low, Category::Restaurant));
/// ```
#[derive(Debug, Clone)]
pub struct BudgetFilter {
    allowed: HashMap<Budget, Vec<Category>>,
}

impl BudgetFilter {
    /// Create an empty filter that allows nothing.
    pub fn new() -> Self {
        Self {
            allowed: HashMap::new(),
        }
    }

    /// Replace the allowed categories for a budget tier, consuming `self`.
    #[must_use]
    pub fn with_budget(mut self, budget: Budget, categories: Vec<Category>) -> Self {
        self.allowed.insert(budget, categories);
        self
    }

    /// Whether `category` is within reach of `budget`.
    pub fn allows(&self, budget: Budget, category: Category) -> bool {
        self.allowed
            .get(&budget)
            .is_some_and(|categories| categories.contains(&category))
    }
}

impl Default for BudgetFilter {
    fn default() -> Self {
        Self::new()
            .with_budget(Budget::Low, vec![Category::FastFood])
            .with_budget(Budget::Medium, vec![Category::Cafe, Category::FastFood])
            .with_budget(
                Budget::High,
                vec![Category::Restaurant, Category::Cafe, Category::Leisure],
            )
    }
}

/// One ranking request: where the user is and what they asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankRequest {
    /// Geocoded user location (`x = longitude`, `y = latitude`).
    pub center: Coord<f64>,
    /// Social group the outing is for.
    pub group: GroupType,
    /// Spending budget tier.
    pub budget: Budget,
    /// Hard distance ceiling in kilometres.
    pub max_distance_km: f64,
    /// Transport mode, when a known one was supplied.
    pub transport: Option<TransportMode>,
}

impl RankRequest {
    /// Build a request from user preferences and a geocoded centre.
    pub fn from_preferences(center: Coord<f64>, preferences: &UserPreferences) -> Self {
        Self {
            center,
            group: preferences.group,
            budget: preferences.budget,
            max_distance_km: preferences.time_budget.max_distance_km(),
            transport: preferences.transport,
        }
    }
}

/// A venue that survived filtering, with its score and justification.
///
/// Derived per request and never cached. `score` is rounded to two
/// decimals for output; ordering used the full-precision value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPlace {
    /// Geodata element identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Venue category.
    pub category: Category,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Opening hours, or the `"unavailable"` placeholder.
    pub opening_hours: String,
    /// Signature dishes, possibly empty.
    pub popular_items: Vec<String>,
    /// Distance from the user, rounded to two decimals.
    pub distance_km: f64,
    /// Estimated travel time in whole minutes.
    pub eta_minutes: u32,
    /// Weighted score on the 0–1 scale, rounded to two decimals.
    pub score: f64,
    /// `score` expressed as a whole percentage.
    pub match_percentage: u8,
    /// Human-readable justification.
    pub reason: String,
    /// 1-based position in the final ordering.
    pub rank: u32,
    /// Resolved street address, when enrichment supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Filters, scores, sorts, and truncates candidate venues.
///
/// All lookup tables are injected configuration; [`RankingEngine::default`]
/// wires the standard tables.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use hangspot_core::{
///     Budget, Category, GroupType, InMemorySession, Place, RankRequest, RankingEngine,
/// };
///
/// let center = Coord { x: 80.25, y: 13.05 };
/// let cafe = Place::new(1, "Corner Cafe", Category::Cafe, Coord { x: 80.251, y: 13.051 });
/// let request = RankRequest {
///     center,
///     group: GroupType::Friends,
///     budget: Budget::Medium,
///     max_distance_km: 2.0,
///     transport: None,
/// };
///
/// let session = InMemorySession::new();
/// let ranked = RankingEngine::default().rank(&[cafe], &request, &session);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].rank, 1);
/// ```
#[derive(Debug, Clone)]
pub struct RankingEngine {
    weights: ScoreWeights,
    group_preferences: GroupPreferences,
    budget_filter: BudgetFilter,
    speeds: SpeedTable,
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            group_preferences: GroupPreferences::default(),
            budget_filter: BudgetFilter::default(),
            speeds: SpeedTable::default(),
        }
    }
}

impl RankingEngine {
    /// Build an engine from explicit configuration tables.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when the score weights are not a convex
    /// combination.
    pub fn new(
        weights: ScoreWeights,
        group_preferences: GroupPreferences,
        budget_filter: BudgetFilter,
        speeds: SpeedTable,
    ) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
            group_preferences,
            budget_filter,
            speeds,
        })
    }

    /// Rank candidates for a request.
    ///
    /// Applies the hard filters (rejection set, budget categories, distance
    /// ceiling), scores survivors, stable-sorts descending on the
    /// full-precision score so tied venues keep their input order, then
    /// truncates to [`TOP_N`] and assigns ranks.
    pub fn rank(
        &self,
        candidates: &[Place],
        request: &RankRequest,
        session: &dyn Session,
    ) -> Vec<ScoredPlace> {
        let mut scored: Vec<(f64, ScoredPlace)> = candidates
            .iter()
            .filter(|place| !session.is_rejected(&place.id.to_string()))
            .filter(|place| self.budget_filter.allows(request.budget, place.category))
            .filter_map(|place| self.score_one(place, request))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored.truncate(TOP_N);

        scored
            .into_iter()
            .enumerate()
            .map(|(index, (_, mut place))| {
                place.rank = index as u32 + 1;
                place
            })
            .collect()
    }

    fn score_one(&self, place: &Place, request: &RankRequest) -> Option<(f64, ScoredPlace)> {
        let breakdown = score_place(
            place,
            request.center,
            request.group,
            request.max_distance_km,
            self.weights,
            &self.group_preferences,
        )?;

        let reason = derive_reason(&breakdown, request.group);
        let eta_minutes = self
            .speeds
            .eta_minutes(breakdown.distance_km, request.transport);

        let scored = ScoredPlace {
            id: place.id,
            name: place.name.clone(),
            category: place.category,
            lat: place.location.y,
            lng: place.location.x,
            opening_hours: place.opening_hours.clone(),
            popular_items: place.popular_items.clone(),
            distance_km: round2(breakdown.distance_km),
            eta_minutes,
            score: round2(breakdown.score),
            match_percentage: (breakdown.score * 100.0).round() as u8,
            reason,
            rank: 0,
            address: None,
        };
        Some((breakdown.score, scored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemorySession;
    use rstest::{fixture, rstest};

    const CENTER: Coord<f64> = Coord { x: 80.25, y: 13.05 };

    fn place(id: u64, name: &str, category: Category, dx: f64) -> Place {
        Place::new(
            id,
            name,
            category,
            Coord {
                x: CENTER.x + dx,
                y: CENTER.y,
            },
        )
    }

    #[fixture]
    fn request() -> RankRequest {
        RankRequest {
            center: CENTER,
            group: GroupType::Friends,
            budget: Budget::High,
            max_distance_km: 2.0,
            transport: Some(TransportMode::Car),
        }
    }

    #[rstest]
    fn rejected_ids_never_rank(request: RankRequest) {
        let session = InMemorySession::new();
        session.reject("1");
        let candidates = vec![
            place(1, "Rejected", Category::Cafe, 0.001),
            place(2, "Kept", Category::Cafe, 0.002),
        ];

        let ranked = RankingEngine::default().rank(&candidates, &request, &session);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, 2);
    }

    #[rstest]
    fn budget_filter_drops_off_tier_categories(request: RankRequest) {
        let low_request = RankRequest {
            budget: Budget::Low,
            ..request
        };
        let candidates = vec![
            place(1, "Fancy", Category::Restaurant, 0.001),
            place(2, "Stall", Category::FastFood, 0.002),
        ];

        let ranked = RankingEngine::default().rank(&candidates, &low_request, &InMemorySession::new());

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].category, Category::FastFood);
    }

    #[rstest]
    fn output_is_sorted_descending_and_truncated(request: RankRequest) {
        // Seven cafes at increasing distance; closer scores higher.
        let candidates: Vec<Place> = (0..7)
            .map(|i| place(i, "Cafe", Category::Cafe, f64::from(i as u32) * 0.002))
            .collect();

        let ranked = RankingEngine::default().rank(&candidates, &request, &InMemorySession::new());

        assert_eq!(ranked.len(), TOP_N);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        let ranks: Vec<u32> = ranked.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn ties_preserve_input_order(request: RankRequest) {
        // Identical venues at the same spot score identically; the stable
        // sort must keep their input order.
        let candidates = vec![
            place(10, "First", Category::Cafe, 0.001),
            place(11, "Second", Category::Cafe, 0.001),
        ];

        let ranked = RankingEngine::default().rank(&candidates, &request, &InMemorySession::new());

        let ids: Vec<u64> = ranked.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[rstest]
    fn beyond_ceiling_is_absent(request: RankRequest) {
        // ~0.11 km per 0.001 degrees of longitude at this latitude; 0.05
        // degrees is well past the 2 km ceiling.
        let candidates = vec![
            place(1, "Near", Category::Cafe, 0.001),
            place(2, "Far", Category::Cafe, 0.05),
        ];

        let ranked = RankingEngine::default().rank(&candidates, &request, &InMemorySession::new());

        assert!(ranked.iter().all(|p| p.id != 2));
    }

    #[rstest]
    fn match_percentage_mirrors_score(request: RankRequest) {
        let candidates = vec![place(1, "Cafe", Category::Cafe, 0.001)];

        let ranked = RankingEngine::default().rank(&candidates, &request, &InMemorySession::new());

        let top = &ranked[0];
        assert_eq!(top.match_percentage, (top.score * 100.0).round() as u8);
    }

    #[rstest]
    fn empty_candidates_rank_to_empty(request: RankRequest) {
        let ranked = RankingEngine::default().rank(&[], &request, &InMemorySession::new());
        assert!(ranked.is_empty());
    }
}
