//! Decide when the user has enough signal to stop browsing.
//!
//! Two rules, evaluated in priority order over the final ranked list and
//! the session's rejection count. An empty list is a neutral no-result
//! state, never an error.

use crate::ScoredPlace;

/// Match percentage the top result needs for the dominant-winner rule.
pub const DOMINANT_SCORE: u8 = 80;

/// Lead over the runner-up the top result needs, in percentage points.
pub const DOMINANT_LEAD: u8 = 15;

/// Rejections after which fatigue can set in.
pub const FATIGUE_REJECTIONS: usize = 3;

/// Remaining-candidate ceiling for the fatigue rule.
pub const FATIGUE_REMAINING: usize = 2;

/// Message shown when one venue clearly dominates the field.
pub const DOMINANT_WINNER_MESSAGE: &str =
    "The top result is a clear standout. You can pick it with confidence.";

/// Message shown when rejections have nearly exhausted the options.
pub const REJECTION_FATIGUE_MESSAGE: &str =
    "Few options remain after several rejections. The best remaining choice is ranked first.";

/// Outcome of the convergence heuristic.
///
/// # Examples
/// ```
/// use hangspot_core::ConvergenceVerdict;
///
/// assert!(ConvergenceVerdict::DominantWinner.is_converged());
/// assert!(ConvergenceVerdict::Undecided.message().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceVerdict {
    /// The top result dominates: high score and a comfortable lead.
    DominantWinner,
    /// The user has rejected enough that little remains.
    RejectionFatigue,
    /// Keep browsing; no recommendation to stop.
    Undecided,
}

impl ConvergenceVerdict {
    /// Whether the heuristic recommends stopping.
    pub fn is_converged(self) -> bool {
        !matches!(self, Self::Undecided)
    }

    /// The fixed user-facing message for this verdict, when converged.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::DominantWinner => Some(DOMINANT_WINNER_MESSAGE),
            Self::RejectionFatigue => Some(REJECTION_FATIGUE_MESSAGE),
            Self::Undecided => None,
        }
    }
}

/// Evaluate the convergence rules against a ranked (truncated) list.
pub fn evaluate_convergence(results: &[ScoredPlace], rejected_count: usize) -> ConvergenceVerdict {
    let Some(top) = results.first() else {
        return ConvergenceVerdict::Undecided;
    };

    if top.match_percentage >= DOMINANT_SCORE {
        if let Some(second) = results.get(1) {
            if top.match_percentage.saturating_sub(second.match_percentage) >= DOMINANT_LEAD {
                return ConvergenceVerdict::DominantWinner;
            }
        }
    }

    if rejected_count >= FATIGUE_REJECTIONS && results.len() <= FATIGUE_REMAINING {
        return ConvergenceVerdict::RejectionFatigue;
    }

    ConvergenceVerdict::Undecided
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;
    use rstest::rstest;

    fn scored(rank: u32, match_percentage: u8) -> ScoredPlace {
        ScoredPlace {
            id: u64::from(rank),
            name: format!("Venue {rank}"),
            category: Category::Cafe,
            lat: 13.05,
            lng: 80.25,
            opening_hours: "unavailable".to_owned(),
            popular_items: Vec::new(),
            distance_km: 0.5,
            eta_minutes: 5,
            score: f64::from(match_percentage) / 100.0,
            match_percentage,
            reason: "Good for friends".to_owned(),
            rank,
            address: None,
        }
    }

    #[rstest]
    fn dominant_winner_fires_on_score_and_lead() {
        let results = vec![scored(1, 85), scored(2, 60)];
        let verdict = evaluate_convergence(&results, 1);
        assert_eq!(verdict, ConvergenceVerdict::DominantWinner);
        assert_eq!(verdict.message(), Some(DOMINANT_WINNER_MESSAGE));
    }

    #[rstest]
    // High score but no runner-up to dominate.
    #[case(vec![scored(1, 92)], 0)]
    // Lead too small.
    #[case(vec![scored(1, 85), scored(2, 75)], 0)]
    // Score too low despite a big lead.
    #[case(vec![scored(1, 79), scored(2, 40)], 0)]
    fn dominant_winner_needs_both_conditions(
        #[case] results: Vec<ScoredPlace>,
        #[case] rejections: usize,
    ) {
        assert_eq!(
            evaluate_convergence(&results, rejections),
            ConvergenceVerdict::Undecided
        );
    }

    #[rstest]
    fn fatigue_fires_when_little_remains() {
        let results = vec![scored(1, 55), scored(2, 50)];
        let verdict = evaluate_convergence(&results, 3);
        assert_eq!(verdict, ConvergenceVerdict::RejectionFatigue);
        assert_eq!(verdict.message(), Some(REJECTION_FATIGUE_MESSAGE));
    }

    #[rstest]
    fn fatigue_needs_both_conditions() {
        // Enough rejections but still plenty of candidates.
        let plenty = vec![scored(1, 55), scored(2, 50), scored(3, 45)];
        assert_eq!(
            evaluate_convergence(&plenty, 5),
            ConvergenceVerdict::Undecided
        );

        // Few candidates but not enough rejections.
        let few = vec![scored(1, 55), scored(2, 50)];
        assert_eq!(evaluate_convergence(&few, 2), ConvergenceVerdict::Undecided);
    }

    #[rstest]
    fn dominant_winner_outranks_fatigue() {
        let results = vec![scored(1, 90), scored(2, 60)];
        assert_eq!(
            evaluate_convergence(&results, 4),
            ConvergenceVerdict::DominantWinner
        );
    }

    #[rstest]
    fn empty_list_is_neutral() {
        let verdict = evaluate_convergence(&[], 4);
        assert_eq!(verdict, ConvergenceVerdict::Undecided);
        assert!(!verdict.is_converged());
    }
}
