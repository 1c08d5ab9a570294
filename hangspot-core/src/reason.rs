//! Human-readable justification for a ranked venue.
//!
//! The generator is an ordered list of (predicate, render) rules evaluated
//! top to bottom; the first match wins and later rules never fire. It is a
//! pure function of the already-computed [`ScoreBreakdown`] and never
//! re-derives distance or suitability.

use crate::score::SUITABLE;
use crate::{GroupType, ScoreBreakdown};

/// Distance below which a venue counts as right on the doorstep.
pub const CLOSE_DISTANCE_KM: f64 = 0.3;

/// Reason emitted when no rule matches.
pub const FALLBACK_REASON: &str = "Balanced nearby option";

struct ReasonRule {
    applies: fn(&ScoreBreakdown) -> bool,
    render: fn(GroupType) -> String,
}

fn is_extremely_close(breakdown: &ScoreBreakdown) -> bool {
    breakdown.distance_km < CLOSE_DISTANCE_KM
}

fn render_extremely_close(_group: GroupType) -> String {
    "Extremely close".to_owned()
}

fn suits_the_group(breakdown: &ScoreBreakdown) -> bool {
    breakdown.group_suitability == SUITABLE
}

fn render_suits_the_group(group: GroupType) -> String {
    format!("Good for {group}")
}

/// Rules in priority order. Insert new rules here, not as extra branches.
const REASON_RULES: &[ReasonRule] = &[
    ReasonRule {
        applies: is_extremely_close,
        render: render_extremely_close,
    },
    ReasonRule {
        applies: suits_the_group,
        render: render_suits_the_group,
    },
];

/// Derive the justification string for a scored venue.
///
/// # Examples
/// ```
/// use hangspot_core::{GroupType, ScoreBreakdown, derive_reason};
///
/// let breakdown = ScoreBreakdown {
///     distance_km: 0.2,
///     time_fit: 0.9,
///     group_suitability: 0.4,
///     score: 0.7,
/// };
/// // Proximity outranks suitability.
/// assert_eq!(derive_reason(&breakdown, GroupType::Friends), "Extremely close");
/// ```
pub fn derive_reason(breakdown: &ScoreBreakdown, group: GroupType) -> String {
    REASON_RULES
        .iter()
        .find(|rule| (rule.applies)(breakdown))
        .map_or_else(|| FALLBACK_REASON.to_owned(), |rule| (rule.render)(group))
}
