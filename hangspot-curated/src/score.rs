//! Additive factor scoring and the explanation generator.
//!
//! Each factor is computed and retained individually so explanations can
//! name exactly what matched. Mood overlap is a three-level step function,
//! not a linear function of the overlap count.
#![forbid(unsafe_code)]

use crate::types::{CuratedPlace, CuratedQuery, FactorPoints};

/// Points for sitting in the user's own area.
pub const AREA_EXACT_POINTS: u8 = 15;

/// Points for sitting in one of the venue's declared nearby areas.
pub const AREA_NEARBY_POINTS: u8 = 8;

/// Points for suiting the user's group kind.
pub const GROUP_POINTS: u8 = 30;

/// Points for matching the user's budget tier exactly.
pub const BUDGET_POINTS: u8 = 25;

/// Points for covering the user's time window.
pub const TIME_POINTS: u8 = 25;

/// Points for exactly one overlapping mood.
pub const MOOD_SINGLE_POINTS: u8 = 10;

/// Points for two or more overlapping moods.
pub const MOOD_PAIR_POINTS: u8 = 20;

/// Explanation used when not a single factor scored.
pub const NO_MATCH_EXPLANATION: &str =
    "Closest available option based on limited matching factors";

/// Score one curated venue against the query.
#[must_use]
pub fn score_place(place: &CuratedPlace, query: &CuratedQuery) -> FactorPoints {
    let area = if place.area.eq_ignore_ascii_case(&query.area) {
        AREA_EXACT_POINTS
    } else if place
        .nearby_areas
        .iter()
        .any(|nearby| nearby.eq_ignore_ascii_case(&query.area))
    {
        AREA_NEARBY_POINTS
    } else {
        0
    };

    let group = if place.group_kinds.contains(&query.group) {
        GROUP_POINTS
    } else {
        0
    };

    let budget = if place.budget == query.budget {
        BUDGET_POINTS
    } else {
        0
    };

    let time = if place.time_slots.contains(&query.time_slot) {
        TIME_POINTS
    } else {
        0
    };

    let overlap = place
        .moods
        .iter()
        .filter(|mood| query.moods.contains(mood))
        .count();
    let mood = match overlap {
        0 => 0,
        1 => MOOD_SINGLE_POINTS,
        _ => MOOD_PAIR_POINTS,
    };

    FactorPoints {
        area,
        group,
        budget,
        time,
        mood,
    }
}

/// Build the explanation string from a factor breakdown.
///
/// One fixed phrase per non-zero factor, joined with `", "`; the area
/// phrase depends on which tier matched. All-zero breakdowns get
/// [`NO_MATCH_EXPLANATION`].
#[must_use]
pub fn explain(points: FactorPoints) -> String {
    let mut phrases: Vec<&str> = Vec::new();

    if points.area == AREA_EXACT_POINTS {
        phrases.push("very close to your selected area");
    }
    if points.area == AREA_NEARBY_POINTS {
        phrases.push("reasonably close to your selected area");
    }
    if points.group > 0 {
        phrases.push("suitable for your group type");
    }
    if points.budget > 0 {
        phrases.push("fits your budget range");
    }
    if points.time > 0 {
        phrases.push("matches your available time");
    }
    if points.mood > 0 {
        phrases.push("matches some of your mood preferences");
    }

    if phrases.is_empty() {
        NO_MATCH_EXPLANATION.to_owned()
    } else {
        phrases.join(", ")
    }
}
