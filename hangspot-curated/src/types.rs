//! Curated-dataset types: venues, query attributes, and factor points.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Social group kinds the curated dataset distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    /// A group of friends.
    Friends,
    /// A family outing.
    Family,
    /// An office or work group.
    Office,
}

impl GroupKind {
    /// Return the kind as its dataset spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Friends => "Friends",
            Self::Family => "Family",
            Self::Office => "Office",
        }
    }
}

impl std::fmt::Display for GroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GroupKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "friends" => Ok(Self::Friends),
            "family" => Ok(Self::Family),
            "office" => Ok(Self::Office),
            _ => Err(format!("unknown group kind '{s}'")),
        }
    }
}

/// Spending tiers used by the curated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetTier {
    /// Street-food money.
    Low,
    /// Mall money.
    Medium,
    /// Ticketed-activity money.
    High,
}

impl BudgetTier {
    /// Return the tier as its dataset spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown budget tier '{s}'")),
        }
    }
}

/// Time windows a venue suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    /// One to two hours.
    #[serde(rename = "1-2")]
    OneToTwo,
    /// Two to four hours.
    #[serde(rename = "2-4")]
    TwoToFour,
    /// Half a day.
    #[serde(rename = "Half")]
    HalfDay,
}

impl TimeSlot {
    /// Return the slot as its dataset spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneToTwo => "1-2",
            Self::TwoToFour => "2-4",
            Self::HalfDay => "Half",
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1-2" => Ok(Self::OneToTwo),
            "2-4" => Ok(Self::TwoToFour),
            "half" => Ok(Self::HalfDay),
            _ => Err(format!("unknown time slot '{s}' (expected 1-2, 2-4, or Half)")),
        }
    }
}

/// Moods a venue caters to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    /// Unhurried and calm.
    Chill,
    /// Greenery and open air.
    Nature,
    /// Games and activity.
    Fun,
    /// Eating as the main event.
    Food,
}

impl Mood {
    /// Return the mood as its dataset spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chill => "Chill",
            Self::Nature => "Nature",
            Self::Fun => "Fun",
            Self::Food => "Food",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chill" => Ok(Self::Chill),
            "nature" => Ok(Self::Nature),
            "fun" => Ok(Self::Fun),
            "food" => Ok(Self::Food),
            _ => Err(format!("unknown mood '{s}'")),
        }
    }
}

/// One venue in the curated dataset.
///
/// Loaded once at startup and read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedPlace {
    /// Dataset identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// The area the venue sits in.
    pub area: String,
    /// Areas considered a short hop away.
    #[serde(default)]
    pub nearby_areas: Vec<String>,
    /// Group kinds the venue suits.
    pub group_kinds: Vec<GroupKind>,
    /// The venue's budget tier.
    pub budget: BudgetTier,
    /// Time windows the venue suits.
    pub time_slots: Vec<TimeSlot>,
    /// Moods the venue caters to.
    pub moods: Vec<Mood>,
    /// Free-form category label, e.g. "Beach".
    pub category: String,
    /// One-line sales pitch shown with the result.
    pub highlight: String,
}

/// What the user asked for, in curated-dataset vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct CuratedQuery {
    /// The user's area, matched case-insensitively.
    pub area: String,
    /// Social group kind.
    pub group: GroupKind,
    /// Spending tier.
    pub budget: BudgetTier,
    /// Available time window.
    pub time_slot: TimeSlot,
    /// Selected moods, possibly empty.
    pub moods: Vec<Mood>,
}

/// Points awarded per factor, retained for explanations.
///
/// The factor maxima are 15 (area), 30 (group), 25 (budget), 25 (time),
/// and 20 (mood); a full match totals 115. The total is never clamped:
/// [`FactorPoints::total`] is the plain sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FactorPoints {
    /// Area proximity points: 15, 8, or 0.
    pub area: u8,
    /// Group membership points: 30 or 0.
    pub group: u8,
    /// Budget match points: 25 or 0.
    pub budget: u8,
    /// Time window points: 25 or 0.
    pub time: u8,
    /// Mood overlap points: 20, 10, or 0.
    pub mood: u8,
}

impl FactorPoints {
    /// Total score: the sum of all factor points.
    #[must_use]
    pub fn total(self) -> u32 {
        u32::from(self.area)
            + u32::from(self.group)
            + u32::from(self.budget)
            + u32::from(self.time)
            + u32::from(self.mood)
    }
}
