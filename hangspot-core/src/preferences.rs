//! User preferences: who is going, what they can spend, and how they move.
//!
//! Each enum offers `FromStr`/`Display` in the same shape so the CLI and
//! any future transport can parse inputs uniformly. Transport parsing is
//! case-sensitive on purpose: the speed table is keyed by exact mode names
//! and unknown modes fall back to a default speed rather than erroring.

use serde::{Deserialize, Serialize};

/// Social group the outing is for.
///
/// # Examples
/// ```
/// use hangspot_core::GroupType;
///
/// assert_eq!("Friends".parse::<GroupType>(), Ok(GroupType::Friends));
/// assert_eq!(GroupType::Colleagues.to_string(), "colleagues");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    /// Going alone.
    Solo,
    /// A group of friends.
    Friends,
    /// A couple.
    Couple,
    /// A family outing.
    Family,
    /// A work group.
    Colleagues,
}

impl GroupType {
    /// Return the group as a lowercase `&str`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Friends => "friends",
            Self::Couple => "couple",
            Self::Family => "family",
            Self::Colleagues => "colleagues",
        }
    }
}

impl std::fmt::Display for GroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GroupType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solo" => Ok(Self::Solo),
            "friends" => Ok(Self::Friends),
            "couple" => Ok(Self::Couple),
            "family" => Ok(Self::Family),
            "colleagues" => Ok(Self::Colleagues),
            _ => Err(format!("unknown group type '{s}'")),
        }
    }
}

/// Spending budget tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    /// Street-food money.
    Low,
    /// Cafe money.
    Medium,
    /// Restaurant money.
    High,
}

impl Budget {
    /// Return the budget as a lowercase `&str`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Budget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown budget '{s}'")),
        }
    }
}

/// Time the user can spend on the outing.
///
/// The time budget caps how far a venue may be: one hour keeps venues
/// within 1 km, two hours within 2 km, four hours within 4 km.
///
/// # Examples
/// ```
/// use hangspot_core::TimeBudget;
///
/// assert_eq!("2".parse::<TimeBudget>(), Ok(TimeBudget::TwoHours));
/// assert_eq!(TimeBudget::FourHours.max_distance_km(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeBudget {
    /// About one hour.
    #[serde(rename = "1")]
    OneHour,
    /// About two hours.
    #[serde(rename = "2")]
    TwoHours,
    /// About four hours.
    #[serde(rename = "4")]
    FourHours,
}

impl TimeBudget {
    /// Return the budget in hours as a `&str`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneHour => "1",
            Self::TwoHours => "2",
            Self::FourHours => "4",
        }
    }

    /// Hard distance ceiling in kilometres for this time budget.
    pub fn max_distance_km(self) -> f64 {
        match self {
            Self::OneHour => 1.0,
            Self::TwoHours => 2.0,
            Self::FourHours => 4.0,
        }
    }
}

impl std::fmt::Display for TimeBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeBudget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::OneHour),
            "2" => Ok(Self::TwoHours),
            "4" => Ok(Self::FourHours),
            _ => Err(format!("unknown time budget '{s}' (expected 1, 2, or 4)")),
        }
    }
}

/// Transport mode used to reach the venue.
///
/// Parsing is case-sensitive: only the exact lowercase names match, and
/// callers are expected to treat a parse failure as "no known mode" so the
/// speed table's fallback applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// On foot.
    Walk,
    /// Bicycle.
    Bike,
    /// Private car.
    Car,
    /// Public bus.
    Bus,
}

impl TransportMode {
    /// Return the mode as a lowercase `&str`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Bike => "bike",
            Self::Car => "car",
            Self::Bus => "bus",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walk" => Ok(Self::Walk),
            "bike" => Ok(Self::Bike),
            "car" => Ok(Self::Car),
            "bus" => Ok(Self::Bus),
            _ => Err(format!("unknown transport mode '{s}'")),
        }
    }
}

/// Everything the user told us about the outing.
///
/// Constructed per request and never persisted. `transport` is optional;
/// when absent the speed table's fallback speed estimates arrival times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserPreferences {
    /// Social group the outing is for.
    pub group: GroupType,
    /// Spending budget tier.
    pub budget: Budget,
    /// Available time, which caps venue distance.
    pub time_budget: TimeBudget,
    /// Transport mode, when a known one was supplied.
    pub transport: Option<TransportMode>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            group: GroupType::Friends,
            budget: Budget::Medium,
            time_budget: TimeBudget::TwoHours,
            transport: Some(TransportMode::Car),
        }
    }
}
