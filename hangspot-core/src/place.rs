//! Venues and their categories.
//!
//! A [`Place`] is one candidate venue produced by cleaning raw geodata
//! elements. Coordinates are WGS84 with `x = longitude` and `y = latitude`.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// Placeholder stored when a venue carries no `opening_hours` tag.
pub const OPENING_HOURS_UNAVAILABLE: &str = "unavailable";

/// Broad venue category derived from geodata tags.
///
/// # Examples
/// ```
/// use hangspot_core::Category;
///
/// assert_eq!(Category::from_tag_value("fast_food"), Category::FastFood);
/// assert_eq!(Category::from_tag_value("biergarten"), Category::Other);
/// assert_eq!(Category::Cafe.to_string(), "cafe");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Sit-down restaurants.
    Restaurant,
    /// Cafes and coffee shops.
    Cafe,
    /// Quick-service food outlets.
    FastFood,
    /// Leisure venues such as parks and game halls.
    Leisure,
    /// Tourist attractions.
    Tourism,
    /// Anything the known tags do not cover.
    Other,
}

impl Category {
    /// Return the category as a lowercase `&str`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Cafe => "cafe",
            Self::FastFood => "fast_food",
            Self::Leisure => "leisure",
            Self::Tourism => "tourism",
            Self::Other => "other",
        }
    }

    /// Map a raw tag value onto a category.
    ///
    /// Unknown values collapse to [`Category::Other`] so that cleaning is
    /// total: every named, located element yields a usable place.
    pub fn from_tag_value(value: &str) -> Self {
        match value {
            "restaurant" => Self::Restaurant,
            "cafe" => Self::Cafe,
            "fast_food" => Self::FastFood,
            "leisure" => Self::Leisure,
            "tourism" => Self::Tourism,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate venue near the user.
///
/// Immutable once constructed; the lifetime is a single request.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use hangspot_core::{Category, Place};
///
/// let place = Place::new(7, "Marina Cafe", Category::Cafe, Coord { x: 80.28, y: 13.05 });
/// assert_eq!(place.opening_hours, "unavailable");
/// assert!(place.popular_items.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Geodata element identifier.
    pub id: u64,
    /// Display name from the `name` tag.
    pub name: String,
    /// Category derived from the element's tags.
    pub category: Category,
    /// Geospatial position (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// Opening hours tag value, or [`OPENING_HOURS_UNAVAILABLE`].
    pub opening_hours: String,
    /// Signature dishes from the `cuisine` tag, in tag order.
    pub popular_items: Vec<String>,
}

impl Place {
    /// Construct a place with no opening hours and no popular items.
    pub fn new(id: u64, name: impl Into<String>, category: Category, location: Coord<f64>) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            location,
            opening_hours: OPENING_HOURS_UNAVAILABLE.to_owned(),
            popular_items: Vec::new(),
        }
    }

    /// Set the opening hours while returning `self` for chaining.
    #[must_use]
    pub fn with_opening_hours(mut self, hours: impl Into<String>) -> Self {
        self.opening_hours = hours.into();
        self
    }

    /// Set the popular items while returning `self` for chaining.
    #[must_use]
    pub fn with_popular_items(mut self, items: Vec<String>) -> Self {
        self.popular_items = items;
        self
    }
}
