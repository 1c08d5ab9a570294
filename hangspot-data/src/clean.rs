//! Clean raw geodata elements into core places.
//!
//! An element must carry a `name` tag and both coordinates to survive;
//! everything else degrades gracefully. Category comes from the first
//! present of the amenity/leisure/tourism tags, collapsing to `Other`.

use std::collections::HashMap;

use geo::Coord;
use hangspot_core::{Category, Place};

use crate::overpass::RawElement;

/// Clean a batch of raw elements, dropping unusable ones.
///
/// Drops are counted and logged, never surfaced as errors: sparse geodata
/// is normal.
pub fn clean_elements(elements: Vec<RawElement>) -> Vec<Place> {
    let total = elements.len();
    let places: Vec<Place> = elements.into_iter().filter_map(clean_element).collect();

    let dropped = total - places.len();
    if dropped > 0 {
        log::warn!("dropped {dropped} of {total} geodata elements without a name or coordinates");
    }
    places
}

fn clean_element(element: RawElement) -> Option<Place> {
    let name = element.tags.get("name")?.clone();
    let lat = element.lat?;
    let lon = element.lon?;

    let category = derive_category(&element.tags);
    let popular_items = element
        .tags
        .get("cuisine")
        .map(|cuisine| {
            cuisine
                .split(';')
                .map(|item| item.trim().to_owned())
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let mut place = Place::new(element.id, name, category, Coord { x: lon, y: lat })
        .with_popular_items(popular_items);
    if let Some(hours) = element.tags.get("opening_hours") {
        place = place.with_opening_hours(hours.clone());
    }
    Some(place)
}

fn derive_category(tags: &HashMap<String, String>) -> Category {
    if let Some(amenity) = tags.get("amenity") {
        return Category::from_tag_value(amenity);
    }
    if tags.contains_key("leisure") {
        return Category::Leisure;
    }
    if tags.contains_key("tourism") {
        return Category::Tourism;
    }
    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangspot_core::OPENING_HOURS_UNAVAILABLE;
    use rstest::rstest;

    fn element(id: u64, tags: &[(&str, &str)]) -> RawElement {
        RawElement {
            id,
            lat: Some(13.05),
            lon: Some(80.28),
            tags: tags
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        }
    }

    #[rstest]
    fn unnamed_elements_are_dropped() {
        let elements = vec![
            element(1, &[("amenity", "cafe")]),
            element(2, &[("name", "Kept"), ("amenity", "cafe")]),
        ];

        let places = clean_elements(elements);

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].id, 2);
    }

    #[rstest]
    fn elements_without_coordinates_are_dropped() {
        let mut missing_lat = element(1, &[("name", "No lat"), ("amenity", "cafe")]);
        missing_lat.lat = None;
        let mut missing_lon = element(2, &[("name", "No lon"), ("amenity", "cafe")]);
        missing_lon.lon = None;

        assert!(clean_elements(vec![missing_lat, missing_lon]).is_empty());
    }

    #[rstest]
    #[case(&[("name", "A"), ("amenity", "restaurant")], Category::Restaurant)]
    #[case(&[("name", "B"), ("amenity", "fast_food")], Category::FastFood)]
    #[case(&[("name", "C"), ("amenity", "biergarten")], Category::Other)]
    #[case(&[("name", "D"), ("leisure", "park")], Category::Leisure)]
    #[case(&[("name", "E"), ("tourism", "museum")], Category::Tourism)]
    #[case(&[("name", "F")], Category::Other)]
    fn category_comes_from_the_first_known_tag(
        #[case] tags: &[(&str, &str)],
        #[case] expected: Category,
    ) {
        let places = clean_elements(vec![element(1, tags)]);
        assert_eq!(places[0].category, expected);
    }

    #[rstest]
    fn amenity_outranks_leisure_and_tourism() {
        let places = clean_elements(vec![element(
            1,
            &[("name", "Cafe in a park"), ("amenity", "cafe"), ("leisure", "garden")],
        )]);
        assert_eq!(places[0].category, Category::Cafe);
    }

    #[rstest]
    fn opening_hours_default_to_the_placeholder() {
        let places = clean_elements(vec![
            element(1, &[("name", "No hours"), ("amenity", "cafe")]),
            element(
                2,
                &[("name", "With hours"), ("amenity", "cafe"), ("opening_hours", "Mo-Su 09:00-21:00")],
            ),
        ]);

        assert_eq!(places[0].opening_hours, OPENING_HOURS_UNAVAILABLE);
        assert_eq!(places[1].opening_hours, "Mo-Su 09:00-21:00");
    }

    #[rstest]
    fn cuisine_tag_becomes_popular_items() {
        let places = clean_elements(vec![element(
            1,
            &[("name", "Mixed"), ("amenity", "restaurant"), ("cuisine", "indian; chinese ;")],
        )]);

        assert_eq!(
            places[0].popular_items,
            vec!["indian".to_owned(), "chinese".to_owned()]
        );
    }
}
