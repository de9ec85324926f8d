//! Mapping from user-facing interest categories to POI category tags.

/// Category tags associated with each interest, keyed case-insensitively.
const INTEREST_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "art",
        &["art_gallery", "museum", "painter", "art_studio", "craft"],
    ),
    (
        "culture",
        &[
            "museum",
            "art_gallery",
            "cultural_center",
            "library",
            "historical_landmark",
            "landmark",
            "place_of_worship",
        ],
    ),
    (
        "adventure",
        &[
            "amusement_park",
            "theme_park",
            "water_park",
            "zoo",
            "aquarium",
            "park",
            "hiking_area",
            "campground",
        ],
    ),
    (
        "nature",
        &[
            "park",
            "natural_feature",
            "hiking_area",
            "campground",
            "beach",
            "waterfall",
            "mountain",
            "forest",
            "lake",
            "river",
        ],
    ),
    (
        "food",
        &[
            "restaurant",
            "cafe",
            "food",
            "bar",
            "bakery",
            "meal_takeaway",
            "meal_delivery",
            "food_court",
        ],
    ),
    (
        "shopping",
        &[
            "shopping_mall",
            "department_store",
            "store",
            "market",
            "supermarket",
            "clothing_store",
            "jewelry_store",
            "book_store",
        ],
    ),
    (
        "history",
        &[
            "historical_landmark",
            "museum",
            "monument",
            "heritage",
            "archaeological_site",
            "castle",
            "fort",
            "memorial",
        ],
    ),
    (
        "religion",
        &[
            "place_of_worship",
            "church",
            "mosque",
            "temple",
            "hindu_temple",
            "buddhist_temple",
            "synagogue",
        ],
    ),
    (
        "entertainment",
        &[
            "night_club",
            "bar",
            "movie_theater",
            "casino",
            "bowling_alley",
            "amusement_park",
            "tourist_attraction",
        ],
    ),
    (
        "relaxation",
        &[
            "spa",
            "beauty_salon",
            "park",
            "beach",
            "resort",
            "tourist_attraction",
            "scenic_overlook",
        ],
    ),
];

/// Category tags associated with a requested interest, if the interest is
/// known. Lookup is case-insensitive.
pub(crate) fn tags_for_interest(interest: &str) -> Option<&'static [&'static str]> {
    INTEREST_CATEGORIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(interest))
        .map(|(_, tags)| *tags)
}

/// Whether any of the POI's category tags falls under any requested
/// interest.
pub(crate) fn matches_interests(categories: &[String], interests: &[String]) -> bool {
    interests
        .iter()
        .filter_map(|interest| tags_for_interest(interest))
        .any(|tags| {
            categories
                .iter()
                .any(|category| tags.iter().any(|tag| tag.eq_ignore_ascii_case(category)))
        })
}
