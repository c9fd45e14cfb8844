use std::fmt;

/// Place types accepted by the Places API nearby search.
///
/// Owned by Google; update here when their list changes.
pub const PLACE_TYPES: &[&str] = &[
    "accounting",
    "airport",
    "amusement_park",
    "aquarium",
    "art_gallery",
    "atm",
    "bakery",
    "bank",
    "bar",
    "beauty_salon",
    "bicycle_store",
    "book_store",
    "bowling_alley",
    "bus_station",
    "cafe",
    "campground",
    "car_dealer",
    "car_rental",
    "car_repair",
    "car_wash",
    "casino",
    "cemetery",
    "church",
    "city_hall",
    "clothing_store",
    "convenience_store",
    "courthouse",
    "dentist",
    "department_store",
    "doctor",
    "drugstore",
    "electrician",
    "electronics_store",
    "embassy",
    "fire_station",
    "florist",
    "funeral_home",
    "furniture_store",
    "gas_station",
    "gym",
    "hair_care",
    "hardware_store",
    "hindu_temple",
    "home_goods_store",
    "hospital",
    "insurance_agency",
    "jewelry_store",
    "laundry",
    "lawyer",
    "library",
    "light_rail_station",
    "liquor_store",
    "local_government_office",
    "locksmith",
    "lodging",
    "meal_delivery",
    "meal_takeaway",
    "mosque",
    "movie_rental",
    "movie_theater",
    "moving_company",
    "museum",
    "night_club",
    "painter",
    "park",
    "parking",
    "pet_store",
    "pharmacy",
    "physiotherapist",
    "plumber",
    "police",
    "post_office",
    "primary_school",
    "real_estate_agency",
    "restaurant",
    "roofing_contractor",
    "rv_park",
    "school",
    "secondary_school",
    "shoe_store",
    "shopping_mall",
    "spa",
    "stadium",
    "storage",
    "store",
    "subway_station",
    "supermarket",
    "synagogue",
    "taxi_stand",
    "tourist_attraction",
    "train_station",
    "transit_station",
    "travel_agency",
    "university",
    "veterinary_care",
    "zoo",
];

/// Words `plural` leaves alone: uncountable, already plural, or pronouns.
const PLURAL_EXCEPTIONS: &[&str] = &[
    "grass",
    "police",
    "sheep",
    "fish",
    "deer",
    "series",
    "species",
    "news",
    "clothing",
    "parking",
    "storage",
    "laundry",
    "accounting",
    "hair_care",
    "veterinary_care",
    "lodging",
    "meal_delivery",
    "meal_takeaway",
    "i",
    "me",
    "you",
    "he",
    "him",
    "she",
    "her",
    "it",
    "we",
    "us",
    "they",
    "them",
];

/// A place type the Places API understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalPlaceType(&'static str);

impl CanonicalPlaceType {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    fn lookup(label: &str) -> Option<Self> {
        PLACE_TYPES
            .iter()
            .copied()
            .find(|known| *known == label)
            .map(CanonicalPlaceType)
    }
}

impl fmt::Display for CanonicalPlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceTypeError {
    #[error("Unsupported place type: {0}")]
    UnsupportedCategory(String),
}

/// Map a user supplied category ("parks", "restaurant", "vets") to a
/// canonical place type.
///
/// "grass" always means parks. Other labels are singularized, then matched
/// against `PLACE_TYPES`, then against the aliases. Aliases are matched on the
/// singular form so "vets" resolves like "vet".
pub fn resolve_place_type(label: &str) -> Result<CanonicalPlaceType, PlaceTypeError> {
    let normalized = label.trim().to_lowercase();

    if normalized == "grass" {
        return Ok(CanonicalPlaceType("park"));
    }

    let singular = singularize(&normalized);

    if let Some(place_type) = CanonicalPlaceType::lookup(&singular) {
        return Ok(place_type);
    }

    match singular.as_str() {
        "vet" => Ok(CanonicalPlaceType("veterinary_care")),
        _ => Err(PlaceTypeError::UnsupportedCategory(label.to_string())),
    }
}

/// Undo regular English pluralization. Irregular plurals ("churches",
/// "people") are not handled.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        format!("{}y", stem)
    } else if let Some(stem) = word.strip_suffix('s') {
        stem.to_string()
    } else {
        word.to_string()
    }
}

/// Best-effort plural for UI labels
pub fn plural(word: &str) -> String {
    if PLURAL_EXCEPTIONS.contains(&word.to_lowercase().as_str()) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix('y') {
        let before_y = stem.chars().last();
        if matches!(before_y, Some(c) if !"aeiou".contains(c.to_ascii_lowercase())) {
            return format!("{}ies", stem);
        }
    }

    if ["s", "x", "z", "sh", "ch"].iter().any(|suffix| word.ends_with(suffix)) {
        return format!("{}es", word);
    }

    format!("{}s", word)
}

/// Plural, human readable label for a place type ("gas_station" -> "gas stations")
pub fn display_label(place_type: &CanonicalPlaceType) -> String {
    plural(place_type.as_str()).replace('_', " ")
}
