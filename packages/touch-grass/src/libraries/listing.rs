use crate::libraries::distance::distance;
use crate::libraries::place_type::{display_label, CanonicalPlaceType};
use crate::models::{GeoPoint, Place, PlaceSummary};

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// Google Maps search link for a result, narrowed by its plus code when known
pub fn maps_link(place: &Place) -> String {
    let mut link = format!("{}{}", MAPS_SEARCH_URL, urlencoding::encode(&place.name));
    if let Some(code) = place
        .plus_code
        .as_ref()
        .and_then(|p| p.compound_code.as_deref())
    {
        link.push('+');
        link.push_str(&urlencoding::encode(code));
    }
    link
}

/// Whole meters with an "m" suffix
pub fn format_distance(meters: f64) -> String {
    format!("{:.0}m", meters)
}

/// Measure every result from `origin` and order them nearest first.
///
/// Results without a location (or a missing origin) measure as 0m and so sort
/// to the front, keeping their upstream order among themselves.
pub fn summarize(origin: Option<&GeoPoint>, places: &[Place]) -> Vec<PlaceSummary> {
    let mut summaries: Vec<PlaceSummary> = places
        .iter()
        .map(|place| {
            let destination = place.location().map(GeoPoint::from);
            let meters = distance(origin, destination.as_ref());
            PlaceSummary {
                name: place.name.clone(),
                link: maps_link(place),
                distance_meters: meters,
                distance_label: format_distance(meters),
                icon: place.icon.clone(),
                vicinity: place.vicinity.clone(),
            }
        })
        .collect();

    summaries.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));
    summaries
}

/// List heading for a category, e.g. "Parks near you"
pub fn heading(place_type: &CanonicalPlaceType, found: bool) -> String {
    let label = display_label(place_type);
    if found {
        format!("{} near you", capitalize(&label))
    } else {
        format!("We couldn't find any {} nearby, sorry about that.", label)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libraries::place_type::resolve_place_type;
    use crate::models::{Geometry, PlaceLocation, PlusCode};

    fn place(name: &str, location: Option<(f64, f64)>) -> Place {
        Place {
            name: name.to_string(),
            geometry: location.map(|(lat, lng)| Geometry {
                location: Some(PlaceLocation { lat, lng }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_maps_link_without_plus_code() {
        let link = maps_link(&place("Hyde Park", None));
        assert_eq!(link, "https://www.google.com/maps/search/Hyde%20Park");
    }

    #[test]
    fn test_maps_link_with_plus_code() {
        let mut hyde = place("Hyde Park", None);
        hyde.plus_code = Some(PlusCode {
            compound_code: Some("GV3C+X6 London".to_string()),
            global_code: None,
        });
        assert_eq!(
            maps_link(&hyde),
            "https://www.google.com/maps/search/Hyde%20Park+GV3C%2BX6%20London"
        );
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.0), "0m");
        assert_eq!(format_distance(342.6), "343m");
        assert_eq!(format_distance(1_234.2), "1234m");
    }

    #[test]
    fn test_summarize_sorts_by_distance() {
        let origin = GeoPoint::new(51.5007, -0.1246);
        let places = vec![
            place("Far", Some((51.5200, -0.1246))),
            place("Near", Some((51.5010, -0.1246))),
            place("Middle", Some((51.5100, -0.1246))),
        ];

        let summaries = summarize(Some(&origin), &places);
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Near", "Middle", "Far"]);
        assert!(summaries[0].distance_meters > 0.0);
        assert!(summaries.windows(2).all(|w| w[0].distance_meters <= w[1].distance_meters));
    }

    #[test]
    fn test_summarize_missing_locations() {
        let places = vec![place("Nowhere", None), place("Somewhere", Some((48.8566, 2.3522)))];

        let without_origin = summarize(None, &places);
        assert!(without_origin.iter().all(|s| s.distance_meters == 0.0));
        assert!(without_origin.iter().all(|s| s.distance_label == "0m"));
        assert_eq!(without_origin[0].name, "Nowhere");

        let origin = GeoPoint::new(51.5007, -0.1246);
        let with_origin = summarize(Some(&origin), &places);
        assert_eq!(with_origin[0].name, "Nowhere");
        assert_eq!(with_origin[0].distance_meters, 0.0);
        assert!(with_origin[1].distance_meters > 300_000.0);
    }

    #[test]
    fn test_heading() {
        let parks = resolve_place_type("grass").unwrap();
        assert_eq!(heading(&parks, true), "Parks near you");
        assert_eq!(
            heading(&parks, false),
            "We couldn't find any parks nearby, sorry about that."
        );

        let stations = resolve_place_type("gas_stations").unwrap();
        assert_eq!(heading(&stations, true), "Gas stations near you");
    }
}
