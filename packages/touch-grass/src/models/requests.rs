use serde::{Deserialize, Serialize};

use super::location::GeoPoint;
use super::place::Place;

/// Category used when the request does not name one
pub const DEFAULT_CATEGORY: &str = "grass";

/// Query string accepted by the search endpoints.
///
/// Coordinates stay raw strings here so that a missing or malformed value
/// becomes a plain 400 instead of axum's extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearbyQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
}

impl NearbyQuery {
    /// Parse the coordinate pair. `None` if either is missing, not a number,
    /// or out of range.
    pub fn point(&self) -> Option<GeoPoint> {
        let latitude = self.latitude.as_deref()?.trim().parse::<f64>().ok()?;
        let longitude = self.longitude.as_deref()?.trim().parse::<f64>().ok()?;
        let point = GeoPoint::new(latitude, longitude);
        point.is_valid().then_some(point)
    }

    pub fn category(&self) -> &str {
        match self.place_type.as_deref() {
            Some(label) if !label.trim().is_empty() => label,
            _ => DEFAULT_CATEGORY,
        }
    }
}

/// Body of `/grass.json`: the upstream results relayed as-is
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrassResponse {
    pub parks: Vec<Place>,
    pub status: String,
}

/// Body of `/nearby.json`: results already measured, sorted and linked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyResponse {
    #[serde(rename = "type")]
    pub place_type: String,
    pub heading: String,
    pub status: String,
    pub origin: GeoPoint,
    pub places: Vec<PlaceSummary>,
}

/// One row of the rendered result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSummary {
    pub name: String,
    pub link: String,
    pub distance_meters: f64,
    pub distance_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,
}
