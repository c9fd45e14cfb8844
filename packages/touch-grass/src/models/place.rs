use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::location::PlaceLocation;

/// Nearby search response envelope from the Places API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbySearchResponse {
    #[serde(default)]
    pub results: Vec<Place>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// A single search result.
///
/// Only the fields the service reads are typed; everything else the API
/// returns is kept in `extra` so it can be relayed to clients unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plus_code: Option<PlusCode>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Place {
    pub fn location(&self) -> Option<PlaceLocation> {
        self.geometry.as_ref().and_then(|g| g.location)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PlaceLocation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlusCode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_code: Option<String>,
}
