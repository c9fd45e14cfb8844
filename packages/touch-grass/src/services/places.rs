use anyhow::{anyhow, Result};
use std::error::Error;
use std::time::Duration;

use crate::libraries::place_type::CanonicalPlaceType;
use crate::models::{GeoPoint, NearbySearchResponse};

pub const DEFAULT_PLACES_ROOT: &str = "https://maps.googleapis.com/maps/api/place";

/// Client for the Places API nearby search
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    root: String,
    api_key: String,
}

impl PlacesClient {
    pub fn new(root: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("touch-grass/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            root: root.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Search for places of `place_type` around `origin`, nearest first.
    ///
    /// A non-`OK` API status such as `ZERO_RESULTS` is returned to the caller,
    /// only transport failures and non-2xx responses are errors.
    pub async fn nearby_search(
        &self,
        origin: &GeoPoint,
        place_type: &CanonicalPlaceType,
    ) -> Result<NearbySearchResponse> {
        let url = format!("{}/nearbysearch/json", self.root);
        let location = format!("{},{}", origin.latitude, origin.longitude);

        tracing::info!(
            "🌍 Querying Places API for {} at ({}, {})",
            place_type,
            origin.latitude,
            origin.longitude
        );

        let response = self
            .http
            .get(&url)
            .query(&[
                ("location", location.as_str()),
                ("rankby", "distance"),
                ("type", place_type.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                let error_msg = format!("Places API request failed: {}", error_chain(&e));
                tracing::warn!("{}", error_msg);
                anyhow!(error_msg)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Places API returned HTTP {}", status);
            return Err(anyhow!("Places API returned error: {}", status));
        }

        let data: NearbySearchResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse Places response: {}", e))?;

        if let Some(message) = &data.error_message {
            tracing::warn!("Places API status {}: {}", data.status, message);
        } else {
            tracing::debug!(
                "✅ Places API responded with {} ({} results)",
                data.status,
                data.results.len()
            );
        }

        Ok(data)
    }
}

/// An error followed by every `source()` beneath it, one per line
fn error_chain(e: &(dyn Error + 'static)) -> String {
    let mut chain = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        chain.push_str(&format!("\n  Caused by: {}", cause));
        source = cause.source();
    }
    chain
}
