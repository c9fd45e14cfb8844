use axum::{
    extract::{Query, State},
    Json,
};
use tracing::debug;

use super::error::AppError;
use crate::{
    libraries::{
        listing::{heading, summarize},
        place_type::{resolve_place_type, CanonicalPlaceType},
    },
    models::{GeoPoint, GrassResponse, NearbyQuery, NearbyResponse, NearbySearchResponse},
    AppState,
};

/// Relay the upstream results unchanged, in the shape the web client reads
pub async fn grass_json(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<GrassResponse>, AppError> {
    let (_, _, response) = search(&state, &query).await?;

    Ok(Json(GrassResponse {
        parks: response.results,
        status: response.status,
    }))
}

/// Results measured from the caller, sorted nearest first and linked to Maps
pub async fn nearby_json(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<NearbyResponse>, AppError> {
    let (origin, place_type, response) = search(&state, &query).await?;
    let places = summarize(Some(&origin), &response.results);

    Ok(Json(NearbyResponse {
        place_type: place_type.to_string(),
        heading: heading(&place_type, !places.is_empty()),
        status: response.status,
        origin,
        places,
    }))
}

async fn search(
    state: &AppState,
    query: &NearbyQuery,
) -> Result<(GeoPoint, CanonicalPlaceType, NearbySearchResponse), AppError> {
    let origin = query.point().ok_or(AppError::BadRequest)?;
    let place_type = resolve_place_type(query.category())?;

    debug!(
        "Searching {} near ({}, {})",
        place_type, origin.latitude, origin.longitude
    );

    let response = state
        .places
        .nearby_search(&origin, &place_type)
        .await
        .map_err(AppError::Upstream)?;

    Ok((origin, place_type, response))
}
