pub mod config;
pub mod handlers;
pub mod libraries;
pub mod models;
pub mod services;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use config::Config;
use handlers::{assets, health, nearby};
use services::PlacesClient;

/// Path the app is also reachable under when hosted behind a shared domain
pub const MOUNT_PREFIX: &str = "/touch_grass";

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub places: Arc<PlacesClient>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let places = PlacesClient::new(
            &config.places_api_root,
            &config.places_api_key,
            config.upstream_timeout(),
        )?;

        Ok(Self {
            config,
            places: Arc::new(places),
        })
    }
}

/// Every route is served both at the root and under `MOUNT_PREFIX`
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new().route(MOUNT_PREFIX, get(assets::redirect_to_mount));

    for base in ["", MOUNT_PREFIX] {
        router = router
            .route(&format!("{}/", base), get(assets::index))
            .route(&format!("{}/index.html", base), get(assets::index))
            .route(&format!("{}/index.js", base), get(assets::script))
            .route(&format!("{}/main.css", base), get(assets::stylesheet))
            .route(&format!("{}/grass.json", base), get(nearby::grass_json))
            .route(&format!("{}/nearby.json", base), get(nearby::nearby_json))
            .route(&format!("{}/health", base), get(health));
    }

    router
        .fallback(assets::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
