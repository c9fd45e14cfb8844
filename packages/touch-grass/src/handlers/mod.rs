pub mod assets;
pub mod error;
pub mod nearby;

use axum::{response::IntoResponse, Json};

pub use error::AppError;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "touch-grass",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
