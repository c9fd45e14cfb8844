use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::path::Path;

use super::error::AppError;
use crate::{AppState, MOUNT_PREFIX};

pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    serve_file(Path::new(&state.config.client_dir).join("index.html"), "text/html").await
}

pub async fn script(State(state): State<AppState>) -> Result<Response, AppError> {
    serve_file(Path::new(&state.config.bundle_dir).join("bundle.js"), "text/javascript").await
}

pub async fn stylesheet(State(state): State<AppState>) -> Result<Response, AppError> {
    serve_file(Path::new(&state.config.bundle_dir).join("main.css"), "text/css").await
}

/// `/touch_grass` without the trailing slash, so relative asset paths resolve
pub async fn redirect_to_mount(headers: HeaderMap) -> Response {
    let location = match headers.get(header::HOST).and_then(|h| h.to_str().ok()) {
        Some(host) => format!("http://{}{}/", host, MOUNT_PREFIX),
        None => format!("{}/", MOUNT_PREFIX),
    };

    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

async fn serve_file(path: impl AsRef<Path>, content_type: &'static str) -> Result<Response, AppError> {
    let body = tokio::fs::read(path.as_ref()).await.map_err(AppError::Asset)?;
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, content_type)], body).into_response())
}
