use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::libraries::place_type::PlaceTypeError;

/// Failures surfaced to HTTP clients as plain-text responses
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("400 Bad Request")]
    BadRequest,

    #[error(transparent)]
    UnsupportedCategory(#[from] PlaceTypeError),

    #[error("404 Not Found")]
    NotFound,

    #[error("504 Internal Server Error")]
    Upstream(anyhow::Error),

    #[error("500 Internal Server Error")]
    Asset(#[source] std::io::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest | AppError::UnsupportedCategory(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Asset(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Upstream(e) => tracing::error!("Upstream search failed: {:#}", e),
            AppError::Asset(e) => tracing::error!("Failed to read static asset: {}", e),
            _ => tracing::debug!("Rejected request: {}", self),
        }

        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain")],
            self.to_string(),
        )
            .into_response()
    }
}
