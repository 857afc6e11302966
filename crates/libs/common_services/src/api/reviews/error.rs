use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Database error")]
    Database(#[from] DbError),

    #[error("Movie not found")]
    MovieNotFound,

    #[error("Review not found")]
    ReviewNotFound,

    #[error("Not authorized")]
    Forbidden,

    #[error("Bad request: {0}")]
    BadRequest(String),
}

fn log_error(err: &ReviewError) {
    match err {
        ReviewError::Database(e) => warn!("Reviews -> database query failed: {}", e),
        ReviewError::MovieNotFound => warn!("Reviews -> movie not in catalog cache."),
        ReviewError::ReviewNotFound => warn!("Reviews -> review not found."),
        ReviewError::Forbidden => {
            warn!("Reviews -> delete attempted on another account's review.");
        }
        ReviewError::BadRequest(message) => warn!("Reviews -> bad request: {}", message),
    }
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, message) = match self {
            Self::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A database error occurred.".to_string(),
            ),
            Self::MovieNotFound => (StatusCode::NOT_FOUND, "Movie not found".to_string()),
            Self::ReviewNotFound => (StatusCode::NOT_FOUND, "Review not found".to_string()),
            Self::Forbidden => (StatusCode::FORBIDDEN, "Not authorized".to_string()),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}
