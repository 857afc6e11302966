use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("Database error")]
    Database(#[from] DbError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

fn log_error(err: &CollectionError) {
    match err {
        CollectionError::Database(e) => warn!("Collections -> database query failed: {}", e),
        CollectionError::NotFound(id) => warn!("Collections -> not found: {}", id),
        CollectionError::BadRequest(message) => warn!("Collections -> bad request: {}", message),
    }
}

impl IntoResponse for CollectionError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, message) = match self {
            Self::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A database error occurred.".to_string(),
            ),
            // Missing and not-owned are deliberately the same answer.
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Collection not found".to_string()),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::CollectionError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn unknown_collection_is_not_found() {
        let response = CollectionError::NotFound("abc123".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_payload_is_bad_request() {
        let response = CollectionError::BadRequest("Name is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
