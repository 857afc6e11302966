use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum FavoriteError {
    #[error("Database error")]
    Database(#[from] DbError),

    #[error("Movie already in favorites")]
    AlreadyFavorite,
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Database(e) => {
                warn!("Favorites -> database query failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred.",
                )
            }
            Self::AlreadyFavorite => {
                info!("Favorites -> duplicate add rejected.");
                (StatusCode::BAD_REQUEST, "Movie already in favorites")
            }
        };

        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::FavoriteError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn duplicate_add_is_bad_request() {
        assert_eq!(
            FavoriteError::AlreadyFavorite.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
