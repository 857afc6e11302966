use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Database error")]
    Database(DbError),

    #[error("User not found")]
    NotFound,
}

impl From<DbError> for UserError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(sqlx::Error::RowNotFound) => Self::NotFound,
            other => Self::Database(other),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Database(e) => {
                warn!("Users -> database query failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred.",
                )
            }
            Self::NotFound => (StatusCode::NOT_FOUND, "User not found"),
        };

        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::UserError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn missing_user_is_not_found() {
        assert_eq!(
            UserError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
