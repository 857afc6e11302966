use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use tracing::{error, info, warn};

#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    InvalidCredentials,
    EmailTaken,
    UsernameTaken,
    Validation(String),
    Internal(eyre::Report),
}

fn log_auth_failure(err: &AuthError) {
    match err {
        AuthError::MissingToken => warn!("Authentication failed: Missing Authorization token."),
        AuthError::InvalidToken => warn!("Authentication failed: Invalid token provided."),
        AuthError::InvalidCredentials => {
            // Info to reduce noise; wrong passwords are routine.
            info!("Authentication failed: Invalid credentials provided.");
        }
        AuthError::EmailTaken => info!("Registration failed: email already registered."),
        AuthError::UsernameTaken => info!("Registration failed: username already taken."),
        AuthError::Validation(message) => info!("Registration rejected: {}", message),
        AuthError::Internal(e) => {
            error!("Internal server error during authentication: {:?}", e);
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        log_auth_failure(&self);

        let (status, message) = match self {
            AuthError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid email or password".into())
            }
            AuthError::MissingToken | AuthError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "Authentication failed".into())
            }
            AuthError::EmailTaken => (StatusCode::CONFLICT, "Email is already registered".into()),
            AuthError::UsernameTaken => (StatusCode::CONFLICT, "Username is already taken".into()),
            AuthError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AuthError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".into(),
            ),
        };

        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}

// Allows `?` on sqlx, hashing and jwt errors inside auth code.
impl<E> From<E> for AuthError
where
    E: Into<eyre::Report>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::AuthError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn credential_and_token_failures_are_unauthorized() {
        for err in [
            AuthError::InvalidCredentials,
            AuthError::MissingToken,
            AuthError::InvalidToken,
        ] {
            assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn duplicate_identity_is_conflict() {
        assert_eq!(
            AuthError::EmailTaken.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AuthError::UsernameTaken.into_response().status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn validation_failure_is_bad_request() {
        let response = AuthError::Validation("Username is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
