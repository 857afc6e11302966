use crate::api::auth::error::AuthError;
use crate::api::auth::hashing::{hash_password, verify_password};
use crate::api::auth::interfaces::{AuthResponse, LoginRequest, RegisterRequest};
use crate::api::auth::token::create_token;
use crate::database::DbError;
use crate::database::app_user::User;
use crate::database::user_store::UserStore;
use app_state::constants;
use sqlx::PgPool;
use tracing::info;

fn validate_registration(payload: &RegisterRequest) -> Result<(), AuthError> {
    if payload.username.trim().is_empty() {
        return Err(AuthError::Validation("Username is required".into()));
    }
    if payload.email.trim().is_empty() {
        return Err(AuthError::Validation("Email is required".into()));
    }
    if payload.password.is_empty() {
        return Err(AuthError::Validation("Password is required".into()));
    }
    Ok(())
}

/// Creates a new account and mints its first bearer token.
///
/// Uniqueness of username and email is enforced by the storage layer; a
/// violated constraint is translated to the matching conflict error instead
/// of being pre-checked with racy existence queries.
pub async fn register(
    pool: &PgPool,
    jwt_secret: &str,
    payload: &RegisterRequest,
) -> Result<AuthResponse, AuthError> {
    validate_registration(payload)?;

    let hashed = hash_password(payload.password.as_ref())?;
    info!(
        "Creating user username={}, email={}",
        payload.username, payload.email
    );

    let user = match UserStore::create(pool, &payload.username, &payload.email, &hashed).await {
        Ok(user) => user,
        Err(DbError::UniqueViolation { constraint, .. }) => {
            return Err(if constraint == "app_user_email_key" {
                AuthError::EmailTaken
            } else {
                AuthError::UsernameTaken
            });
        }
        Err(other) => return Err(other.into()),
    };

    let token = create_token(jwt_secret, user.id, constants().auth.token_expiry_days)?;
    Ok(AuthResponse { token, user })
}

/// Checks credentials and mints a bearer token. Unknown email and wrong
/// password are indistinguishable to the caller.
pub async fn login(
    pool: &PgPool,
    jwt_secret: &str,
    payload: &LoginRequest,
) -> Result<AuthResponse, AuthError> {
    let user = authenticate_user(pool, &payload.email, &payload.password).await?;
    let token = create_token(jwt_secret, user.id, constants().auth.token_expiry_days)?;
    Ok(AuthResponse { token, user })
}

async fn authenticate_user(pool: &PgPool, email: &str, password: &str) -> Result<User, AuthError> {
    let user = UserStore::find_by_email_with_password(pool, email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let valid = verify_password(password.as_ref(), &user.password)?;
    if !valid {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user.into())
}

#[cfg(test)]
mod tests {
    use super::validate_registration;
    use crate::api::auth::error::AuthError;
    use crate::api::auth::interfaces::RegisterRequest;

    fn request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn blank_fields_are_rejected() {
        for bad in [
            request("", "a@b.c", "pw"),
            request("  ", "a@b.c", "pw"),
            request("alice", "", "pw"),
            request("alice", "a@b.c", ""),
        ] {
            assert!(matches!(
                validate_registration(&bad),
                Err(AuthError::Validation(_))
            ));
        }
    }

    #[test]
    fn complete_registration_passes() {
        assert!(validate_registration(&request("alice", "a@b.c", "pw")).is_ok());
    }
}
