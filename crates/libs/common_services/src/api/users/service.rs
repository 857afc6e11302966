use crate::api::users::error::UserError;
use crate::api::users::interfaces::UpdateProfileRequest;
use crate::database::app_user::{PublicProfile, User};
use crate::database::user_store::UserStore;
use sqlx::PgPool;

/// The authenticated caller's own profile.
pub async fn get_profile(pool: &PgPool, user_id: i32) -> Result<User, UserError> {
    UserStore::find_by_id(pool, user_id)
        .await?
        .ok_or(UserError::NotFound)
}

/// Applies a partial profile update. Bio and avatar are the only mutable
/// fields; username and email stay fixed after registration.
pub async fn update_profile(
    pool: &PgPool,
    user_id: i32,
    payload: &UpdateProfileRequest,
) -> Result<User, UserError> {
    Ok(UserStore::update_profile(
        pool,
        user_id,
        payload.bio.as_deref(),
        payload.avatar.as_deref(),
    )
    .await?)
}

/// Public lookup by username; the email is not exposed.
pub async fn get_public_profile(
    pool: &PgPool,
    username: &str,
) -> Result<PublicProfile, UserError> {
    UserStore::find_by_username(pool, username)
        .await?
        .ok_or(UserError::NotFound)
}
