use crate::api_state::ApiContext;
use crate::auth::middlewares::user::ApiUser;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use common_services::api::users::error::UserError;
use common_services::api::users::interfaces::UpdateProfileRequest;
use common_services::api::users::service::{get_profile, get_public_profile, update_profile};
use common_services::database::app_user::{PublicProfile, User};

/// The authenticated caller's own profile, email included.
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "The caller's profile", body = User),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_me_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<ApiUser>,
) -> Result<Json<User>, UserError> {
    Ok(Json(get_profile(&context.pool, user.id).await?))
}

/// Partial profile update; only bio and avatar are mutable.
#[utoipa::path(
    put,
    path = "/api/users/profile",
    tag = "Users",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "The updated profile", body = User),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_profile_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<ApiUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<User>, UserError> {
    Ok(Json(update_profile(&context.pool, user.id, &payload).await?))
}

/// Public profile lookup by username.
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    tag = "Users",
    params(("username" = String, Path, description = "The account's username.")),
    responses(
        (status = 200, description = "The public profile", body = PublicProfile),
        (status = 404, description = "No account with that username"),
    )
)]
pub async fn get_user_handler(
    State(context): State<ApiContext>,
    Path(username): Path<String>,
) -> Result<Json<PublicProfile>, UserError> {
    Ok(Json(get_public_profile(&context.pool, &username).await?))
}
