use crate::api_state::ApiContext;
use crate::auth::middlewares::user::ApiUser;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use common_services::api::favorites::error::FavoriteError;
use common_services::api::favorites::interfaces::CheckFavoriteResponse;
use common_services::api::favorites::service::{
    add_favorite, check_favorite, list_favorites, remove_favorite,
};
use common_services::database::movie::{Movie, NewMovie};
use tracing::instrument;

/// The caller's favorite movies in the order they were added.
#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = "Favorites",
    responses(
        (status = 200, description = "The caller's favorites", body = Vec<Movie>),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_favorites_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<ApiUser>,
) -> Result<Json<Vec<Movie>>, FavoriteError> {
    Ok(Json(list_favorites(&context.pool, user.id).await?))
}

/// Adds a movie to the caller's favorites, caching its metadata on first
/// sight, and returns the updated list.
#[utoipa::path(
    post,
    path = "/api/favorites",
    tag = "Favorites",
    request_body = NewMovie,
    responses(
        (status = 200, description = "The updated favorites list", body = Vec<Movie>),
        (status = 400, description = "Movie already in favorites"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context, user, payload), err(Debug))]
pub async fn add_favorite_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<ApiUser>,
    Json(payload): Json<NewMovie>,
) -> Result<Json<Vec<Movie>>, FavoriteError> {
    Ok(Json(add_favorite(&context.pool, user.id, &payload).await?))
}

/// Removes a movie from the caller's favorites; removing an absent movie is
/// a successful no-op.
#[utoipa::path(
    delete,
    path = "/api/favorites/{tmdb_id}",
    tag = "Favorites",
    params(("tmdb_id" = i64, Path, description = "The external catalog id.")),
    responses(
        (status = 200, description = "The updated favorites list", body = Vec<Movie>),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove_favorite_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<ApiUser>,
    Path(tmdb_id): Path<i64>,
) -> Result<Json<Vec<Movie>>, FavoriteError> {
    Ok(Json(remove_favorite(&context.pool, user.id, tmdb_id).await?))
}

/// Whether the movie is in the caller's favorites. Uncached movies simply
/// answer `false`.
#[utoipa::path(
    get,
    path = "/api/favorites/check/{tmdb_id}",
    tag = "Favorites",
    params(("tmdb_id" = i64, Path, description = "The external catalog id.")),
    responses(
        (status = 200, description = "Membership answer", body = CheckFavoriteResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn check_favorite_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<ApiUser>,
    Path(tmdb_id): Path<i64>,
) -> Result<Json<CheckFavoriteResponse>, FavoriteError> {
    let is_favorite = check_favorite(&context.pool, user.id, tmdb_id).await?;
    Ok(Json(CheckFavoriteResponse { is_favorite }))
}
