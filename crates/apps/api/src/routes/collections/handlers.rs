use crate::api_state::ApiContext;
use crate::auth::middlewares::user::ApiUser;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use common_services::api::collections::error::CollectionError;
use common_services::api::collections::interfaces::{
    AddCollectionMovieRequest, CreateCollectionRequest,
};
use common_services::api::collections::service::{
    add_movie, create_collection, delete_collection, list_collections, list_movies, remove_movie,
};
use common_services::database::collection::{Collection, CollectionWithMovies};
use common_services::database::movie::Movie;
use serde_json::json;
use tracing::instrument;

/// Creates a new, empty collection owned by the caller.
#[utoipa::path(
    post,
    path = "/api/collections",
    tag = "Collections",
    request_body = CreateCollectionRequest,
    responses(
        (status = 201, description = "Collection created", body = Collection),
        (status = 400, description = "Name is missing or blank"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context, user), err(Debug))]
pub async fn create_collection_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<ApiUser>,
    Json(payload): Json<CreateCollectionRequest>,
) -> Result<(StatusCode, Json<Collection>), CollectionError> {
    let collection = create_collection(&context.pool, user.id, &payload.name).await?;
    Ok((StatusCode::CREATED, Json(collection)))
}

/// All of the caller's collections with their movies expanded.
#[utoipa::path(
    get,
    path = "/api/collections",
    tag = "Collections",
    responses(
        (status = 200, description = "The caller's collections", body = Vec<CollectionWithMovies>),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_collections_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<ApiUser>,
) -> Result<Json<Vec<CollectionWithMovies>>, CollectionError> {
    Ok(Json(list_collections(&context.pool, user.id).await?))
}

/// Adds a movie to a collection the caller owns. A movie that is already a
/// member is left in place.
#[utoipa::path(
    post,
    path = "/api/collections/{collection_id}/movies",
    tag = "Collections",
    params(("collection_id" = String, Path, description = "The collection id.")),
    request_body = AddCollectionMovieRequest,
    responses(
        (status = 200, description = "The collection with movies", body = CollectionWithMovies),
        (status = 404, description = "Collection missing or owned by another account"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context, user, payload), err(Debug))]
pub async fn add_collection_movie_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<ApiUser>,
    Path(collection_id): Path<String>,
    Json(payload): Json<AddCollectionMovieRequest>,
) -> Result<Json<CollectionWithMovies>, CollectionError> {
    let collection = add_movie(&context.pool, user.id, &collection_id, &payload.movie).await?;
    Ok(Json(collection))
}

/// Removes a movie reference from a collection the caller owns.
#[utoipa::path(
    delete,
    path = "/api/collections/{collection_id}/movies/{movie_id}",
    tag = "Collections",
    params(
        ("collection_id" = String, Path, description = "The collection id."),
        ("movie_id" = i32, Path, description = "The internal catalog id of the movie.")
    ),
    responses(
        (status = 200, description = "The collection with movies", body = CollectionWithMovies),
        (status = 404, description = "Collection missing or owned by another account"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove_collection_movie_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<ApiUser>,
    Path((collection_id, movie_id)): Path<(String, i32)>,
) -> Result<Json<CollectionWithMovies>, CollectionError> {
    let collection = remove_movie(&context.pool, user.id, &collection_id, movie_id).await?;
    Ok(Json(collection))
}

/// All movies in a collection the caller owns.
#[utoipa::path(
    get,
    path = "/api/collections/{collection_id}/movies",
    tag = "Collections",
    params(("collection_id" = String, Path, description = "The collection id.")),
    responses(
        (status = 200, description = "The collection's movies", body = Vec<Movie>),
        (status = 404, description = "Collection missing or owned by another account"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_collection_movies_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<ApiUser>,
    Path(collection_id): Path<String>,
) -> Result<Json<Vec<Movie>>, CollectionError> {
    Ok(Json(list_movies(&context.pool, user.id, &collection_id).await?))
}

/// Deletes a collection the caller owns, along with its membership rows.
#[utoipa::path(
    delete,
    path = "/api/collections/{collection_id}",
    tag = "Collections",
    params(("collection_id" = String, Path, description = "The collection id.")),
    responses(
        (status = 200, description = "Collection deleted"),
        (status = 404, description = "Collection missing or owned by another account"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context, user), err(Debug))]
pub async fn delete_collection_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<ApiUser>,
    Path(collection_id): Path<String>,
) -> Result<Json<serde_json::Value>, CollectionError> {
    delete_collection(&context.pool, user.id, &collection_id).await?;
    Ok(Json(json!({ "message": "Collection deleted" })))
}
