use crate::api_state::ApiContext;
use crate::auth::middlewares::user::ApiUser;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use common_services::api::reviews::error::ReviewError;
use common_services::api::reviews::interfaces::UpsertReviewRequest;
use common_services::api::reviews::service::{
    delete_review, reviews_by_user, reviews_for_movie, upsert_review,
};
use common_services::database::review::{Review, ReviewWithAuthor, ReviewWithMovie};
use serde_json::json;
use tracing::instrument;

/// Creates or replaces the caller's review for a movie. The movie must
/// already be in the catalog cache.
#[utoipa::path(
    post,
    path = "/api/reviews/{tmdb_id}",
    tag = "Reviews",
    params(("tmdb_id" = i64, Path, description = "The external catalog id.")),
    request_body = UpsertReviewRequest,
    responses(
        (status = 201, description = "The stored review", body = Review),
        (status = 400, description = "Rating outside [0, 5] or empty text"),
        (status = 404, description = "Movie not in the catalog cache"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context, user, payload), err(Debug))]
pub async fn upsert_review_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<ApiUser>,
    Path(tmdb_id): Path<i64>,
    Json(payload): Json<UpsertReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ReviewError> {
    let review = upsert_review(
        &context.pool,
        user.id,
        tmdb_id,
        payload.rating,
        &payload.text,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// Public listing of a movie's reviews, authors expanded.
#[utoipa::path(
    get,
    path = "/api/reviews/movie/{tmdb_id}",
    tag = "Reviews",
    params(("tmdb_id" = i64, Path, description = "The external catalog id.")),
    responses(
        (status = 200, description = "The movie's reviews", body = Vec<ReviewWithAuthor>),
        (status = 404, description = "Movie not in the catalog cache"),
    )
)]
pub async fn reviews_for_movie_handler(
    State(context): State<ApiContext>,
    Path(tmdb_id): Path<i64>,
) -> Result<Json<Vec<ReviewWithAuthor>>, ReviewError> {
    Ok(Json(reviews_for_movie(&context.pool, tmdb_id).await?))
}

/// Public listing of a user's reviews, movies expanded.
#[utoipa::path(
    get,
    path = "/api/reviews/user/{user_id}",
    tag = "Reviews",
    params(("user_id" = i32, Path, description = "The account id.")),
    responses(
        (status = 200, description = "The user's reviews", body = Vec<ReviewWithMovie>),
    )
)]
pub async fn reviews_by_user_handler(
    State(context): State<ApiContext>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<ReviewWithMovie>>, ReviewError> {
    Ok(Json(reviews_by_user(&context.pool, user_id).await?))
}

/// Deletes a review the caller owns.
#[utoipa::path(
    delete,
    path = "/api/reviews/{review_id}",
    tag = "Reviews",
    params(("review_id" = i32, Path, description = "The review id.")),
    responses(
        (status = 200, description = "Review deleted"),
        (status = 403, description = "The review belongs to another account"),
        (status = 404, description = "No review with that id"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context, user), err(Debug))]
pub async fn delete_review_handler(
    State(context): State<ApiContext>,
    Extension(user): Extension<ApiUser>,
    Path(review_id): Path<i32>,
) -> Result<Json<serde_json::Value>, ReviewError> {
    delete_review(&context.pool, user.id, review_id).await?;
    Ok(Json(json!({ "message": "Review deleted" })))
}
