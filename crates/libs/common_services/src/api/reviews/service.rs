use crate::api::reviews::error::ReviewError;
use crate::database::movie_store::MovieStore;
use crate::database::review::{Review, ReviewWithAuthor, ReviewWithMovie};
use crate::database::review_store::ReviewStore;
use sqlx::PgPool;
use tracing::instrument;

fn validate_review(rating: f64, text: &str) -> Result<(), ReviewError> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ReviewError::BadRequest("Invalid rating or text".into()));
    }
    if text.trim().is_empty() {
        return Err(ReviewError::BadRequest("Invalid rating or text".into()));
    }
    Ok(())
}

/// Creates or replaces the caller's review for a movie. Unlike favorites and
/// collections, the catalog entry must already exist; reviewing does not
/// cache movies on demand.
#[instrument(skip(pool, text))]
pub async fn upsert_review(
    pool: &PgPool,
    user_id: i32,
    tmdb_id: i64,
    rating: f64,
    text: &str,
) -> Result<Review, ReviewError> {
    validate_review(rating, text)?;

    let movie = MovieStore::find_by_tmdb_id(pool, tmdb_id)
        .await?
        .ok_or(ReviewError::MovieNotFound)?;

    Ok(ReviewStore::upsert(pool, user_id, movie.id, rating, text).await?)
}

/// Public listing of a movie's reviews with authors expanded.
pub async fn reviews_for_movie(
    pool: &PgPool,
    tmdb_id: i64,
) -> Result<Vec<ReviewWithAuthor>, ReviewError> {
    let movie = MovieStore::find_by_tmdb_id(pool, tmdb_id)
        .await?
        .ok_or(ReviewError::MovieNotFound)?;

    Ok(ReviewStore::list_for_movie(pool, movie.id).await?)
}

/// Public listing of a user's reviews with movies expanded.
pub async fn reviews_by_user(
    pool: &PgPool,
    user_id: i32,
) -> Result<Vec<ReviewWithMovie>, ReviewError> {
    Ok(ReviewStore::list_by_user(pool, user_id).await?)
}

/// Deletes a review the caller owns. A review owned by someone else is
/// reported as Forbidden, not hidden.
#[instrument(skip(pool))]
pub async fn delete_review(
    pool: &PgPool,
    user_id: i32,
    review_id: i32,
) -> Result<(), ReviewError> {
    let review = ReviewStore::find_by_id(pool, review_id)
        .await?
        .ok_or(ReviewError::ReviewNotFound)?;

    if review.user_id != user_id {
        return Err(ReviewError::Forbidden);
    }

    ReviewStore::delete(pool, review_id).await?;
    Ok(())
}
