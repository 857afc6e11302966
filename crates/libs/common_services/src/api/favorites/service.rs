use crate::api::favorites::error::FavoriteError;
use crate::database::favorite_store::FavoriteStore;
use crate::database::movie::{Movie, NewMovie};
use crate::database::movie_store::MovieStore;
use sqlx::PgPool;
use tracing::instrument;

/// The caller's favorites in the order they were added.
pub async fn list_favorites(pool: &PgPool, user_id: i32) -> Result<Vec<Movie>, FavoriteError> {
    Ok(FavoriteStore::list_movies(pool, user_id).await?)
}

/// Caches the movie if needed, then records the membership. The join table's
/// primary key arbitrates concurrent duplicate adds; a zero-row insert means
/// the movie was already a favorite.
#[instrument(skip(pool, movie))]
pub async fn add_favorite(
    pool: &PgPool,
    user_id: i32,
    movie: &NewMovie,
) -> Result<Vec<Movie>, FavoriteError> {
    let movie = MovieStore::ensure(pool, movie).await?;

    let result = FavoriteStore::add(pool, user_id, movie.id).await?;
    if result.rows_affected() == 0 {
        return Err(FavoriteError::AlreadyFavorite);
    }

    list_favorites(pool, user_id).await
}

/// Removes a favorite by external id. Removing an absent movie, or one the
/// catalog has never seen, is a successful no-op.
pub async fn remove_favorite(
    pool: &PgPool,
    user_id: i32,
    tmdb_id: i64,
) -> Result<Vec<Movie>, FavoriteError> {
    if let Some(movie) = MovieStore::find_by_tmdb_id(pool, tmdb_id).await? {
        FavoriteStore::remove(pool, user_id, movie.id).await?;
    }
    list_favorites(pool, user_id).await
}

/// Membership check. An uncached movie was never favorited by anyone, so the
/// answer is `false` rather than an error.
pub async fn check_favorite(
    pool: &PgPool,
    user_id: i32,
    tmdb_id: i64,
) -> Result<bool, FavoriteError> {
    let Some(movie) = MovieStore::find_by_tmdb_id(pool, tmdb_id).await? else {
        return Ok(false);
    };
    Ok(FavoriteStore::contains(pool, user_id, movie.id).await?)
}
