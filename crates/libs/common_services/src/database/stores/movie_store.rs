use crate::database::DbError;
use crate::database::movie::{Movie, NewMovie};
use sqlx::{Executor, PgPool, Postgres};

pub struct MovieStore;

impl MovieStore {
    /// Idempotent get-or-create keyed on the external id. Cached entries are
    /// never refreshed; the first writer's metadata wins.
    pub async fn ensure(pool: &PgPool, movie: &NewMovie) -> Result<Movie, DbError> {
        if let Some(inserted) = Self::insert_ignore(pool, movie).await? {
            return Ok(inserted);
        }
        // Conflict path: the entry already existed (or a concurrent request
        // just created it); movies are never deleted, so this lookup hits.
        Self::find_by_tmdb_id(pool, movie.tmdb_id)
            .await?
            .ok_or(DbError::Sqlx(sqlx::Error::RowNotFound))
    }

    /// Inserts a new catalog entry, returning `None` when the external id is
    /// already cached.
    pub async fn insert_ignore(
        executor: impl Executor<'_, Database = Postgres>,
        movie: &NewMovie,
    ) -> Result<Option<Movie>, DbError> {
        Ok(sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movie (tmdb_id, title, poster, vote_average, release_date)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (tmdb_id) DO NOTHING
            RETURNING id, tmdb_id, title, poster, vote_average, release_date, added_at
            "#,
        )
        .bind(movie.tmdb_id)
        .bind(&movie.title)
        .bind(&movie.poster)
        .bind(movie.vote_average)
        .bind(&movie.release_date)
        .fetch_optional(executor)
        .await?)
    }

    pub async fn find_by_tmdb_id(
        executor: impl Executor<'_, Database = Postgres>,
        tmdb_id: i64,
    ) -> Result<Option<Movie>, DbError> {
        Ok(sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, tmdb_id, title, poster, vote_average, release_date, added_at
            FROM movie
            WHERE tmdb_id = $1
            "#,
        )
        .bind(tmdb_id)
        .fetch_optional(executor)
        .await?)
    }
}
