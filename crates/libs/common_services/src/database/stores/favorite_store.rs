use crate::database::DbError;
use crate::database::movie::Movie;
use sqlx::postgres::PgQueryResult;
use sqlx::{Executor, Postgres};

pub struct FavoriteStore;

impl FavoriteStore {
    /// Adds a movie to a user's favorites. The composite primary key makes a
    /// duplicate add a zero-row insert, which callers treat as the conflict
    /// signal.
    pub async fn add(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
        movie_id: i32,
    ) -> Result<PgQueryResult, DbError> {
        Ok(sqlx::query(
            r#"
            INSERT INTO favorite (user_id, movie_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, movie_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(movie_id)
        .execute(executor)
        .await?)
    }

    /// Removes a favorite; removing an absent row is a no-op.
    pub async fn remove(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
        movie_id: i32,
    ) -> Result<PgQueryResult, DbError> {
        Ok(
            sqlx::query("DELETE FROM favorite WHERE user_id = $1 AND movie_id = $2")
                .bind(user_id)
                .bind(movie_id)
                .execute(executor)
                .await?,
        )
    }

    /// All of a user's favorited movies in insertion order.
    pub async fn list_movies(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<Vec<Movie>, DbError> {
        Ok(sqlx::query_as::<_, Movie>(
            r#"
            SELECT m.id, m.tmdb_id, m.title, m.poster, m.vote_average, m.release_date, m.added_at
            FROM favorite f
            JOIN movie m ON f.movie_id = m.id
            WHERE f.user_id = $1
            ORDER BY f.added_at
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?)
    }

    pub async fn contains(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
        movie_id: i32,
    ) -> Result<bool, DbError> {
        Ok(sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM favorite WHERE user_id = $1 AND movie_id = $2)",
        )
        .bind(user_id)
        .bind(movie_id)
        .fetch_one(executor)
        .await?)
    }
}
