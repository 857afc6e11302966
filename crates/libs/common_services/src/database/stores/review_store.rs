use crate::database::DbError;
use crate::database::movie::Movie;
use crate::database::review::{Review, ReviewAuthor, ReviewWithAuthor, ReviewWithMovie};
use chrono::{DateTime, Utc};
use sqlx::postgres::PgQueryResult;
use sqlx::{Executor, FromRow, Postgres};

pub struct ReviewStore;

#[derive(FromRow)]
struct ReviewAuthorRow {
    id: i32,
    rating: f64,
    text: String,
    created_at: DateTime<Utc>,
    username: String,
    avatar: Option<String>,
}

#[derive(FromRow)]
struct ReviewMovieRow {
    id: i32,
    rating: f64,
    text: String,
    created_at: DateTime<Utc>,
    movie_id: i32,
    tmdb_id: i64,
    title: String,
    poster: Option<String>,
    vote_average: Option<f64>,
    release_date: Option<String>,
    movie_added_at: DateTime<Utc>,
}

impl ReviewStore {
    /// Create-or-replace keyed on the (user, movie) unique constraint.
    /// A re-review replaces rating and text and refreshes the timestamp.
    pub async fn upsert(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
        movie_id: i32,
        rating: f64,
        text: &str,
    ) -> Result<Review, DbError> {
        Ok(sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO review (user_id, movie_id, rating, text)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, movie_id) DO UPDATE
            SET rating = EXCLUDED.rating, text = EXCLUDED.text, created_at = now()
            RETURNING id, user_id, movie_id, rating, text, created_at
            "#,
        )
        .bind(user_id)
        .bind(movie_id)
        .bind(rating)
        .bind(text)
        .fetch_one(executor)
        .await?)
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        review_id: i32,
    ) -> Result<Option<Review>, DbError> {
        Ok(sqlx::query_as::<_, Review>(
            "SELECT id, user_id, movie_id, rating, text, created_at FROM review WHERE id = $1",
        )
        .bind(review_id)
        .fetch_optional(executor)
        .await?)
    }

    pub async fn delete(
        executor: impl Executor<'_, Database = Postgres>,
        review_id: i32,
    ) -> Result<PgQueryResult, DbError> {
        Ok(sqlx::query("DELETE FROM review WHERE id = $1")
            .bind(review_id)
            .execute(executor)
            .await?)
    }

    /// All reviews for a movie, each with its author expanded.
    pub async fn list_for_movie(
        executor: impl Executor<'_, Database = Postgres>,
        movie_id: i32,
    ) -> Result<Vec<ReviewWithAuthor>, DbError> {
        let rows = sqlx::query_as::<_, ReviewAuthorRow>(
            r#"
            SELECT r.id, r.rating, r.text, r.created_at, u.username, u.avatar
            FROM review r
            JOIN app_user u ON r.user_id = u.id
            WHERE r.movie_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(movie_id)
        .fetch_all(executor)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ReviewWithAuthor {
                id: r.id,
                rating: r.rating,
                text: r.text,
                created_at: r.created_at,
                author: ReviewAuthor {
                    username: r.username,
                    avatar: r.avatar,
                },
            })
            .collect())
    }

    /// All reviews written by a user, each with its movie expanded.
    pub async fn list_by_user(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<Vec<ReviewWithMovie>, DbError> {
        let rows = sqlx::query_as::<_, ReviewMovieRow>(
            r#"
            SELECT
                r.id, r.rating, r.text, r.created_at,
                m.id AS movie_id, m.tmdb_id, m.title, m.poster,
                m.vote_average, m.release_date, m.added_at AS movie_added_at
            FROM review r
            JOIN movie m ON r.movie_id = m.id
            WHERE r.user_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ReviewWithMovie {
                id: r.id,
                rating: r.rating,
                text: r.text,
                created_at: r.created_at,
                movie: Movie {
                    id: r.movie_id,
                    tmdb_id: r.tmdb_id,
                    title: r.title,
                    poster: r.poster,
                    vote_average: r.vote_average,
                    release_date: r.release_date,
                    added_at: r.movie_added_at,
                },
            })
            .collect())
    }
}
