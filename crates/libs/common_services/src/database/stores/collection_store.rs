use crate::database::DbError;
use crate::database::collection::Collection;
use crate::database::movie::Movie;
use sqlx::postgres::PgQueryResult;
use sqlx::{Executor, Postgres};

pub struct CollectionStore;

impl CollectionStore {
    pub async fn create(
        executor: impl Executor<'_, Database = Postgres>,
        collection_id: &str,
        owner_id: i32,
        name: &str,
    ) -> Result<Collection, DbError> {
        Ok(sqlx::query_as::<_, Collection>(
            r#"
            INSERT INTO collection (id, owner_id, name)
            VALUES ($1, $2, $3)
            RETURNING id, owner_id, name, created_at
            "#,
        )
        .bind(collection_id)
        .bind(owner_id)
        .bind(name)
        .fetch_one(executor)
        .await?)
    }

    /// Looks up a collection scoped to its owner. A collection owned by
    /// someone else is indistinguishable from a missing one.
    pub async fn find_owned(
        executor: impl Executor<'_, Database = Postgres>,
        collection_id: &str,
        owner_id: i32,
    ) -> Result<Option<Collection>, DbError> {
        Ok(sqlx::query_as::<_, Collection>(
            r#"
            SELECT id, owner_id, name, created_at
            FROM collection
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(collection_id)
        .bind(owner_id)
        .fetch_optional(executor)
        .await?)
    }

    pub async fn list_by_owner(
        executor: impl Executor<'_, Database = Postgres>,
        owner_id: i32,
    ) -> Result<Vec<Collection>, DbError> {
        Ok(sqlx::query_as::<_, Collection>(
            r#"
            SELECT id, owner_id, name, created_at
            FROM collection
            WHERE owner_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(owner_id)
        .fetch_all(executor)
        .await?)
    }

    /// Deletes a collection; membership rows go with it via the foreign key
    /// cascade. Movies and reviews are untouched.
    pub async fn delete(
        executor: impl Executor<'_, Database = Postgres>,
        collection_id: &str,
    ) -> Result<PgQueryResult, DbError> {
        Ok(sqlx::query("DELETE FROM collection WHERE id = $1")
            .bind(collection_id)
            .execute(executor)
            .await?)
    }

    /// Appends a movie to a collection. Duplicate membership is suppressed by
    /// the composite primary key.
    pub async fn add_movie(
        executor: impl Executor<'_, Database = Postgres>,
        collection_id: &str,
        movie_id: i32,
    ) -> Result<PgQueryResult, DbError> {
        Ok(sqlx::query(
            r#"
            INSERT INTO collection_movie (collection_id, movie_id)
            VALUES ($1, $2)
            ON CONFLICT (collection_id, movie_id) DO NOTHING
            "#,
        )
        .bind(collection_id)
        .bind(movie_id)
        .execute(executor)
        .await?)
    }

    /// Removes a movie from a collection; removing a non-member is a no-op.
    pub async fn remove_movie(
        executor: impl Executor<'_, Database = Postgres>,
        collection_id: &str,
        movie_id: i32,
    ) -> Result<PgQueryResult, DbError> {
        Ok(
            sqlx::query("DELETE FROM collection_movie WHERE collection_id = $1 AND movie_id = $2")
                .bind(collection_id)
                .bind(movie_id)
                .execute(executor)
                .await?,
        )
    }

    /// All movies in a collection, in the order they were added.
    pub async fn list_movies(
        executor: impl Executor<'_, Database = Postgres>,
        collection_id: &str,
    ) -> Result<Vec<Movie>, DbError> {
        Ok(sqlx::query_as::<_, Movie>(
            r#"
            SELECT m.id, m.tmdb_id, m.title, m.poster, m.vote_average, m.release_date, m.added_at
            FROM collection_movie cm
            JOIN movie m ON cm.movie_id = m.id
            WHERE cm.collection_id = $1
            ORDER BY cm.added_at
            "#,
        )
        .bind(collection_id)
        .fetch_all(executor)
        .await?)
    }
}
