use crate::database::DbError;
use crate::database::app_user::{PublicProfile, User, UserWithPassword};
use sqlx::{Executor, Postgres};

pub struct UserStore;

impl UserStore {
    /// Creates a new user. A violated unique index on username or email
    /// surfaces as [`DbError::UniqueViolation`].
    pub async fn create(
        executor: impl Executor<'_, Database = Postgres>,
        username: &str,
        email: &str,
        hashed_password: &str,
    ) -> Result<User, DbError> {
        Ok(sqlx::query_as::<_, User>(
            r#"
            INSERT INTO app_user (username, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, bio, avatar, created_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(hashed_password)
        .fetch_one(executor)
        .await?)
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<Option<User>, DbError> {
        Ok(sqlx::query_as::<_, User>(
            "SELECT id, username, email, bio, avatar, created_at FROM app_user WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(executor)
        .await?)
    }

    pub async fn find_by_username(
        executor: impl Executor<'_, Database = Postgres>,
        username: &str,
    ) -> Result<Option<PublicProfile>, DbError> {
        Ok(sqlx::query_as::<_, PublicProfile>(
            "SELECT id, username, bio, avatar, created_at FROM app_user WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(executor)
        .await?)
    }

    pub async fn find_by_email_with_password(
        executor: impl Executor<'_, Database = Postgres>,
        email: &str,
    ) -> Result<Option<UserWithPassword>, DbError> {
        Ok(sqlx::query_as::<_, UserWithPassword>(
            r#"
            SELECT id, username, email, bio, avatar, created_at, password
            FROM app_user
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(executor)
        .await?)
    }

    /// Partial profile update: `None` leaves the column untouched.
    /// Username and email are immutable after registration.
    pub async fn update_profile(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
        bio: Option<&str>,
        avatar: Option<&str>,
    ) -> Result<User, DbError> {
        Ok(sqlx::query_as::<_, User>(
            r#"
            UPDATE app_user
            SET
                bio = COALESCE($1, bio),
                avatar = COALESCE($2, avatar)
            WHERE id = $3
            RETURNING id, username, email, bio, avatar, created_at
            "#,
        )
        .bind(bio)
        .bind(avatar)
        .bind(user_id)
        .fetch_one(executor)
        .await?)
    }
}
