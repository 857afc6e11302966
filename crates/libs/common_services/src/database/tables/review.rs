use crate::database::movie::Movie;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A star rating plus text for one (user, movie) pair. The storage layer
/// enforces at most one row per pair; re-reviewing replaces it.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub movie_id: i32,
    pub rating: f64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// The author fields exposed on a movie's public review listing.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    pub username: String,
    pub avatar: Option<String>,
}

/// A review joined with its author, for `GET /api/reviews/movie/{id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithAuthor {
    pub id: i32,
    pub rating: f64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub author: ReviewAuthor,
}

/// A review joined with its movie, for `GET /api/reviews/user/{id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithMovie {
    pub id: i32,
    pub rating: f64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub movie: Movie,
}
