use crate::database::movie::Movie;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A named, user-owned list of movies.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub owner_id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A collection with its movie references expanded for display.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionWithMovies {
    pub id: String,
    pub owner_id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub movies: Vec<Movie>,
}

impl CollectionWithMovies {
    #[must_use]
    pub fn from_parts(collection: Collection, movies: Vec<Movie>) -> Self {
        Self {
            id: collection.id,
            owner_id: collection.owner_id,
            name: collection.name,
            created_at: collection.created_at,
            movies,
        }
    }
}
