use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A locally cached catalog entry. Created the first time any user
/// references the external id; immutable afterwards.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i32,
    pub tmdb_id: i64,
    pub title: String,
    pub poster: Option<String>,
    pub vote_average: Option<f64>,
    pub release_date: Option<String>,
    pub added_at: DateTime<Utc>,
}

/// Caller-supplied movie metadata. The backend trusts these fields; it does
/// not verify them against the external provider.
#[derive(Debug, Deserialize, Serialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub tmdb_id: i64,
    pub title: String,
    pub poster: Option<String>,
    pub vote_average: Option<f64>,
    pub release_date: Option<String>,
}
