use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Membership answer for `GET /api/favorites/check/{tmdbId}`.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckFavoriteResponse {
    pub is_favorite: bool,
}
