use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Rating plus text for `POST /api/reviews/{tmdbId}`.
#[derive(Deserialize, Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertReviewRequest {
    /// Stars in the closed range [0, 5]; fractional values are allowed.
    pub rating: f64,
    pub text: String,
}
