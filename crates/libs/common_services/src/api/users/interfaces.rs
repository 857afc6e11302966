use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Partial profile update; omitted fields are left untouched.
#[derive(Deserialize, Serialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
    pub avatar: Option<String>,
}
