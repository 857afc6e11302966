use crate::api_state::ApiContext;
use crate::auth::middlewares::common::{extract_context, extract_token};
use axum::extract::{FromRequestParts, State};
use common_services::api::auth::error::AuthError;
use common_services::api::auth::token::decode_token;
use http::request::Parts;

/// The authenticated caller's identity, taken from the verified token claims.
/// Validation is signature and expiry only; no storage is touched here.
#[derive(Clone, Debug)]
pub struct ApiUser {
    pub id: i32,
}

impl<S> FromRequestParts<S> for ApiUser
where
    S: Send + Sync,
    State<ApiContext>: FromRequestParts<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts)?;
        let context = extract_context(parts, state).await?;
        let claims = decode_token(&token, &context.settings.secrets.jwt)?;
        let user = Self { id: claims.sub };
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
