mod api_doc;
pub mod auth;
pub mod collections;
pub mod favorites;
pub mod reviews;
pub mod root;
pub mod users;

use crate::api_state::ApiContext;
use crate::auth::middlewares::user::ApiUser;
use crate::auth::router::auth_public_router;
use crate::collections::router::collections_protected_router;
use crate::favorites::router::favorites_protected_router;
use crate::reviews::router::{reviews_protected_router, reviews_public_router};
use crate::root::router::root_public_router;
use crate::routes::api_doc::ApiDoc;
use crate::users::router::{users_protected_router, users_public_router};
use app_state::RateLimitingSettings;
use axum::Router;
use axum::middleware::from_extractor_with_state;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .merge(public_routes(&api_state.settings.api.rate_limiting))
        .merge(protected_routes(api_state.clone()))
        .with_state(api_state)
}

fn public_routes(rate_limiting: &RateLimitingSettings) -> Router<ApiContext> {
    Router::new()
        .merge(auth_public_router(rate_limiting))
        .merge(users_public_router())
        .merge(reviews_public_router())
        .merge(root_public_router())
}

fn protected_routes(api_state: ApiContext) -> Router<ApiContext> {
    Router::new()
        .merge(users_protected_router())
        .merge(favorites_protected_router())
        .merge(collections_protected_router())
        .merge(reviews_protected_router())
        .route_layer(from_extractor_with_state::<ApiUser, ApiContext>(api_state))
}
