use crate::api_state::ApiContext;
use crate::users::handlers::{get_me_handler, get_user_handler, update_profile_handler};
use axum::routing::put;
use axum::{Router, routing::get};

pub fn users_public_router() -> Router<ApiContext> {
    Router::new().route("/api/users/{username}", get(get_user_handler))
}

pub fn users_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/api/users/me", get(get_me_handler))
        .route("/api/users/profile", put(update_profile_handler))
}
