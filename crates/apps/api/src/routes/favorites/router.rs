use crate::api_state::ApiContext;
use crate::favorites::handlers::{
    add_favorite_handler, check_favorite_handler, list_favorites_handler, remove_favorite_handler,
};
use axum::{
    Router,
    routing::{delete, get},
};

pub fn favorites_protected_router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/api/favorites",
            get(list_favorites_handler).post(add_favorite_handler),
        )
        .route("/api/favorites/{tmdb_id}", delete(remove_favorite_handler))
        .route("/api/favorites/check/{tmdb_id}", get(check_favorite_handler))
}
