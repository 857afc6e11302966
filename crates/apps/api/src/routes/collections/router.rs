use crate::api_state::ApiContext;
use crate::collections::handlers::{
    add_collection_movie_handler, create_collection_handler, delete_collection_handler,
    list_collection_movies_handler, list_collections_handler, remove_collection_movie_handler,
};
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn collections_protected_router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/api/collections",
            post(create_collection_handler).get(list_collections_handler),
        )
        .route(
            "/api/collections/{collection_id}",
            delete(delete_collection_handler),
        )
        .route(
            "/api/collections/{collection_id}/movies",
            post(add_collection_movie_handler).get(list_collection_movies_handler),
        )
        .route(
            "/api/collections/{collection_id}/movies/{movie_id}",
            delete(remove_collection_movie_handler),
        )
}
