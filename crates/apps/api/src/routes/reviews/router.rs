use crate::api_state::ApiContext;
use crate::reviews::handlers::{
    delete_review_handler, reviews_by_user_handler, reviews_for_movie_handler,
    upsert_review_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

pub fn reviews_public_router() -> Router<ApiContext> {
    Router::new()
        .route("/api/reviews/movie/{tmdb_id}", get(reviews_for_movie_handler))
        .route("/api/reviews/user/{user_id}", get(reviews_by_user_handler))
}

pub fn reviews_protected_router() -> Router<ApiContext> {
    // POST takes the external movie id, DELETE the review id; the path shape
    // is shared so both verbs hang off one route.
    Router::new().route(
        "/api/reviews/{id}",
        post(upsert_review_handler).delete(delete_review_handler),
    )
}
