use crate::routes::{auth, collections, favorites, reviews, root, users};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::health_check,
        // Auth handlers
        auth::handlers::register_handler,
        auth::handlers::login_handler,
        // User handlers
        users::handlers::get_me_handler,
        users::handlers::update_profile_handler,
        users::handlers::get_user_handler,
        // Favorites handlers
        favorites::handlers::list_favorites_handler,
        favorites::handlers::add_favorite_handler,
        favorites::handlers::remove_favorite_handler,
        favorites::handlers::check_favorite_handler,
        // Collection handlers
        collections::handlers::create_collection_handler,
        collections::handlers::list_collections_handler,
        collections::handlers::add_collection_movie_handler,
        collections::handlers::remove_collection_movie_handler,
        collections::handlers::list_collection_movies_handler,
        collections::handlers::delete_collection_handler,
        // Review handlers
        reviews::handlers::upsert_review_handler,
        reviews::handlers::reviews_for_movie_handler,
        reviews::handlers::reviews_by_user_handler,
        reviews::handlers::delete_review_handler,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Users", description = "Profiles and public user lookup"),
        (name = "Favorites", description = "Per-user favorite movies"),
        (name = "Collections", description = "Named, user-owned movie lists"),
        (name = "Reviews", description = "Star-rated text reviews"),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
