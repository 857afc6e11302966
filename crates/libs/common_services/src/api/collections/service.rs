use crate::api::collections::error::CollectionError;
use crate::database::collection::{Collection, CollectionWithMovies};
use crate::database::collection_store::CollectionStore;
use crate::database::movie::{Movie, NewMovie};
use crate::database::movie_store::MovieStore;
use crate::utils::nice_id;
use app_state::constants;
use sqlx::PgPool;
use tracing::instrument;

fn validate_name(name: &str) -> Result<&str, CollectionError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CollectionError::BadRequest("Name is required".into()));
    }
    Ok(name)
}

/// Resolves a collection the caller owns, or reports NotFound. Ownership by
/// someone else is never revealed.
async fn find_owned(
    pool: &PgPool,
    collection_id: &str,
    owner_id: i32,
) -> Result<Collection, CollectionError> {
    CollectionStore::find_owned(pool, collection_id, owner_id)
        .await?
        .ok_or_else(|| CollectionError::NotFound(collection_id.to_owned()))
}

#[instrument(skip(pool))]
pub async fn create_collection(
    pool: &PgPool,
    owner_id: i32,
    name: &str,
) -> Result<Collection, CollectionError> {
    let name = validate_name(name)?;
    let collection_id = nice_id(constants().database.collection_id_length);
    Ok(CollectionStore::create(pool, &collection_id, owner_id, name).await?)
}

/// All of the caller's collections with their movies expanded for display.
pub async fn list_collections(
    pool: &PgPool,
    owner_id: i32,
) -> Result<Vec<CollectionWithMovies>, CollectionError> {
    let collections = CollectionStore::list_by_owner(pool, owner_id).await?;

    let mut expanded = Vec::with_capacity(collections.len());
    for collection in collections {
        let movies = CollectionStore::list_movies(pool, &collection.id).await?;
        expanded.push(CollectionWithMovies::from_parts(collection, movies));
    }
    Ok(expanded)
}

/// Caches the movie if needed and appends it to the collection. Appending a
/// movie that is already a member is a no-op.
#[instrument(skip(pool, movie))]
pub async fn add_movie(
    pool: &PgPool,
    owner_id: i32,
    collection_id: &str,
    movie: &NewMovie,
) -> Result<CollectionWithMovies, CollectionError> {
    let collection = find_owned(pool, collection_id, owner_id).await?;

    let movie = MovieStore::ensure(pool, movie).await?;
    CollectionStore::add_movie(pool, &collection.id, movie.id).await?;

    let movies = CollectionStore::list_movies(pool, &collection.id).await?;
    Ok(CollectionWithMovies::from_parts(collection, movies))
}

/// Removes a movie reference from the collection; removing a non-member is a
/// no-op.
#[instrument(skip(pool))]
pub async fn remove_movie(
    pool: &PgPool,
    owner_id: i32,
    collection_id: &str,
    movie_id: i32,
) -> Result<CollectionWithMovies, CollectionError> {
    let collection = find_owned(pool, collection_id, owner_id).await?;

    CollectionStore::remove_movie(pool, &collection.id, movie_id).await?;

    let movies = CollectionStore::list_movies(pool, &collection.id).await?;
    Ok(CollectionWithMovies::from_parts(collection, movies))
}

pub async fn list_movies(
    pool: &PgPool,
    owner_id: i32,
    collection_id: &str,
) -> Result<Vec<Movie>, CollectionError> {
    let collection = find_owned(pool, collection_id, owner_id).await?;
    Ok(CollectionStore::list_movies(pool, &collection.id).await?)
}

/// Deletes a collection and its membership rows. Cached movies and reviews
/// are untouched.
#[instrument(skip(pool))]
pub async fn delete_collection(
    pool: &PgPool,
    owner_id: i32,
    collection_id: &str,
) -> Result<(), CollectionError> {
    let collection = find_owned(pool, collection_id, owner_id).await?;
    CollectionStore::delete(pool, &collection.id).await?;
    Ok(())
}
