use crate::database::movie::NewMovie;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionRequest {
    pub name: String,
}

/// Body for adding a movie to a collection; the movie metadata is cached on
/// first sight.
#[derive(Deserialize, Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCollectionMovieRequest {
    pub movie: NewMovie,
}
