use crate::runner::test_context::TestContext;
use color_eyre::Result;
use common_services::api::auth::interfaces::AuthResponse;
use common_services::database::movie::NewMovie;
use serde_json::json;

/// Registers a fresh account and returns its token plus profile.
pub async fn register_user(
    context: &TestContext,
    username: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse> {
    let response = context
        .http_client
        .post(context.url("/api/auth/register"))
        .json(&json!({
            "username": username,
            "email": email,
            "password": password,
        }))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    Ok(response.json().await?)
}

#[must_use]
pub fn fight_club() -> NewMovie {
    NewMovie {
        tmdb_id: 550,
        title: "Fight Club".into(),
        poster: Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".into()),
        vote_average: Some(8.4),
        release_date: Some("1999-10-15".into()),
    }
}

#[must_use]
pub fn the_matrix() -> NewMovie {
    NewMovie {
        tmdb_id: 603,
        title: "The Matrix".into(),
        poster: Some("/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg".into()),
        vote_average: Some(8.2),
        release_date: Some("1999-03-31".into()),
    }
}
