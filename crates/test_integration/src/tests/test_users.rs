use crate::runner::test_context::TestContext;
use crate::test_helpers::register_user;
use color_eyre::Result;
use common_services::database::app_user::User;
use serde_json::{Value, json};

pub async fn test_get_me(context: &TestContext) -> Result<()> {
    let auth = register_user(context, "me_user", "me@example.com", "pw").await?;

    let response = context
        .http_client
        .get(context.url("/api/users/me"))
        .bearer_auth(&auth.token)
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let user: User = response.json().await?;
    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.email, "me@example.com");

    Ok(())
}

pub async fn test_update_profile(context: &TestContext) -> Result<()> {
    let auth = register_user(context, "profile_user", "profile@example.com", "pw").await?;

    // Set the bio only.
    let response = context
        .http_client
        .put(context.url("/api/users/profile"))
        .bearer_auth(&auth.token)
        .json(&json!({ "bio": "I rate movies." }))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let user: User = response.json().await?;
    assert_eq!(user.bio.as_deref(), Some("I rate movies."));
    assert_eq!(user.avatar, None);

    // Now set the avatar; the bio must survive untouched.
    let response = context
        .http_client
        .put(context.url("/api/users/profile"))
        .bearer_auth(&auth.token)
        .json(&json!({ "avatar": "https://example.com/a.png" }))
        .send()
        .await?;
    let user: User = response.json().await?;
    assert_eq!(user.bio.as_deref(), Some("I rate movies."));
    assert_eq!(user.avatar.as_deref(), Some("https://example.com/a.png"));

    Ok(())
}

pub async fn test_public_profile(context: &TestContext) -> Result<()> {
    let response = context
        .http_client
        .get(context.url("/api/users/profile_user"))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await?;
    assert_eq!(body["username"], "profile_user");
    assert_eq!(body["bio"], "I rate movies.");
    // The public shape never carries the email.
    assert!(body.get("email").is_none());

    let response = context
        .http_client
        .get(context.url("/api/users/no_such_user"))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    Ok(())
}
