use crate::runner::test_context::TestContext;
use crate::test_helpers::register_user;
use color_eyre::Result;
use common_services::api::auth::interfaces::AuthResponse;
use common_services::api::auth::token::decode_token;
use serde_json::{Value, json};

pub async fn test_register(context: &TestContext) -> Result<()> {
    let auth = register_user(context, "alice", "alice@example.com", "correct horse").await?;

    assert_eq!(auth.user.username, "alice");
    assert_eq!(auth.user.email, "alice@example.com");
    assert_eq!(auth.user.bio, None);
    assert_eq!(auth.user.avatar, None);

    // The minted token embeds the new account's id.
    let claims = decode_token(&auth.token, &context.settings.secrets.jwt)
        .map_err(|_| color_eyre::eyre::eyre!("token did not decode"))?;
    assert_eq!(claims.sub, auth.user.id);

    Ok(())
}

pub async fn test_register_rejects_duplicates(context: &TestContext) -> Result<()> {
    // Same email, fresh username.
    let response = context
        .http_client
        .post(context.url("/api/auth/register"))
        .json(&json!({
            "username": "alice2",
            "email": "alice@example.com",
            "password": "pw",
        }))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::CONFLICT);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "Email is already registered");

    // Same username, fresh email.
    let response = context
        .http_client
        .post(context.url("/api/auth/register"))
        .json(&json!({
            "username": "alice",
            "email": "alice2@example.com",
            "password": "pw",
        }))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::CONFLICT);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "Username is already taken");

    Ok(())
}

pub async fn test_register_rejects_blank_fields(context: &TestContext) -> Result<()> {
    for payload in [
        json!({ "username": " ", "email": "x@example.com", "password": "pw" }),
        json!({ "username": "xavier", "email": "", "password": "pw" }),
        json!({ "username": "xavier", "email": "x@example.com", "password": "" }),
    ] {
        let response = context
            .http_client
            .post(context.url("/api/auth/register"))
            .json(&payload)
            .send()
            .await?;
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    }

    Ok(())
}

pub async fn test_login(context: &TestContext) -> Result<()> {
    let response = context
        .http_client
        .post(context.url("/api/auth/login"))
        .json(&json!({ "email": "alice@example.com", "password": "correct horse" }))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let auth: AuthResponse = response.json().await?;
    assert_eq!(auth.user.username, "alice");

    // The fresh token is accepted on a protected route.
    let response = context
        .http_client
        .get(context.url("/api/users/me"))
        .bearer_auth(&auth.token)
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    Ok(())
}

pub async fn test_login_rejects_bad_credentials(context: &TestContext) -> Result<()> {
    // Wrong password for a real account, and an unregistered email, must be
    // indistinguishable.
    let wrong_password = context
        .http_client
        .post(context.url("/api/auth/login"))
        .json(&json!({ "email": "alice@example.com", "password": "wrong" }))
        .send()
        .await?;
    let unknown_email = context
        .http_client
        .post(context.url("/api/auth/login"))
        .json(&json!({ "email": "nobody@example.com", "password": "wrong" }))
        .send()
        .await?;

    assert_eq!(wrong_password.status(), reqwest::StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), reqwest::StatusCode::UNAUTHORIZED);

    let a: Value = wrong_password.json().await?;
    let b: Value = unknown_email.json().await?;
    assert_eq!(a["message"], b["message"]);

    // A protected route without any token is rejected before the handler.
    let response = context
        .http_client
        .get(context.url("/api/users/me"))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);

    Ok(())
}
