//! HTTP handlers for registration and login.

use crate::api_state::ApiContext;
use axum::{Json, extract::State, http::StatusCode};
use common_services::api::auth::error::AuthError;
use common_services::api::auth::interfaces::{AuthResponse, LoginRequest, RegisterRequest};
use common_services::api::auth::service::{login, register};
use tracing::instrument;

/// Registers a new account and returns its first bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Missing username, email or password"),
        (status = 409, description = "Username or email already taken"),
    )
)]
#[instrument(skip(context, payload), err(Debug))]
pub async fn register_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AuthError> {
    let response = register(&context.pool, &context.settings.secrets.jwt, &payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Checks credentials and returns a fresh bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid email or password"),
    )
)]
#[instrument(skip(context, payload), err(Debug))]
pub async fn login_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let response = login(&context.pool, &context.settings.secrets.jwt, &payload).await?;
    Ok(Json(response))
}
