//! Auth Routes
//!
//! Accounts are out of scope for the fixture server. These routes parse
//! the request so malformed bodies are still reported as such, then
//! answer 501 with an `{error}` body.
//!
//! - POST /api/auth/login
//! - POST /api/auth/register
//! - GET /api/social-auth/google

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::api::{LoginRequest, RegisterRequest};
use crate::server::error::{ServerError, ServerResult};

const NO_ACCOUNTS: &str = "Authentication is not available on the fixture server";

/// Unreadable bodies answer 400 with the usual `{error}` body
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> ServerResult<T> {
    payload
        .map(|Json(req)| req)
        .map_err(|rejection| ServerError::Validation(rejection.body_text()))
}

/// POST /api/auth/login
pub async fn login(payload: Result<Json<LoginRequest>, JsonRejection>) -> ServerResult<Json<()>> {
    let req = body(payload)?;
    tracing::info!(email = %req.email, "Login attempt against fixture server");
    Err(ServerError::NotImplemented(NO_ACCOUNTS.to_string()))
}

/// POST /api/auth/register
pub async fn register(
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ServerResult<Json<()>> {
    let req = body(payload)?;
    if req.full_name.trim().is_empty() {
        return Err(ServerError::Validation("Full name is required".to_string()));
    }
    tracing::info!(email = %req.email, user_type = %req.user_type, "Signup attempt against fixture server");
    Err(ServerError::NotImplemented(NO_ACCOUNTS.to_string()))
}

/// GET /api/social-auth/google
pub async fn google() -> ServerResult<Json<()>> {
    Err(ServerError::NotImplemented(
        "Google sign-in is not available on the fixture server".to_string(),
    ))
}
