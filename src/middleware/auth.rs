// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer-token authentication middleware.
//!
//! Extracts the token from the `Authorization` header, resolves it through
//! the auth gate, and attaches the resulting [`AuthUser`] as a request
//! extension for handlers to consume.

use crate::error::AppError;
use crate::models::UserRole;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

pub use crate::services::auth::AuthUser;

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Middleware that requires a valid bearer token.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request).ok_or(AppError::Unauthorized)?;
    let auth_user = state.auth.require_authenticated(token)?;

    request.extensions_mut().insert(auth_user);
    Ok(next.run(request).await)
}

/// Middleware that requires a valid bearer token for an admin user.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request).ok_or(AppError::Unauthorized)?;
    let auth_user = state.auth.require_role(token, UserRole::Admin)?;

    request.extensions_mut().insert(auth_user);
    Ok(next.run(request).await)
}
