// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login and current-user routes.

use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{AuthToken, LoginRequest, UserPublic};
use crate::security::verify_password;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/auth/login", post(login))
}

pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/auth/me", get(me))
}

/// Authenticate a user by email and password and return a bearer token.
///
/// Unknown email and wrong password are deliberately indistinguishable to
/// the caller.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthToken>> {
    let user_id = {
        let inner = state.store.read();
        let (user, password_hash) = inner
            .get_user_by_email(&payload.email)
            .ok_or(AppError::Unauthorized)?;
        if !verify_password(&state.config.secret_key, &payload.password, password_hash) {
            return Err(AppError::Unauthorized);
        }
        user.id
    };

    let token = state
        .auth
        .issue_token(&user_id.to_string())
        .map_err(AppError::Internal)?;

    tracing::debug!(user_id = %user_id, "Login succeeded");
    Ok(Json(AuthToken::bearer(token)))
}

/// Return the current authenticated user's profile.
async fn me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserPublic>> {
    let profile = state
        .users
        .get_user(user.user_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;

    Ok(Json(UserPublic::from(&profile)))
}
