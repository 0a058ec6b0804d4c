// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User management routes.
//!
//! CRUD is open in the MVP so a fresh deployment can seed its first users
//! (there is no out-of-band provisioning).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{UserCreate, UserPublic, UserUpdate};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users", get(list_users))
        .route("/users/{user_id}", get(get_user))
        .route("/users/{user_id}", put(update_user))
        .route("/users/{user_id}", delete(delete_user))
}

/// Create a user.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UserCreate>,
) -> Result<(StatusCode, Json<UserPublic>)> {
    let user = state.users.create_user(payload)?;
    Ok((StatusCode::CREATED, Json(UserPublic::from(&user))))
}

/// List all users.
async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<UserPublic>> {
    let users = state.users.list_users();
    Json(users.iter().map(UserPublic::from).collect())
}

/// Get a user by ID.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserPublic>> {
    let user = state
        .users
        .get_user(user_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;
    Ok(Json(UserPublic::from(&user)))
}

/// Update user details.
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UserUpdate>,
) -> Result<Json<UserPublic>> {
    let user = state.users.update_user(user_id, payload)?;
    Ok(Json(UserPublic::from(&user)))
}

/// Delete a user.
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode> {
    if !state.users.delete_user(user_id) {
        return Err(AppError::NotFound(format!("User {} not found", user_id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
