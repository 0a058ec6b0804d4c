// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Notification routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Notification;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/notifications", post(send_notification))
        .route("/notifications/{user_id}", get(list_notifications))
}

#[derive(Deserialize)]
struct SendNotificationBody {
    user_id: Uuid,
    title: String,
    body: String,
}

/// Create and store a notification for a user.
async fn send_notification(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SendNotificationBody>,
) -> Result<(StatusCode, Json<Notification>)> {
    let notification = state
        .notifications
        .send(payload.user_id, payload.title, payload.body)?;
    Ok((StatusCode::CREATED, Json(notification)))
}

/// List notifications for a user.
async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Json<Vec<Notification>> {
    Json(state.notifications.list(user_id))
}
