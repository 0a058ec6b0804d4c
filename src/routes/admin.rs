// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Administrative routes. Gated on the admin role in routes/mod.rs.

use axum::{extract::State, routing::post, Extension, Json, Router};
use std::sync::Arc;

use crate::middleware::auth::AuthUser;
use crate::models::ApiMessage;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/admin/reset", post(reset))
}

/// Reset the in-memory store to an empty state.
///
/// Intended for test/dev harnesses; everything is wiped, including the
/// admin user that issued the call.
async fn reset(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Json<ApiMessage> {
    tracing::warn!(admin_id = %user.user_id, "Resetting in-memory store");
    state.store.reset();
    Json(ApiMessage {
        message: "Database reset complete".to_string(),
    })
}
