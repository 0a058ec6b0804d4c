// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar routes: synthetic events and connected sources.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{CalendarEvent, CalendarSource};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/calendar/events", get(get_events))
}

pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/calendar/sources", post(connect_source))
        .route("/calendar/sources", get(list_sources))
}

#[derive(Deserialize)]
struct EventsQuery {
    /// Number of days to look ahead
    #[serde(default = "default_days")]
    days: u32,
}

fn default_days() -> u32 {
    7
}

/// Get upcoming events for the next N days.
async fn get_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventsQuery>,
) -> Result<Json<Vec<CalendarEvent>>> {
    if !(1..=30).contains(&params.days) {
        return Err(AppError::Validation(
            "'days' must be between 1 and 30".to_string(),
        ));
    }
    Ok(Json(state.calendar.upcoming_events(params.days)))
}

#[derive(Deserialize)]
struct ConnectSourceBody {
    provider: String,
}

/// Connect a calendar source for the current user.
async fn connect_source(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<ConnectSourceBody>,
) -> Result<(StatusCode, Json<CalendarSource>)> {
    if payload.provider.trim().is_empty() {
        return Err(AppError::Validation("'provider' must not be empty".to_string()));
    }
    let source = state.calendar.connect_source(user.user_id, payload.provider);
    Ok((StatusCode::CREATED, Json(source)))
}

/// List calendar sources connected by the current user.
async fn list_sources(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Json<Vec<CalendarSource>> {
    Json(state.calendar.list_sources(user.user_id))
}
