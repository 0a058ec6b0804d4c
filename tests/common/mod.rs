// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use carpool_backend::config::Config;
use carpool_backend::models::{UserCreate, UserRole};
use carpool_backend::routes::create_router;
use carpool_backend::AppState;
use std::sync::Arc;
use uuid::Uuid;

/// Create a test app backed by a fresh in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::test_default()));
    (create_router(state.clone()), state)
}

/// Create a user directly through the service layer and return its ID.
#[allow(dead_code)]
pub fn create_user(state: &AppState, email: &str, role: UserRole) -> Uuid {
    state
        .users
        .create_user(UserCreate {
            email: email.to_string(),
            full_name: "Test User".to_string(),
            role,
            password: "password123".to_string(),
        })
        .expect("Failed to create test user")
        .id
}

/// Issue a bearer token for a user.
#[allow(dead_code)]
pub fn token_for(state: &AppState, user_id: Uuid) -> String {
    state
        .auth
        .issue_token(&user_id.to_string())
        .expect("Failed to issue test token")
}

/// Build a JSON request with an optional bearer token.
#[allow(dead_code)]
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
}
