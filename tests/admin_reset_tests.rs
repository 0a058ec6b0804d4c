// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin reset tests: role gating and that reset actually wipes state.

use axum::http::StatusCode;
use carpool_backend::models::UserRole;
use tower::ServiceExt;

mod common;
use common::{create_test_app, create_user, json_request, token_for};

#[tokio::test]
async fn test_reset_without_token_unauthorized() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(json_request("POST", "/admin/reset", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_reset_requires_admin_role() {
    let (app, state) = create_test_app();
    let parent = create_user(&state, "parent@example.com", UserRole::Parent);
    let token = token_for(&state, parent);

    let response = app
        .oneshot(json_request("POST", "/admin/reset", Some(&token), None))
        .await
        .unwrap();

    // Authenticated but wrong role
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_reset_wipes_all_state() {
    let (app, state) = create_test_app();
    let admin = create_user(&state, "admin@example.com", UserRole::Admin);
    create_user(&state, "other@example.com", UserRole::Parent);
    let token = token_for(&state, admin);

    assert_eq!(state.users.list_users().len(), 2);

    let response = app
        .oneshot(json_request("POST", "/admin/reset", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(state.users.list_users().is_empty());
    assert!(state.rides.list_offers().is_empty());
    assert!(state.rides.list_requests().is_empty());
}

#[tokio::test]
async fn test_driver_role_does_not_satisfy_admin_check() {
    // The role check is exact-match, not hierarchical
    let (app, state) = create_test_app();
    let driver = create_user(&state, "driver@example.com", UserRole::Driver);
    let token = token_for(&state, driver);

    let response = app
        .oneshot(json_request("POST", "/admin/reset", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
