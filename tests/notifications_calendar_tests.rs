// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Notification and calendar stub tests through the HTTP surface.

use axum::http::StatusCode;
use carpool_backend::models::UserRole;
use tower::ServiceExt;
use uuid::Uuid;

mod common;
use common::{body_json, create_test_app, create_user, json_request, token_for};

#[tokio::test]
async fn test_send_and_list_notifications() {
    let (app, state) = create_test_app();
    let user_id = create_user(&state, "notify@example.com", UserRole::Parent);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/notifications",
            None,
            Some(serde_json::json!({
                "user_id": user_id,
                "title": "Ride confirmed",
                "body": "Pickup at 8am",
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["title"], "Ride confirmed");
    assert_eq!(created["read"], false);

    let response = app
        .oneshot(json_request(
            "GET",
            &format!("/notifications/{}", user_id),
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_send_notification_to_unknown_user() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/notifications",
            None,
            Some(serde_json::json!({
                "user_id": Uuid::new_v4(),
                "title": "t",
                "body": "b",
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_calendar_events_default_window() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(json_request("GET", "/calendar/events", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let events = body_json(response).await;
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 7);
    assert_eq!(events[0]["id"], "evt-1");
    assert_eq!(events[0]["location"], "sports_club");
}

#[tokio::test]
async fn test_calendar_events_rejects_out_of_range_days() {
    let (app, _) = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request("GET", "/calendar/events?days=0", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(json_request("GET", "/calendar/events?days=31", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_calendar_sources_require_auth() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(json_request("GET", "/calendar/sources", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_connect_and_list_calendar_sources() {
    let (app, state) = create_test_app();
    let user_id = create_user(&state, "cal@example.com", UserRole::Parent);
    let token = token_for(&state, user_id);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/calendar/sources",
            Some(&token),
            Some(serde_json::json!({ "provider": "google" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_request("GET", "/calendar/sources", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let sources = body_json(response).await;
    assert_eq!(sources.as_array().unwrap().len(), 1);
    assert_eq!(sources[0]["provider"], "google");
}
