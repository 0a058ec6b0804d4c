// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ride offer and request routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{RideOffer, RideOfferCreate, RideRequest, RideRequestCreate, RidesMeta};
use crate::AppState;

/// Public read-only ride routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rides/meta", get(get_meta))
        .route("/rides/offers", get(list_offers))
        .route("/rides/requests", get(list_requests))
}

/// Authenticated ride mutations.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rides/offers", post(create_offer))
        .route("/rides/offers/{offer_id}/cancel", post(cancel_offer))
        .route("/rides/requests", post(create_request))
        .route("/rides/requests/{request_id}/confirm", post(confirm_request))
        .route("/rides/requests/{request_id}/cancel", post(cancel_request))
}

/// Return predefined locations and time slots.
async fn get_meta(State(state): State<Arc<AppState>>) -> Json<RidesMeta> {
    Json(state.rides.get_meta())
}

/// Create a new ride offer.
async fn create_offer(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<RideOfferCreate>,
) -> Result<(StatusCode, Json<RideOffer>)> {
    tracing::debug!(user_id = %user.user_id, "Creating ride offer");
    let offer = state.rides.create_offer(payload)?;
    Ok((StatusCode::CREATED, Json(offer)))
}

/// List all ride offers.
async fn list_offers(State(state): State<Arc<AppState>>) -> Json<Vec<RideOffer>> {
    Json(state.rides.list_offers())
}

/// Create a new ride request.
async fn create_request(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<RideRequestCreate>,
) -> Result<(StatusCode, Json<RideRequest>)> {
    tracing::debug!(user_id = %user.user_id, "Creating ride request");
    let request = state.rides.create_request(payload)?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// List all ride requests.
async fn list_requests(State(state): State<Arc<AppState>>) -> Json<Vec<RideRequest>> {
    Json(state.rides.list_requests())
}

#[derive(Deserialize)]
struct ConfirmRequestBody {
    offer_id: Uuid,
}

/// Confirm a ride request against an offer, allocating seats.
async fn confirm_request(
    State(state): State<Arc<AppState>>,
    Path(request_id): Path<Uuid>,
    Json(body): Json<ConfirmRequestBody>,
) -> Result<Json<RideRequest>> {
    let request = state.rides.confirm_request(request_id, body.offer_id)?;
    Ok(Json(request))
}

/// Cancel a ride request, releasing any allocated seats.
async fn cancel_request(
    State(state): State<Arc<AppState>>,
    Path(request_id): Path<Uuid>,
) -> Result<Json<RideRequest>> {
    let request = state.rides.cancel_request(request_id)?;
    Ok(Json(request))
}

/// Cancel a ride offer.
async fn cancel_offer(
    State(state): State<Arc<AppState>>,
    Path(offer_id): Path<Uuid>,
) -> Result<Json<RideOffer>> {
    let offer = state.rides.cancel_offer(offer_id)?;
    Ok(Json(offer))
}
