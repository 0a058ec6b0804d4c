// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ride offer and request models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::common::EntityMeta;
use crate::models::enums::{LocationPreset, RideStatus, TimeSlotPreset};

/// Flexible location: a preset category plus optional free text.
///
/// Only the preset takes part in compatibility matching; the free-text
/// fields are informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub preset: LocationPreset,
    /// Custom location label when preset is `custom`
    pub custom_label: Option<String>,
    /// Optional address details
    pub address: Option<String>,
}

/// Flexible time: a preset slot plus optional explicit timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub preset: TimeSlotPreset,
    /// Custom time when preset is `custom`
    pub custom_time: Option<DateTime<Utc>>,
}

/// Payload to create a ride offer by a driver/parent.
#[derive(Debug, Deserialize, Validate)]
pub struct RideOfferCreate {
    /// User ID of the offering driver
    pub driver_id: Uuid,
    /// Number of available seats
    #[validate(range(min = 1))]
    pub seats_available: u32,
    pub pickup_location: Location,
    pub dropoff_location: Location,
    pub time_slot: TimeSlot,
}

/// Ride offer entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideOffer {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub seats_available: u32,
    pub pickup_location: Location,
    pub dropoff_location: Location,
    pub time_slot: TimeSlot,
    pub status: RideStatus,
    pub meta: EntityMeta,
}

impl RideOffer {
    pub fn from_create(payload: RideOfferCreate) -> Self {
        Self {
            id: Uuid::new_v4(),
            driver_id: payload.driver_id,
            seats_available: payload.seats_available,
            pickup_location: payload.pickup_location,
            dropoff_location: payload.dropoff_location,
            time_slot: payload.time_slot,
            status: RideStatus::Pending,
            meta: EntityMeta::now(),
        }
    }
}

/// Payload to create a ride request by a parent.
#[derive(Debug, Deserialize, Validate)]
pub struct RideRequestCreate {
    /// User ID of the requesting parent
    pub requester_id: Uuid,
    /// Number of seats requested
    #[validate(range(min = 1))]
    pub seats_requested: u32,
    pub from_location: Location,
    pub to_location: Location,
    pub time_slot: TimeSlot,
}

/// Ride request entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideRequest {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub seats_requested: u32,
    pub from_location: Location,
    pub to_location: Location,
    pub time_slot: TimeSlot,
    pub status: RideStatus,
    /// Matched ride offer ID, set iff status is confirmed
    pub matched_offer_id: Option<Uuid>,
    pub meta: EntityMeta,
}

impl RideRequest {
    pub fn from_create(payload: RideRequestCreate) -> Self {
        Self {
            id: Uuid::new_v4(),
            requester_id: payload.requester_id,
            seats_requested: payload.seats_requested,
            from_location: payload.from_location,
            to_location: payload.to_location,
            time_slot: payload.time_slot,
            status: RideStatus::Pending,
            matched_offer_id: None,
            meta: EntityMeta::now(),
        }
    }
}

/// Static metadata for rides: available preset locations and time slots.
#[derive(Debug, Serialize)]
pub struct RidesMeta {
    pub locations: Vec<LocationPreset>,
    pub time_slots: Vec<TimeSlotPreset>,
}
