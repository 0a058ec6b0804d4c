// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ride matching: request/offer lifecycle, compatibility checks, and seat
//! allocation.
//!
//! This is the only service with real state-transition rules. Requests move
//! pending → confirmed or cancelled, and confirmed → cancelled. Offers move
//! pending → confirmed on their first successful match and stay confirmed
//! as further requests match, until cancelled.

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{
    LocationPreset, RideOffer, RideOfferCreate, RideRequest, RideRequestCreate, RideStatus,
    RidesMeta, TimeSlotPreset,
};
use crate::store::MemoryStore;

/// Service providing ride-related operations.
#[derive(Clone)]
pub struct RidesService {
    store: Arc<MemoryStore>,
}

impl RidesService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Return the predefined locations and time slots.
    pub fn get_meta(&self) -> RidesMeta {
        RidesMeta {
            locations: vec![
                LocationPreset::Home,
                LocationPreset::School,
                LocationPreset::SportsClub,
                LocationPreset::CommunityCenter,
                LocationPreset::Custom,
            ],
            time_slots: vec![
                TimeSlotPreset::MorningPickup,
                TimeSlotPreset::AfternoonDropoff,
                TimeSlotPreset::EveningPractice,
                TimeSlotPreset::Custom,
            ],
        }
    }

    /// Create a new ride offer in pending status.
    pub fn create_offer(&self, payload: RideOfferCreate) -> Result<RideOffer> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let offer = RideOffer::from_create(payload);
        self.store.write().insert_ride_offer(offer.clone());
        tracing::debug!(offer_id = %offer.id, seats = offer.seats_available, "Ride offer created");
        Ok(offer)
    }

    pub fn list_offers(&self) -> Vec<RideOffer> {
        self.store.read().list_ride_offers()
    }

    /// Create a new ride request in pending status.
    pub fn create_request(&self, payload: RideRequestCreate) -> Result<RideRequest> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let request = RideRequest::from_create(payload);
        self.store.write().insert_ride_request(request.clone());
        tracing::debug!(request_id = %request.id, seats = request.seats_requested, "Ride request created");
        Ok(request)
    }

    pub fn list_requests(&self) -> Vec<RideRequest> {
        self.store.read().list_ride_requests()
    }

    /// Confirm a ride request against an offer.
    ///
    /// The entire check-then-act sequence runs under one store write guard:
    /// the seat-availability check and the status transition are atomic
    /// with respect to any other confirm or cancel.
    pub fn confirm_request(&self, request_id: Uuid, offer_id: Uuid) -> Result<RideRequest> {
        let mut inner = self.store.write();

        let seats_requested = {
            let request = inner
                .get_ride_request(request_id)
                .ok_or_else(|| AppError::NotFound(format!("Ride request {} not found", request_id)))?;
            let offer = inner
                .get_ride_offer(offer_id)
                .ok_or_else(|| AppError::NotFound(format!("Ride offer {} not found", offer_id)))?;

            if request.status != RideStatus::Pending {
                return Err(AppError::InvalidState(
                    "Request not in confirmable state".to_string(),
                ));
            }
            if !matches!(offer.status, RideStatus::Pending | RideStatus::Confirmed) {
                return Err(AppError::InvalidState(
                    "Offer not in a confirmable state".to_string(),
                ));
            }

            // Widened to u64 so the check cannot wrap when an offer's
            // capacity sits near u32::MAX.
            let allocated = inner.allocated_seats(offer_id);
            if allocated + u64::from(request.seats_requested) > u64::from(offer.seats_available) {
                return Err(AppError::CapacityExceeded);
            }

            // Preset-level compatibility only; free-text fields are never compared
            if request.time_slot.preset != offer.time_slot.preset {
                return Err(AppError::Mismatch("Time slot mismatch".to_string()));
            }
            if request.from_location.preset != offer.pickup_location.preset
                || request.to_location.preset != offer.dropoff_location.preset
            {
                return Err(AppError::Mismatch("Location mismatch".to_string()));
            }

            request.seats_requested
        };

        // All checks passed; both entities still exist because the guard
        // was never released.
        let confirmed = {
            let request = inner
                .get_ride_request_mut(request_id)
                .ok_or_else(|| AppError::NotFound(format!("Ride request {} not found", request_id)))?;
            request.status = RideStatus::Confirmed;
            request.matched_offer_id = Some(offer_id);
            request.meta.touch();
            request.clone()
        };

        // The offer transitions to confirmed on its first successful match,
        // not only when full.
        let offer = inner
            .get_ride_offer_mut(offer_id)
            .ok_or_else(|| AppError::NotFound(format!("Ride offer {} not found", offer_id)))?;
        if offer.status == RideStatus::Pending {
            offer.status = RideStatus::Confirmed;
        }
        offer.meta.touch();

        tracing::info!(
            request_id = %request_id,
            offer_id = %offer_id,
            seats = seats_requested,
            allocated = inner.allocated_seats(offer_id),
            "Ride request confirmed"
        );
        Ok(confirmed)
    }

    /// Cancel a ride request, releasing any allocated seats.
    ///
    /// Idempotent: cancelling an already-cancelled request returns its
    /// current state with no side effects. Seat release is implicit because
    /// allocation is recomputed from confirmed requests; a cancelled
    /// request simply stops counting. The matched offer stays confirmed
    /// even if its allocation drops to zero (MVP policy, no cascading
    /// offer-state recovery).
    pub fn cancel_request(&self, request_id: Uuid) -> Result<RideRequest> {
        let mut inner = self.store.write();
        let request = inner
            .get_ride_request_mut(request_id)
            .ok_or_else(|| AppError::NotFound(format!("Ride request {} not found", request_id)))?;

        if request.status == RideStatus::Cancelled {
            return Ok(request.clone());
        }

        let released_from = request.matched_offer_id.take();
        request.status = RideStatus::Cancelled;
        request.meta.touch();
        let cancelled = request.clone();

        if let Some(offer_id) = released_from {
            tracing::info!(
                request_id = %request_id,
                offer_id = %offer_id,
                seats = cancelled.seats_requested,
                "Ride request cancelled, seats released"
            );
        } else {
            tracing::info!(request_id = %request_id, "Ride request cancelled");
        }
        Ok(cancelled)
    }

    /// Cancel an offer, preventing further confirmations against it.
    ///
    /// Idempotent. Does not cascade to requests already confirmed against
    /// it (MVP policy).
    pub fn cancel_offer(&self, offer_id: Uuid) -> Result<RideOffer> {
        let mut inner = self.store.write();
        let offer = inner
            .get_ride_offer_mut(offer_id)
            .ok_or_else(|| AppError::NotFound(format!("Ride offer {} not found", offer_id)))?;

        if offer.status == RideStatus::Cancelled {
            return Ok(offer.clone());
        }

        offer.status = RideStatus::Cancelled;
        offer.meta.touch();
        tracing::info!(offer_id = %offer_id, "Ride offer cancelled");
        Ok(offer.clone())
    }
}
