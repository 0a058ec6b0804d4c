// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory entity store.
//!
//! All collections live behind a single `RwLock`. Callers that need a
//! multi-step check-then-act sequence (seat allocation in particular) take
//! the write guard once and perform the whole sequence under it, so two
//! concurrent confirms against the same offer's last seat cannot both
//! succeed. Nothing here survives a restart.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::models::{CalendarSource, Notification, RideOffer, RideRequest, RideStatus, User};

/// The collections owned by the store. Only reachable through a
/// [`MemoryStore`] guard.
#[derive(Default)]
pub struct StoreInner {
    users: HashMap<Uuid, User>,
    /// user_id -> password hash, kept off the User entity
    passwords: HashMap<Uuid, String>,
    ride_offers: HashMap<Uuid, RideOffer>,
    ride_requests: HashMap<Uuid, RideRequest>,
    notifications: HashMap<Uuid, Notification>,
    calendar_sources: HashMap<Uuid, Vec<CalendarSource>>,
}

/// Process-lifetime storage for all entity kinds.
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// Acquire the shared read guard.
    pub fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        // A panic mid-operation cannot leave the maps in a state worse than
        // the panic itself, so recover from poisoning instead of unwrapping.
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquire the exclusive write guard.
    ///
    /// Hold this across any check-then-act sequence that must be atomic.
    pub fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clear all entity collections, atomically relative to other store
    /// operations. Intended for test/dev harnesses.
    pub fn reset(&self) {
        *self.write() = StoreInner::default();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreInner {
    // ─── Users ───────────────────────────────────────────────

    pub fn insert_user(&mut self, user: User, password_hash: String) {
        self.passwords.insert(user.id, password_hash);
        self.users.insert(user.id, user);
    }

    pub fn get_user(&self, user_id: Uuid) -> Option<&User> {
        self.users.get(&user_id)
    }

    pub fn get_user_mut(&mut self, user_id: Uuid) -> Option<&mut User> {
        self.users.get_mut(&user_id)
    }

    /// Look up a user and their password hash by email.
    pub fn get_user_by_email(&self, email: &str) -> Option<(&User, &str)> {
        self.users.values().find(|u| u.email == email).map(|u| {
            let hash = self.passwords.get(&u.id).map(String::as_str).unwrap_or("");
            (u, hash)
        })
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    pub fn set_password_hash(&mut self, user_id: Uuid, password_hash: String) {
        self.passwords.insert(user_id, password_hash);
    }

    /// Delete a user. Returns whether the user existed.
    pub fn delete_user(&mut self, user_id: Uuid) -> bool {
        let existed = self.users.remove(&user_id).is_some();
        if existed {
            self.passwords.remove(&user_id);
        }
        existed
    }

    // ─── Ride offers ─────────────────────────────────────────

    pub fn insert_ride_offer(&mut self, offer: RideOffer) {
        self.ride_offers.insert(offer.id, offer);
    }

    pub fn get_ride_offer(&self, offer_id: Uuid) -> Option<&RideOffer> {
        self.ride_offers.get(&offer_id)
    }

    pub fn get_ride_offer_mut(&mut self, offer_id: Uuid) -> Option<&mut RideOffer> {
        self.ride_offers.get_mut(&offer_id)
    }

    pub fn list_ride_offers(&self) -> Vec<RideOffer> {
        self.ride_offers.values().cloned().collect()
    }

    // ─── Ride requests ───────────────────────────────────────

    pub fn insert_ride_request(&mut self, request: RideRequest) {
        self.ride_requests.insert(request.id, request);
    }

    pub fn get_ride_request(&self, request_id: Uuid) -> Option<&RideRequest> {
        self.ride_requests.get(&request_id)
    }

    pub fn get_ride_request_mut(&mut self, request_id: Uuid) -> Option<&mut RideRequest> {
        self.ride_requests.get_mut(&request_id)
    }

    pub fn list_ride_requests(&self) -> Vec<RideRequest> {
        self.ride_requests.values().cloned().collect()
    }

    /// Seats currently allocated on an offer.
    ///
    /// Recomputed from confirmed request state on every call. There is no
    /// separately maintained counter, so this cannot drift from the
    /// requests it is derived from. Summed as `u64`: individual requests
    /// are bounded by `u32` but their total is not.
    pub fn allocated_seats(&self, offer_id: Uuid) -> u64 {
        self.ride_requests
            .values()
            .filter(|r| r.status == RideStatus::Confirmed && r.matched_offer_id == Some(offer_id))
            .map(|r| u64::from(r.seats_requested))
            .sum()
    }

    // ─── Notifications ───────────────────────────────────────

    pub fn insert_notification(&mut self, notification: Notification) {
        self.notifications.insert(notification.id, notification);
    }

    pub fn notifications_for_user(&self, user_id: Uuid) -> Vec<Notification> {
        let mut list: Vec<Notification> = self
            .notifications
            .values()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by_key(|n| n.created_at);
        list
    }

    // ─── Calendar sources ────────────────────────────────────

    pub fn insert_calendar_source(&mut self, user_id: Uuid, source: CalendarSource) {
        self.calendar_sources.entry(user_id).or_default().push(source);
    }

    pub fn calendar_sources_for_user(&self, user_id: Uuid) -> Vec<CalendarSource> {
        self.calendar_sources
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }
}
