// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod common;
pub mod enums;
pub mod ride;
pub mod user;

pub use common::{ApiMessage, CalendarEvent, CalendarSource, EntityMeta, Notification};
pub use enums::{LocationPreset, RideStatus, TimeSlotPreset, UserRole};
pub use ride::{
    Location, RideOffer, RideOfferCreate, RideRequest, RideRequestCreate, RidesMeta, TimeSlot,
};
pub use user::{AuthToken, LoginRequest, User, UserCreate, UserPublic, UserUpdate};
