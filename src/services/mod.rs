// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod auth;
pub mod calendar;
pub mod notifications;
pub mod rides;
pub mod users;

pub use auth::{AuthService, AuthUser};
pub use calendar::CalendarService;
pub use notifications::NotificationsService;
pub use rides::RidesService;
pub use users::UsersService;
