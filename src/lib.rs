// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Carpool Backend: coordinate ride offers and requests for a community
//! carpool group.
//!
//! This crate provides the backend API for managing users, ride offers and
//! requests (including seat allocation when a request is confirmed against
//! an offer), notifications, and a mock calendar feed. All state lives in an
//! in-memory store; nothing survives a restart.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod security;
pub mod services;
pub mod store;

use std::sync::Arc;

use config::Config;
use security::TokenCodec;
use services::{AuthService, CalendarService, NotificationsService, RidesService, UsersService};
use store::MemoryStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<MemoryStore>,
    pub auth: AuthService,
    pub users: UsersService,
    pub rides: RidesService,
    pub notifications: NotificationsService,
    pub calendar: CalendarService,
}

impl AppState {
    /// Wire up all services against a fresh in-memory store.
    pub fn new(config: Config) -> Self {
        let store = Arc::new(MemoryStore::new());
        let codec = TokenCodec::new(
            config.secret_key.as_bytes(),
            &config.app_name,
            config.access_token_expire_minutes,
        );

        Self {
            auth: AuthService::new(codec, store.clone()),
            users: UsersService::new(store.clone(), config.secret_key.clone()),
            rides: RidesService::new(store.clone()),
            notifications: NotificationsService::new(store.clone()),
            calendar: CalendarService::new(store.clone()),
            store,
            config,
        }
    }
}
