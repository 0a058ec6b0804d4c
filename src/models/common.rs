// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared model pieces: entity metadata, notifications, calendar stubs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generic API message payload.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Common metadata timestamps for entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMeta {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EntityMeta {
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the `updated_at` timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for EntityMeta {
    fn default() -> Self {
        Self::now()
    }
}

/// Notification entity. Immutable once created except for the read flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    /// User to notify
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// A calendar source connected by a user (mock; no real provider I/O).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarSource {
    pub id: Uuid,
    pub provider: String,
    pub connected_at: DateTime<Utc>,
}

/// A synthetic upcoming calendar event.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: String,
}
