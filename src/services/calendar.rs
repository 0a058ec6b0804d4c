// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar stub: synthetic upcoming events and per-user connected
//! sources. No real calendar data is fetched or parsed.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::{CalendarEvent, CalendarSource};
use crate::store::MemoryStore;

/// Service responsible for calendar integrations and data.
#[derive(Clone)]
pub struct CalendarService {
    store: Arc<MemoryStore>,
}

impl CalendarService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Return a placeholder list of upcoming events for the next `days` days.
    pub fn upcoming_events(&self, days: u32) -> Vec<CalendarEvent> {
        let now = Utc::now();
        (1..=days as i64)
            .map(|i| CalendarEvent {
                id: format!("evt-{}", i),
                title: format!("Practice Day {}", i),
                start: now + Duration::days(i),
                end: now + Duration::days(i) + Duration::hours(2),
                location: "sports_club".to_string(),
            })
            .collect()
    }

    /// Record a connected calendar source for a user.
    pub fn connect_source(&self, user_id: Uuid, provider: String) -> CalendarSource {
        let source = CalendarSource {
            id: Uuid::new_v4(),
            provider,
            connected_at: Utc::now(),
        };
        self.store
            .write()
            .insert_calendar_source(user_id, source.clone());
        tracing::info!(user_id = %user_id, provider = %source.provider, "Calendar source connected");
        source
    }

    /// List calendar sources connected by a user.
    pub fn list_sources(&self, user_id: Uuid) -> Vec<CalendarSource> {
        self.store.read().calendar_sources_for_user(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upcoming_events_shape() {
        let svc = CalendarService::new(Arc::new(MemoryStore::new()));
        let events = svc.upcoming_events(7);

        assert_eq!(events.len(), 7);
        assert_eq!(events[0].id, "evt-1");
        assert_eq!(events[0].location, "sports_club");
        for event in &events {
            assert_eq!(event.end - event.start, Duration::hours(2));
            assert!(event.start > Utc::now());
        }
    }

    #[test]
    fn test_sources_are_per_user() {
        let svc = CalendarService::new(Arc::new(MemoryStore::new()));
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        svc.connect_source(alice, "google".to_string());
        svc.connect_source(alice, "ical".to_string());

        assert_eq!(svc.list_sources(alice).len(), 2);
        assert!(svc.list_sources(bob).is_empty());
    }
}
