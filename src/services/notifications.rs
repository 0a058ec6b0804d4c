// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Notifications: stored in the entity store, "delivered" via a log line.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::Notification;
use crate::store::MemoryStore;

/// Service for creating and listing notifications.
#[derive(Clone)]
pub struct NotificationsService {
    store: Arc<MemoryStore>,
}

impl NotificationsService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Create a notification for a user.
    ///
    /// The log line stands in for a real delivery provider.
    pub fn send(&self, user_id: Uuid, title: String, body: String) -> Result<Notification> {
        let notification = {
            let mut inner = self.store.write();
            if inner.get_user(user_id).is_none() {
                return Err(AppError::NotFound(format!("User {} not found", user_id)));
            }

            let notification = Notification {
                id: Uuid::new_v4(),
                user_id,
                title,
                body,
                read: false,
                created_at: Utc::now(),
            };
            inner.insert_notification(notification.clone());
            notification
        };

        tracing::info!(
            notification_id = %notification.id,
            user_id = %user_id,
            title = %notification.title,
            "Dispatching notification (mock delivery)"
        );
        Ok(notification)
    }

    /// List notifications for a user, oldest first.
    pub fn list(&self, user_id: Uuid) -> Vec<Notification> {
        self.store.read().notifications_for_user(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityMeta, User, UserRole};

    fn setup() -> (NotificationsService, Uuid) {
        let store = Arc::new(MemoryStore::new());
        let user = User {
            id: Uuid::new_v4(),
            email: "notify@example.com".to_string(),
            full_name: "Norah Notify".to_string(),
            role: UserRole::Parent,
            meta: EntityMeta::now(),
        };
        let user_id = user.id;
        store.write().insert_user(user, "hash".to_string());
        (NotificationsService::new(store), user_id)
    }

    #[test]
    fn test_send_and_list() {
        let (svc, user_id) = setup();

        svc.send(user_id, "Ride confirmed".to_string(), "See you at 8".to_string())
            .unwrap();
        svc.send(user_id, "Ride cancelled".to_string(), "Sorry!".to_string())
            .unwrap();

        let list = svc.list(user_id);
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|n| !n.read));
        // Only the target user sees them
        assert!(svc.list(Uuid::new_v4()).is_empty());
    }

    #[test]
    fn test_send_to_unknown_user_not_found() {
        let (svc, _) = setup();
        let err = svc
            .send(Uuid::new_v4(), "t".to_string(), "b".to_string())
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
