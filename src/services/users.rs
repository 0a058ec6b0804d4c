// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User management: creation with hashed passwords, updates, deletion.

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{EntityMeta, User, UserCreate, UserUpdate};
use crate::security::hash_password;
use crate::store::MemoryStore;

/// Service providing user-related operations.
#[derive(Clone)]
pub struct UsersService {
    store: Arc<MemoryStore>,
    secret_key: String,
}

impl UsersService {
    pub fn new(store: Arc<MemoryStore>, secret_key: String) -> Self {
        Self { store, secret_key }
    }

    /// Create a user with a hashed password.
    ///
    /// Email uniqueness is enforced here, under the same write guard as the
    /// insert, so two concurrent signups cannot both claim an email.
    pub fn create_user(&self, payload: UserCreate) -> Result<User> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let password_hash = hash_password(&self.secret_key, &payload.password);
        let user = User {
            id: Uuid::new_v4(),
            email: payload.email,
            full_name: payload.full_name,
            role: payload.role,
            meta: EntityMeta::now(),
        };

        let mut inner = self.store.write();
        if inner.get_user_by_email(&user.email).is_some() {
            return Err(AppError::Validation(format!(
                "Email already registered: {}",
                user.email
            )));
        }
        inner.insert_user(user.clone(), password_hash);

        tracing::debug!(user_id = %user.id, role = ?user.role, "User created");
        Ok(user)
    }

    /// Update a user's profile fields and optionally their password.
    pub fn update_user(&self, user_id: Uuid, payload: UserUpdate) -> Result<User> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let new_hash = payload
            .password
            .as_deref()
            .map(|p| hash_password(&self.secret_key, p));

        let mut inner = self.store.write();
        let user = inner
            .get_user_mut(user_id)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let mut changed = false;
        if let Some(full_name) = payload.full_name {
            user.full_name = full_name;
            changed = true;
        }
        if let Some(role) = payload.role {
            user.role = role;
            changed = true;
        }
        if changed {
            user.meta.touch();
        }
        let updated = user.clone();

        if let Some(hash) = new_hash {
            inner.set_password_hash(user_id, hash);
        }

        Ok(updated)
    }

    pub fn get_user(&self, user_id: Uuid) -> Option<User> {
        self.store.read().get_user(user_id).cloned()
    }

    pub fn list_users(&self) -> Vec<User> {
        self.store.read().list_users()
    }

    /// Delete a user by ID. Returns whether the user existed.
    pub fn delete_user(&self, user_id: Uuid) -> bool {
        self.store.write().delete_user(user_id)
    }
}
