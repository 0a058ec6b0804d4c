// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auth gate: maps bearer tokens to authenticated identities and enforces
//! coarse role checks.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::UserRole;
use crate::security::TokenCodec;
use crate::store::MemoryStore;

/// Authenticated caller identity resolved from a bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: UserRole,
}

/// Resolves tokens against the user store and enforces role checks.
#[derive(Clone)]
pub struct AuthService {
    codec: TokenCodec,
    store: Arc<MemoryStore>,
}

impl AuthService {
    pub fn new(codec: TokenCodec, store: Arc<MemoryStore>) -> Self {
        Self { codec, store }
    }

    /// Issue an access token for a subject, using the configured TTL.
    pub fn issue_token(&self, subject: &str) -> anyhow::Result<String> {
        self.codec.issue(subject, None)
    }

    /// Resolve a token to a caller identity.
    ///
    /// Returns `None` if the token is invalid or expired, or if the subject
    /// user no longer exists in the store.
    pub fn resolve(&self, token: &str) -> Option<AuthUser> {
        let claims = self.codec.verify(token)?;
        let user_id: Uuid = claims.sub.parse().ok()?;

        let inner = self.store.read();
        let user = inner.get_user(user_id)?;
        Some(AuthUser {
            user_id: user.id,
            role: user.role,
        })
    }

    /// Resolve a token or fail with Unauthorized.
    pub fn require_authenticated(&self, token: &str) -> Result<AuthUser> {
        self.resolve(token).ok_or(AppError::Unauthorized)
    }

    /// Resolve a token and require an exact role match.
    ///
    /// The check is exact, not hierarchical: an admin token does not
    /// satisfy a driver-only check.
    pub fn require_role(&self, token: &str, role: UserRole) -> Result<AuthUser> {
        let user = self.require_authenticated(token)?;
        if user.role != role {
            return Err(AppError::Forbidden);
        }
        Ok(user)
    }
}
