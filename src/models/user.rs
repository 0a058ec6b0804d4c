//! User model for storage and API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::common::EntityMeta;
use crate::models::enums::UserRole;

/// User entity held in the store.
///
/// The password hash is kept in a separate store map and never lives on
/// this struct, so it cannot leak through serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Email address (unique across users)
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub meta: EntityMeta,
}

/// Payload for creating a new user.
#[derive(Debug, Deserialize, Validate)]
pub struct UserCreate {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub full_name: String,
    pub role: UserRole,
    #[validate(length(min = 6))]
    pub password: String,
}

/// Payload for updating user details. All fields optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UserUpdate {
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
    #[validate(length(min = 6))]
    pub password: Option<String>,
}

/// Public view of a user (no sensitive data).
#[derive(Debug, Clone, Serialize)]
pub struct UserPublic {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
}

impl From<&User> for UserPublic {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            email: u.email.clone(),
            full_name: u.full_name.clone(),
            role: u.role,
        }
    }
}

/// Authentication token response.
#[derive(Debug, Serialize)]
pub struct AuthToken {
    pub access_token: String,
    pub token_type: String,
}

impl AuthToken {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Login request payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
