//! User account record - the identity store's single source of truth.

use crate::{UserProfile, UserRole};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account as persisted in the users bucket.
///
/// The `credential` field never crosses the store boundary; callers are
/// handed a [`UserProfile`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique case-insensitive key, normalized to lowercase at write time.
    pub email: String,
    /// Codec output of the plaintext password. See [`crate::credential`].
    pub credential: String,
    pub role: UserRole,
    /// Modeled but never flipped by any flow in scope.
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with default values.
    pub fn new(name: String, email: String, credential: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email: email.to_lowercase(),
            credential,
            role,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Credential-free projection handed to consumers.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            is_verified: self.is_verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
