//! User model for storage and session flows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User profile stored in the users tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque user ID (also the storage key)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address, unique across all users and matched byte for byte
    pub email: String,
    /// Running point balance, maintained by the ledger operations
    pub total_points: u32,
    /// When the account was created
    pub joined_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh account with a zero point balance.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            total_points: 0,
            joined_at: Utc::now(),
        }
    }
}
