/// User domain type
use super::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account
///
/// The mobile number is the external lookup key and is unique per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Mobile number (natural key, unique)
    pub mobile: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record
    pub fn new(id: UserId, name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            mobile: mobile.into(),
            created_at: Utc::now(),
        }
    }
}
