//! Artist types

use super::ids::ArtistId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An artist
///
/// The like counter starts at zero and only ever moves through the song
/// like cascade; there is no unlike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Unique artist identifier
    pub id: ArtistId,

    /// Artist name
    pub name: String,

    /// Accumulated likes across all of this artist's songs
    pub likes: u64,

    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl Artist {
    /// Create a new artist record with zero likes
    pub fn new(id: ArtistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            likes: 0,
            created_at: Utc::now(),
        }
    }
}
