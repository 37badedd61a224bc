//! Song types

use super::ids::SongId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Length in seconds
    pub length_secs: u32,

    /// Distinct users who have liked this song
    pub likes: u64,

    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl Song {
    /// Create a new song record with zero likes
    pub fn new(id: SongId, title: impl Into<String>, length_secs: u32) -> Self {
        Self {
            id,
            title: title.into(),
            length_secs,
            likes: 0,
            created_at: Utc::now(),
        }
    }
}
