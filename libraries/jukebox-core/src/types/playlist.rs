//! Playlist types

use super::ids::PlaylistId;
use super::song::Song;
use super::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playlist
///
/// The song list is a snapshot fixed at creation; songs registered later
/// never join an existing playlist. Creator and listeners live in the
/// catalog indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist title
    pub title: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new playlist record
    pub fn new(id: PlaylistId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            created_at: Utc::now(),
        }
    }
}

/// Playlist with its associations resolved for display
///
/// Returned by the playlist operations so callers can render the result
/// without issuing follow-up queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPlaylist {
    /// The playlist record itself
    pub playlist: Playlist,

    /// The user who created the playlist
    pub creator: User,

    /// Song snapshot, in selection order
    pub songs: Vec<Song>,

    /// Current listeners, in join order (creator first)
    pub listeners: Vec<User>,
}
