/// ID types for Jukebox entities
///
/// IDs are assigned by the catalog registry as per-kind ordinal sequences
/// starting at 1, so ascending ID order is registration order.
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Create a user ID from its ordinal value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner ordinal value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Artist identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(u64);

impl ArtistId {
    /// Create an artist ID from its ordinal value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner ordinal value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Album identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(u64);

impl AlbumId {
    /// Create an album ID from its ordinal value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner ordinal value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Song identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(u64);

impl SongId {
    /// Create a song ID from its ordinal value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner ordinal value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Playlist identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(u64);

impl PlaylistId {
    /// Create a playlist ID from its ordinal value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner ordinal value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
