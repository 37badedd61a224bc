//! Catalog-wide counters

use serde::{Deserialize, Serialize};

/// Entity counts plus the total number of recorded likes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Registered users
    pub users: usize,

    /// Registered artists
    pub artists: usize,

    /// Registered albums
    pub albums: usize,

    /// Registered songs
    pub songs: usize,

    /// Registered playlists
    pub playlists: usize,

    /// Distinct (user, song) like pairs recorded
    pub likes: u64,
}
