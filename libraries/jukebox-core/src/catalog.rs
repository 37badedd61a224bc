//! Catalog store trait

use crate::error::Result;
use crate::types::{
    Album, AlbumId, Artist, ArtistId, CatalogStats, Playlist, ResolvedPlaylist, Song, SongId,
    User,
};
use async_trait::async_trait;

/// Catalog context providing access to store operations
///
/// This trait abstracts the catalog so the in-memory store and future
/// persistent or remote implementations share one seam.
///
/// Natural keys do the external addressing: users by mobile number,
/// artists by name, albums/songs/playlists by title. Where titles may
/// repeat, lookups resolve to the first-registered match.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    // ========================================================================
    // Users
    // ========================================================================

    /// Register a user
    ///
    /// Never fails: if the mobile number is already registered, the
    /// existing user is returned unchanged.
    async fn create_user(&self, name: &str, mobile: &str) -> Result<User>;

    /// Get user by mobile number
    async fn get_user_by_mobile(&self, mobile: &str) -> Result<Option<User>>;

    /// Get all users in registration order
    async fn get_all_users(&self) -> Result<Vec<User>>;

    // ========================================================================
    // Artists
    // ========================================================================

    /// Register an artist with zero likes and no albums
    async fn create_artist(&self, name: &str) -> Result<Artist>;

    /// Get artist by ID
    async fn get_artist_by_id(&self, id: ArtistId) -> Result<Option<Artist>>;

    /// Find artist by exact name (first registered wins on duplicates)
    async fn find_artist_by_name(&self, name: &str) -> Result<Option<Artist>>;

    /// Get all artists in registration order
    async fn get_all_artists(&self) -> Result<Vec<Artist>>;

    // ========================================================================
    // Albums
    // ========================================================================

    /// Register an album under the named artist
    ///
    /// Resolves the artist by name and auto-provisions one when absent,
    /// so this never fails.
    async fn create_album(&self, title: &str, artist_name: &str) -> Result<Album>;

    /// Get album by ID
    async fn get_album_by_id(&self, id: AlbumId) -> Result<Option<Album>>;

    /// Get an artist's albums in creation order
    async fn get_albums_by_artist(&self, artist_id: ArtistId) -> Result<Vec<Album>>;

    // ========================================================================
    // Songs
    // ========================================================================

    /// Register a song under the titled album
    ///
    /// Fails with `AlbumNotFound` when no album carries that title.
    async fn create_song(&self, title: &str, album_title: &str, length_secs: u32)
        -> Result<Song>;

    /// Get song by ID
    async fn get_song_by_id(&self, id: SongId) -> Result<Option<Song>>;

    /// Get an album's songs in creation order
    async fn get_songs_by_album(&self, album_id: AlbumId) -> Result<Vec<Song>>;

    /// Get all songs in registration order
    async fn get_all_songs(&self) -> Result<Vec<Song>>;

    /// Convenience alias for `get_song_by_id`
    async fn get_song(&self, id: SongId) -> Result<Option<Song>> {
        self.get_song_by_id(id).await
    }

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Create a playlist holding every song of exactly the given length
    ///
    /// The creator (resolved by mobile, `UserNotFound` otherwise) becomes
    /// the first listener. The song snapshot is fixed at creation.
    async fn create_playlist_by_length(
        &self,
        mobile: &str,
        title: &str,
        length_secs: u32,
    ) -> Result<ResolvedPlaylist>;

    /// Create a playlist from the requested song titles
    ///
    /// Songs are selected per requested title in input order, each title
    /// contributing all of its matches in registration order. Unknown
    /// titles select nothing.
    async fn create_playlist_by_titles(
        &self,
        mobile: &str,
        title: &str,
        song_titles: &[String],
    ) -> Result<ResolvedPlaylist>;

    /// Subscribe a user to the titled playlist
    ///
    /// Idempotent: the creator and existing listeners pass through
    /// unchanged. Fails with `UserNotFound` / `PlaylistNotFound`.
    async fn join_playlist(&self, mobile: &str, playlist_title: &str)
        -> Result<ResolvedPlaylist>;

    /// Get the playlists a user listens to, in join order
    async fn get_playlists_for_user(&self, mobile: &str) -> Result<Vec<Playlist>>;

    /// Get the playlist a user created most recently
    async fn get_created_playlist(&self, mobile: &str) -> Result<Option<Playlist>>;

    // ========================================================================
    // Likes
    // ========================================================================

    /// Record a user's like of the titled song
    ///
    /// The first like per (user, song) pair increments the song and its
    /// artist by one each; repeats are total no-ops. Fails with
    /// `UserNotFound` / `SongNotFound`.
    async fn like_song(&self, mobile: &str, song_title: &str) -> Result<Song>;

    /// Get the users who liked a song, in like order
    async fn get_song_likers(&self, song_id: SongId) -> Result<Vec<User>>;

    // ========================================================================
    // Charts
    // ========================================================================

    /// Name of the artist with the most likes
    ///
    /// Ties keep the first-registered artist; an empty catalog yields an
    /// empty string.
    async fn most_popular_artist(&self) -> Result<String>;

    /// Title of the song with the most likes
    ///
    /// Ties keep the first-registered song; an empty catalog yields an
    /// empty string.
    async fn most_popular_song(&self) -> Result<String>;

    // ========================================================================
    // Stats
    // ========================================================================

    /// Entity counts plus total recorded likes
    async fn stats(&self) -> Result<CatalogStats>;
}
