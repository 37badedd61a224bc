//! In-memory catalog facade

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use jukebox_core::{
    catalog::CatalogStore,
    error::Result,
    types::{
        Album, AlbumId, Artist, ArtistId, CatalogStats, Playlist, ResolvedPlaylist, Song,
        SongId, User,
    },
    JukeboxError,
};

use crate::state::CatalogState;
use crate::{albums, artists, charts, integrity, likes, playlists, songs, users};

/// In-memory catalog store
///
/// One reader-writer lock guards the whole state aggregate: mutations
/// hold the write lock for their full duration, reads share the read
/// lock among themselves. No method suspends while holding the lock,
/// and a poisoned lock surfaces as an integrity error.
pub struct InMemoryCatalog {
    inner: RwLock<CatalogState>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CatalogState::default()),
        }
    }

    /// Audit every cross-reference and counter in the store
    pub fn check_integrity(&self) -> Result<()> {
        let state = self.read()?;
        integrity::check(&state)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CatalogState>> {
        self.inner
            .read()
            .map_err(|_| JukeboxError::integrity("catalog read lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CatalogState>> {
        self.inner
            .write()
            .map_err(|_| JukeboxError::integrity("catalog write lock poisoned"))
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    // Users
    async fn create_user(&self, name: &str, mobile: &str) -> Result<User> {
        let mut state = self.write()?;
        users::create(&mut state, name, mobile)
    }

    async fn get_user_by_mobile(&self, mobile: &str) -> Result<Option<User>> {
        let state = self.read()?;
        Ok(users::get_by_mobile(&state, mobile))
    }

    async fn get_all_users(&self) -> Result<Vec<User>> {
        let state = self.read()?;
        Ok(users::get_all(&state))
    }

    // Artists
    async fn create_artist(&self, name: &str) -> Result<Artist> {
        let mut state = self.write()?;
        artists::create(&mut state, name)
    }

    async fn get_artist_by_id(&self, id: ArtistId) -> Result<Option<Artist>> {
        let state = self.read()?;
        Ok(artists::get_by_id(&state, id))
    }

    async fn find_artist_by_name(&self, name: &str) -> Result<Option<Artist>> {
        let state = self.read()?;
        Ok(artists::find_by_name(&state, name))
    }

    async fn get_all_artists(&self) -> Result<Vec<Artist>> {
        let state = self.read()?;
        Ok(artists::get_all(&state))
    }

    // Albums
    async fn create_album(&self, title: &str, artist_name: &str) -> Result<Album> {
        let mut state = self.write()?;
        albums::create(&mut state, title, artist_name)
    }

    async fn get_album_by_id(&self, id: AlbumId) -> Result<Option<Album>> {
        let state = self.read()?;
        Ok(albums::get_by_id(&state, id))
    }

    async fn get_albums_by_artist(&self, artist_id: ArtistId) -> Result<Vec<Album>> {
        let state = self.read()?;
        Ok(albums::get_by_artist(&state, artist_id))
    }

    // Songs
    async fn create_song(
        &self,
        title: &str,
        album_title: &str,
        length_secs: u32,
    ) -> Result<Song> {
        let mut state = self.write()?;
        songs::create(&mut state, title, album_title, length_secs)
    }

    async fn get_song_by_id(&self, id: SongId) -> Result<Option<Song>> {
        let state = self.read()?;
        Ok(songs::get_by_id(&state, id))
    }

    async fn get_songs_by_album(&self, album_id: AlbumId) -> Result<Vec<Song>> {
        let state = self.read()?;
        Ok(songs::get_by_album(&state, album_id))
    }

    async fn get_all_songs(&self) -> Result<Vec<Song>> {
        let state = self.read()?;
        Ok(songs::get_all(&state))
    }

    // Playlists
    async fn create_playlist_by_length(
        &self,
        mobile: &str,
        title: &str,
        length_secs: u32,
    ) -> Result<ResolvedPlaylist> {
        let mut state = self.write()?;
        playlists::create_by_length(&mut state, mobile, title, length_secs)
    }

    async fn create_playlist_by_titles(
        &self,
        mobile: &str,
        title: &str,
        song_titles: &[String],
    ) -> Result<ResolvedPlaylist> {
        let mut state = self.write()?;
        playlists::create_by_titles(&mut state, mobile, title, song_titles)
    }

    async fn join_playlist(
        &self,
        mobile: &str,
        playlist_title: &str,
    ) -> Result<ResolvedPlaylist> {
        let mut state = self.write()?;
        playlists::join(&mut state, mobile, playlist_title)
    }

    async fn get_playlists_for_user(&self, mobile: &str) -> Result<Vec<Playlist>> {
        let state = self.read()?;
        playlists::get_for_user(&state, mobile)
    }

    async fn get_created_playlist(&self, mobile: &str) -> Result<Option<Playlist>> {
        let state = self.read()?;
        playlists::get_created(&state, mobile)
    }

    // Likes
    async fn like_song(&self, mobile: &str, song_title: &str) -> Result<Song> {
        let mut state = self.write()?;
        likes::like(&mut state, mobile, song_title)
    }

    async fn get_song_likers(&self, song_id: SongId) -> Result<Vec<User>> {
        let state = self.read()?;
        likes::likers_of(&state, song_id)
    }

    // Charts
    async fn most_popular_artist(&self) -> Result<String> {
        let state = self.read()?;
        Ok(charts::most_popular_artist(&state))
    }

    async fn most_popular_song(&self) -> Result<String> {
        let state = self.read()?;
        Ok(charts::most_popular_song(&state))
    }

    // Stats
    async fn stats(&self) -> Result<CatalogStats> {
        let state = self.read()?;
        Ok(CatalogStats {
            users: state.users.len(),
            artists: state.artists.len(),
            albums: state.albums.len(),
            songs: state.songs.len(),
            playlists: state.playlists.len(),
            likes: likes::total(&state),
        })
    }
}
