//! Catalog state aggregate

use std::collections::{BTreeMap, HashMap};

use jukebox_core::types::{
    Album, AlbumId, Artist, ArtistId, Playlist, PlaylistId, Song, SongId, User, UserId,
};

/// Every entity table and association index of the catalog.
///
/// Entity tables are keyed by ordinal ID, so iterating them yields
/// registration order. Records stay value-like; each relationship lives in
/// one forward index, with a reverse link alongside where an operation
/// needs the walk back.
#[derive(Default)]
pub(crate) struct CatalogState {
    // Entity tables
    pub(crate) users: BTreeMap<UserId, User>,
    pub(crate) artists: BTreeMap<ArtistId, Artist>,
    pub(crate) albums: BTreeMap<AlbumId, Album>,
    pub(crate) songs: BTreeMap<SongId, Song>,
    pub(crate) playlists: BTreeMap<PlaylistId, Playlist>,

    // Natural-key indices. Buckets keep push order, so position 0 is the
    // first-registered holder of the key.
    pub(crate) user_by_mobile: HashMap<String, UserId>,
    pub(crate) artist_by_name: HashMap<String, ArtistId>,
    pub(crate) albums_by_title: HashMap<String, Vec<AlbumId>>,
    pub(crate) songs_by_title: HashMap<String, Vec<SongId>>,
    pub(crate) playlists_by_title: HashMap<String, Vec<PlaylistId>>,

    // Forward associations
    pub(crate) artist_albums: HashMap<ArtistId, Vec<AlbumId>>,
    pub(crate) album_songs: HashMap<AlbumId, Vec<SongId>>,
    pub(crate) playlist_songs: HashMap<PlaylistId, Vec<SongId>>,
    pub(crate) playlist_listeners: HashMap<PlaylistId, Vec<UserId>>,
    pub(crate) user_playlists: HashMap<UserId, Vec<PlaylistId>>,
    pub(crate) created_playlist: HashMap<UserId, PlaylistId>,
    pub(crate) song_likers: HashMap<SongId, Vec<UserId>>,

    // Reverse links for the like cascade and ownership checks
    pub(crate) song_album: HashMap<SongId, AlbumId>,
    pub(crate) album_artist: HashMap<AlbumId, ArtistId>,
    pub(crate) playlist_creator: HashMap<PlaylistId, UserId>,

    // ID sequences, one per entity kind. The next assigned ordinal is
    // sequence + 1, so the first record of each kind gets ID 1.
    user_seq: u64,
    artist_seq: u64,
    album_seq: u64,
    song_seq: u64,
    playlist_seq: u64,
}

impl CatalogState {
    pub(crate) fn mint_user_id(&mut self) -> UserId {
        self.user_seq += 1;
        UserId::new(self.user_seq)
    }

    pub(crate) fn mint_artist_id(&mut self) -> ArtistId {
        self.artist_seq += 1;
        ArtistId::new(self.artist_seq)
    }

    pub(crate) fn mint_album_id(&mut self) -> AlbumId {
        self.album_seq += 1;
        AlbumId::new(self.album_seq)
    }

    pub(crate) fn mint_song_id(&mut self) -> SongId {
        self.song_seq += 1;
        SongId::new(self.song_seq)
    }

    pub(crate) fn mint_playlist_id(&mut self) -> PlaylistId {
        self.playlist_seq += 1;
        PlaylistId::new(self.playlist_seq)
    }
}
