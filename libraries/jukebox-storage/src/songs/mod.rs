//! Song registration and lookup

use jukebox_core::{error::Result, types::AlbumId, types::Song, types::SongId, JukeboxError};
use tracing::debug;

use crate::albums;
use crate::state::CatalogState;

/// Register a song under the titled album.
///
/// Fails with `AlbumNotFound` before touching any index when no album
/// carries the title; duplicate album titles resolve to the first
/// registered. The song starts with zero likes and an empty liker list.
pub(crate) fn create(
    state: &mut CatalogState,
    title: &str,
    album_title: &str,
    length_secs: u32,
) -> Result<Song> {
    let album_id = albums::first_by_title(state, album_title)
        .ok_or_else(|| JukeboxError::AlbumNotFound(album_title.to_string()))?;

    let id = state.mint_song_id();
    let song = Song::new(id, title, length_secs);

    state.songs.insert(id, song.clone());
    state
        .songs_by_title
        .entry(title.to_string())
        .or_default()
        .push(id);
    state.album_songs.entry(album_id).or_default().push(id);
    state.song_album.insert(id, album_id);
    state.song_likers.insert(id, Vec::new());

    debug!("Registered song {} ({}) on album {}", id, title, album_id);
    Ok(song)
}

/// First-registered song carrying the title, if any.
pub(crate) fn first_by_title(state: &CatalogState, title: &str) -> Option<SongId> {
    state
        .songs_by_title
        .get(title)
        .and_then(|ids| ids.first())
        .copied()
}

/// Every song carrying the title, in registration order.
pub(crate) fn all_by_title(state: &CatalogState, title: &str) -> Vec<SongId> {
    state.songs_by_title.get(title).cloned().unwrap_or_default()
}

pub(crate) fn get_by_id(state: &CatalogState, id: SongId) -> Option<Song> {
    state.songs.get(&id).cloned()
}

pub(crate) fn get_by_album(state: &CatalogState, album_id: AlbumId) -> Vec<Song> {
    state
        .album_songs
        .get(&album_id)
        .map(|ids| {
            ids.iter()
                .filter_map(|id| state.songs.get(id))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn get_all(state: &CatalogState) -> Vec<Song> {
    state.songs.values().cloned().collect()
}
