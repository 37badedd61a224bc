//! Album registration and lookup

use jukebox_core::{error::Result, types::Album, types::AlbumId, types::ArtistId};
use tracing::debug;

use crate::artists;
use crate::state::CatalogState;

/// Register an album under the named artist.
///
/// The artist is resolved by name and auto-provisioned when absent, so
/// this never fails. The album joins the artist's list in creation order
/// and both directions of the link are recorded.
pub(crate) fn create(state: &mut CatalogState, title: &str, artist_name: &str) -> Result<Album> {
    let artist_id = artists::find_or_create(state, artist_name)?;

    let id = state.mint_album_id();
    let album = Album::new(id, title);

    state.albums.insert(id, album.clone());
    state
        .albums_by_title
        .entry(title.to_string())
        .or_default()
        .push(id);
    state.artist_albums.entry(artist_id).or_default().push(id);
    state.album_artist.insert(id, artist_id);
    state.album_songs.insert(id, Vec::new());

    debug!("Registered album {} ({}) under artist {}", id, title, artist_id);
    Ok(album)
}

/// First-registered album carrying the title, if any.
pub(crate) fn first_by_title(state: &CatalogState, title: &str) -> Option<AlbumId> {
    state
        .albums_by_title
        .get(title)
        .and_then(|ids| ids.first())
        .copied()
}

pub(crate) fn get_by_id(state: &CatalogState, id: AlbumId) -> Option<Album> {
    state.albums.get(&id).cloned()
}

pub(crate) fn get_by_artist(state: &CatalogState, artist_id: ArtistId) -> Vec<Album> {
    state
        .artist_albums
        .get(&artist_id)
        .map(|ids| {
            ids.iter()
                .filter_map(|id| state.albums.get(id))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}
