//! Playlist snapshots and listener membership

use jukebox_core::{
    error::Result,
    types::{Playlist, PlaylistId, ResolvedPlaylist, SongId, UserId},
    JukeboxError,
};
use tracing::{debug, info};

use crate::state::CatalogState;
use crate::{songs, users};

/// Create a playlist holding every registered song of exactly the given
/// length, in registration order.
///
/// The creator is resolved before anything is written, so an unknown
/// mobile leaves the catalog untouched.
pub(crate) fn create_by_length(
    state: &mut CatalogState,
    mobile: &str,
    title: &str,
    length_secs: u32,
) -> Result<ResolvedPlaylist> {
    let creator = users::require_by_mobile(state, mobile)?;

    let selected: Vec<SongId> = state
        .songs
        .values()
        .filter(|song| song.length_secs == length_secs)
        .map(|song| song.id)
        .collect();

    register_snapshot(state, creator, title, selected)
}

/// Create a playlist from the requested song titles.
///
/// Selection walks the requested titles in input order; each title
/// contributes every matching song in registration order. Unknown titles
/// contribute nothing, and a repeated title repeats its matches.
pub(crate) fn create_by_titles(
    state: &mut CatalogState,
    mobile: &str,
    title: &str,
    song_titles: &[String],
) -> Result<ResolvedPlaylist> {
    let creator = users::require_by_mobile(state, mobile)?;

    let mut selected = Vec::new();
    for requested in song_titles {
        selected.extend(songs::all_by_title(state, requested));
    }

    register_snapshot(state, creator, title, selected)
}

/// Subscribe a user to the first playlist carrying the title.
///
/// The creator is seeded into the listener list at creation, so the
/// membership check covers creator and listeners alike; repeats are
/// no-ops that still return the resolved playlist.
pub(crate) fn join(
    state: &mut CatalogState,
    mobile: &str,
    playlist_title: &str,
) -> Result<ResolvedPlaylist> {
    let user_id = users::require_by_mobile(state, mobile)?;
    let playlist_id = first_by_title(state, playlist_title)
        .ok_or_else(|| JukeboxError::PlaylistNotFound(playlist_title.to_string()))?;

    let listeners = state.playlist_listeners.entry(playlist_id).or_default();
    if listeners.contains(&user_id) {
        debug!("User {} already listens to playlist {}", user_id, playlist_id);
        return resolve(state, playlist_id);
    }

    listeners.push(user_id);
    state
        .user_playlists
        .entry(user_id)
        .or_default()
        .push(playlist_id);

    debug!("User {} joined playlist {}", user_id, playlist_id);
    resolve(state, playlist_id)
}

/// Playlists the user listens to, in join order.
pub(crate) fn get_for_user(state: &CatalogState, mobile: &str) -> Result<Vec<Playlist>> {
    let user_id = users::require_by_mobile(state, mobile)?;

    state
        .user_playlists
        .get(&user_id)
        .into_iter()
        .flatten()
        .map(|id| {
            state.playlists.get(id).cloned().ok_or_else(|| {
                JukeboxError::integrity("membership list references a missing playlist")
            })
        })
        .collect()
}

/// The playlist the user created most recently, if any.
pub(crate) fn get_created(state: &CatalogState, mobile: &str) -> Result<Option<Playlist>> {
    let user_id = users::require_by_mobile(state, mobile)?;

    state
        .created_playlist
        .get(&user_id)
        .map(|id| {
            state.playlists.get(id).cloned().ok_or_else(|| {
                JukeboxError::integrity("created-playlist link references a missing playlist")
            })
        })
        .transpose()
}

/// First-registered playlist carrying the title, if any.
pub(crate) fn first_by_title(state: &CatalogState, title: &str) -> Option<PlaylistId> {
    state
        .playlists_by_title
        .get(title)
        .and_then(|ids| ids.first())
        .copied()
}

/// Materialize a playlist with its creator, song snapshot, and listeners.
///
/// Every link is expected to hold; a dangling reference means the catalog
/// indices disagree and surfaces as an integrity error.
pub(crate) fn resolve(state: &CatalogState, id: PlaylistId) -> Result<ResolvedPlaylist> {
    let playlist = state
        .playlists
        .get(&id)
        .cloned()
        .ok_or_else(|| JukeboxError::integrity("playlist table is missing a linked playlist"))?;

    let creator_id = state
        .playlist_creator
        .get(&id)
        .ok_or_else(|| JukeboxError::integrity("playlist has no creator link"))?;
    let creator = state
        .users
        .get(creator_id)
        .cloned()
        .ok_or_else(|| JukeboxError::integrity("playlist creator is not a registered user"))?;

    let songs = state
        .playlist_songs
        .get(&id)
        .into_iter()
        .flatten()
        .map(|song_id| {
            state.songs.get(song_id).cloned().ok_or_else(|| {
                JukeboxError::integrity("playlist snapshot references a missing song")
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let listeners = state
        .playlist_listeners
        .get(&id)
        .into_iter()
        .flatten()
        .map(|user_id| {
            state.users.get(user_id).cloned().ok_or_else(|| {
                JukeboxError::integrity("listener list references a missing user")
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ResolvedPlaylist {
        playlist,
        creator,
        songs,
        listeners,
    })
}

/// Register the playlist record and wire every association for it.
///
/// The creator becomes the first listener, takes the playlist into their
/// membership list, and has their latest-created slot pointed at it.
fn register_snapshot(
    state: &mut CatalogState,
    creator: UserId,
    title: &str,
    selected: Vec<SongId>,
) -> Result<ResolvedPlaylist> {
    let id = state.mint_playlist_id();
    let playlist = Playlist::new(id, title);
    let selected_count = selected.len();

    state.playlists.insert(id, playlist);
    state
        .playlists_by_title
        .entry(title.to_string())
        .or_default()
        .push(id);
    state.playlist_songs.insert(id, selected);
    state.playlist_creator.insert(id, creator);
    state.playlist_listeners.insert(id, vec![creator]);
    state.created_playlist.insert(creator, id);
    state.user_playlists.entry(creator).or_default().push(id);

    info!(
        "Created playlist {} ({}) with {} songs for user {}",
        id, title, selected_count, creator
    );
    resolve(state, id)
}
