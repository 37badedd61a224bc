//! Song likes and the artist cascade

use jukebox_core::{
    error::Result,
    types::{Song, SongId, User},
    JukeboxError,
};
use tracing::debug;

use crate::state::CatalogState;
use crate::{songs, users};

/// Record a user's like of the first song carrying the title.
///
/// A like counts once per (user, song) pair. The first one appends the
/// user to the song's liker list and increments the song and its owning
/// artist by one each; repeats return the song unchanged. Ownership is
/// walked through the song -> album -> artist links, and a missing link
/// is an integrity error rather than a lost count.
pub(crate) fn like(state: &mut CatalogState, mobile: &str, song_title: &str) -> Result<Song> {
    let user_id = users::require_by_mobile(state, mobile)?;
    let song_id = songs::first_by_title(state, song_title)
        .ok_or_else(|| JukeboxError::SongNotFound(song_title.to_string()))?;

    let already_liked = state
        .song_likers
        .get(&song_id)
        .is_some_and(|likers| likers.contains(&user_id));
    if already_liked {
        debug!("User {} already liked song {}", user_id, song_id);
        return songs::get_by_id(state, song_id)
            .ok_or_else(|| JukeboxError::integrity("song index points at a missing song"));
    }

    // Ownership links resolve before any write lands
    let album_id = state
        .song_album
        .get(&song_id)
        .copied()
        .ok_or_else(|| JukeboxError::integrity("liked song has no album link"))?;
    let artist_id = state
        .album_artist
        .get(&album_id)
        .copied()
        .ok_or_else(|| JukeboxError::integrity("liked song's album has no artist link"))?;

    state.song_likers.entry(song_id).or_default().push(user_id);

    let song = state
        .songs
        .get_mut(&song_id)
        .ok_or_else(|| JukeboxError::integrity("song index points at a missing song"))?;
    song.likes += 1;
    let song = song.clone();

    let artist = state
        .artists
        .get_mut(&artist_id)
        .ok_or_else(|| JukeboxError::integrity("artist link points at a missing artist"))?;
    artist.likes += 1;

    debug!(
        "User {} liked song {}, artist {} now at {} likes",
        user_id, song_id, artist_id, artist.likes
    );
    Ok(song)
}

/// Users who liked the song, in like order.
pub(crate) fn likers_of(state: &CatalogState, song_id: SongId) -> Result<Vec<User>> {
    state
        .song_likers
        .get(&song_id)
        .into_iter()
        .flatten()
        .map(|user_id| {
            state.users.get(user_id).cloned().ok_or_else(|| {
                JukeboxError::integrity("liker list references a missing user")
            })
        })
        .collect()
}

/// Total distinct (user, song) like pairs across the catalog.
pub(crate) fn total(state: &CatalogState) -> u64 {
    state
        .song_likers
        .values()
        .map(|likers| likers.len() as u64)
        .sum()
}
