//! Whole-store invariant audit

use std::collections::HashMap;
use std::collections::HashSet;

use jukebox_core::{error::Result, JukeboxError};

use crate::state::CatalogState;

/// Verify every cross-reference and counter in the catalog.
///
/// Read-only. The first violation found is returned as an integrity
/// error naming the broken link. Meant for tests and debugging
/// assertions, not hot paths.
pub(crate) fn check(state: &CatalogState) -> Result<()> {
    check_natural_keys(state)?;
    check_ownership_links(state)?;
    check_playlists(state)?;
    check_likes(state)?;
    Ok(())
}

fn violation(msg: String) -> JukeboxError {
    JukeboxError::Integrity(msg)
}

fn check_natural_keys(state: &CatalogState) -> Result<()> {
    for (mobile, id) in &state.user_by_mobile {
        match state.users.get(id) {
            Some(user) if user.mobile == *mobile => {}
            Some(user) => {
                return Err(violation(format!(
                    "mobile index {} points at user {} with mobile {}",
                    mobile, id, user.mobile
                )))
            }
            None => {
                return Err(violation(format!(
                    "mobile index {} points at missing user {}",
                    mobile, id
                )))
            }
        }
    }
    for user in state.users.values() {
        if state.user_by_mobile.get(&user.mobile) != Some(&user.id) {
            return Err(violation(format!(
                "user {} is not indexed under mobile {}",
                user.id, user.mobile
            )));
        }
    }

    // The artist name index must point at the first-registered holder
    let mut first_by_name = HashMap::new();
    for artist in state.artists.values() {
        first_by_name.entry(artist.name.as_str()).or_insert(artist.id);
    }
    for (name, id) in &state.artist_by_name {
        if first_by_name.get(name.as_str()) != Some(id) {
            return Err(violation(format!(
                "artist name index {} does not point at the first registration",
                name
            )));
        }
    }
    if first_by_name.len() != state.artist_by_name.len() {
        return Err(violation("artist name index is missing entries".to_string()));
    }

    for album in state.albums.values() {
        let indexed = state
            .albums_by_title
            .get(&album.title)
            .is_some_and(|ids| ids.contains(&album.id));
        if !indexed {
            return Err(violation(format!(
                "album {} is missing from its title bucket",
                album.id
            )));
        }
    }
    for song in state.songs.values() {
        let indexed = state
            .songs_by_title
            .get(&song.title)
            .is_some_and(|ids| ids.contains(&song.id));
        if !indexed {
            return Err(violation(format!(
                "song {} is missing from its title bucket",
                song.id
            )));
        }
    }
    for playlist in state.playlists.values() {
        let indexed = state
            .playlists_by_title
            .get(&playlist.title)
            .is_some_and(|ids| ids.contains(&playlist.id));
        if !indexed {
            return Err(violation(format!(
                "playlist {} is missing from its title bucket",
                playlist.id
            )));
        }
    }

    Ok(())
}

fn check_ownership_links(state: &CatalogState) -> Result<()> {
    for (artist_id, album_ids) in &state.artist_albums {
        if !state.artists.contains_key(artist_id) {
            return Err(violation(format!(
                "album list exists for missing artist {}",
                artist_id
            )));
        }
        for album_id in album_ids {
            if !state.albums.contains_key(album_id) {
                return Err(violation(format!(
                    "artist {} lists missing album {}",
                    artist_id, album_id
                )));
            }
            if state.album_artist.get(album_id) != Some(artist_id) {
                return Err(violation(format!(
                    "album {} does not link back to artist {}",
                    album_id, artist_id
                )));
            }
        }
    }
    for album_id in state.albums.keys() {
        let Some(artist_id) = state.album_artist.get(album_id) else {
            return Err(violation(format!("album {} has no artist link", album_id)));
        };
        let listed = state
            .artist_albums
            .get(artist_id)
            .is_some_and(|ids| ids.contains(album_id));
        if !listed {
            return Err(violation(format!(
                "album {} is not listed under artist {}",
                album_id, artist_id
            )));
        }
    }

    for (album_id, song_ids) in &state.album_songs {
        if !state.albums.contains_key(album_id) {
            return Err(violation(format!(
                "song list exists for missing album {}",
                album_id
            )));
        }
        for song_id in song_ids {
            if !state.songs.contains_key(song_id) {
                return Err(violation(format!(
                    "album {} lists missing song {}",
                    album_id, song_id
                )));
            }
            if state.song_album.get(song_id) != Some(album_id) {
                return Err(violation(format!(
                    "song {} does not link back to album {}",
                    song_id, album_id
                )));
            }
        }
    }
    for song_id in state.songs.keys() {
        let Some(album_id) = state.song_album.get(song_id) else {
            return Err(violation(format!("song {} has no album link", song_id)));
        };
        let listed = state
            .album_songs
            .get(album_id)
            .is_some_and(|ids| ids.contains(song_id));
        if !listed {
            return Err(violation(format!(
                "song {} is not listed under album {}",
                song_id, album_id
            )));
        }
    }

    Ok(())
}

fn check_playlists(state: &CatalogState) -> Result<()> {
    for playlist_id in state.playlists.keys() {
        let Some(creator) = state.playlist_creator.get(playlist_id) else {
            return Err(violation(format!(
                "playlist {} has no creator link",
                playlist_id
            )));
        };
        if !state.users.contains_key(creator) {
            return Err(violation(format!(
                "playlist {} was created by missing user {}",
                playlist_id, creator
            )));
        }

        let Some(listeners) = state.playlist_listeners.get(playlist_id) else {
            return Err(violation(format!(
                "playlist {} has no listener list",
                playlist_id
            )));
        };
        if !listeners.contains(creator) {
            return Err(violation(format!(
                "creator {} is not a listener of playlist {}",
                creator, playlist_id
            )));
        }
        let mut seen = HashSet::new();
        for user_id in listeners {
            if !state.users.contains_key(user_id) {
                return Err(violation(format!(
                    "playlist {} lists missing listener {}",
                    playlist_id, user_id
                )));
            }
            if !seen.insert(*user_id) {
                return Err(violation(format!(
                    "listener {} appears twice on playlist {}",
                    user_id, playlist_id
                )));
            }
            let mirrored = state
                .user_playlists
                .get(user_id)
                .is_some_and(|ids| ids.contains(playlist_id));
            if !mirrored {
                return Err(violation(format!(
                    "listener {} of playlist {} has no membership entry",
                    user_id, playlist_id
                )));
            }
        }

        let Some(snapshot) = state.playlist_songs.get(playlist_id) else {
            return Err(violation(format!(
                "playlist {} has no song snapshot",
                playlist_id
            )));
        };
        for song_id in snapshot {
            if !state.songs.contains_key(song_id) {
                return Err(violation(format!(
                    "playlist {} snapshot references missing song {}",
                    playlist_id, song_id
                )));
            }
        }
    }

    for (user_id, playlist_ids) in &state.user_playlists {
        if !state.users.contains_key(user_id) {
            return Err(violation(format!(
                "membership list exists for missing user {}",
                user_id
            )));
        }
        for playlist_id in playlist_ids {
            let listed = state
                .playlist_listeners
                .get(playlist_id)
                .is_some_and(|ids| ids.contains(user_id));
            if !listed {
                return Err(violation(format!(
                    "user {} holds membership in playlist {} without listening",
                    user_id, playlist_id
                )));
            }
        }
    }

    for (user_id, playlist_id) in &state.created_playlist {
        if state.playlist_creator.get(playlist_id) != Some(user_id) {
            return Err(violation(format!(
                "created-playlist slot of user {} points at playlist {} they did not create",
                user_id, playlist_id
            )));
        }
    }

    Ok(())
}

fn check_likes(state: &CatalogState) -> Result<()> {
    for (song_id, likers) in &state.song_likers {
        let Some(song) = state.songs.get(song_id) else {
            return Err(violation(format!(
                "liker list exists for missing song {}",
                song_id
            )));
        };
        let mut seen = HashSet::new();
        for user_id in likers {
            if !state.users.contains_key(user_id) {
                return Err(violation(format!(
                    "song {} lists missing liker {}",
                    song_id, user_id
                )));
            }
            if !seen.insert(*user_id) {
                return Err(violation(format!(
                    "liker {} appears twice on song {}",
                    user_id, song_id
                )));
            }
        }
        if song.likes != likers.len() as u64 {
            return Err(violation(format!(
                "song {} counts {} likes but lists {} likers",
                song_id,
                song.likes,
                likers.len()
            )));
        }
    }
    for song_id in state.songs.keys() {
        if !state.song_likers.contains_key(song_id) {
            return Err(violation(format!("song {} has no liker list", song_id)));
        }
    }

    // Artist counters must equal the summed like counts of their songs
    for artist in state.artists.values() {
        let mut expected = 0u64;
        if let Some(album_ids) = state.artist_albums.get(&artist.id) {
            for album_id in album_ids {
                if let Some(song_ids) = state.album_songs.get(album_id) {
                    for song_id in song_ids {
                        if let Some(song) = state.songs.get(song_id) {
                            expected += song.likes;
                        }
                    }
                }
            }
        }
        if artist.likes != expected {
            return Err(violation(format!(
                "artist {} counts {} likes but their songs hold {}",
                artist.id, artist.likes, expected
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{albums, likes, playlists, songs, users};

    fn seed_state() -> CatalogState {
        let mut state = CatalogState::default();
        users::create(&mut state, "Alice", "555-0100").expect("create user");
        users::create(&mut state, "Bob", "555-0101").expect("create user");
        albums::create(&mut state, "Kind of Blue", "Miles Davis").expect("create album");
        songs::create(&mut state, "So What", "Kind of Blue", 545).expect("create song");
        songs::create(&mut state, "Blue in Green", "Kind of Blue", 545).expect("create song");
        playlists::create_by_length(&mut state, "555-0100", "Fives", 545)
            .expect("create playlist");
        playlists::join(&mut state, "555-0101", "Fives").expect("join playlist");
        likes::like(&mut state, "555-0100", "So What").expect("like song");
        likes::like(&mut state, "555-0101", "So What").expect("like song");
        state
    }

    #[test]
    fn a_grown_catalog_passes_the_audit() {
        let state = seed_state();
        check(&state).expect("audit");
    }

    #[test]
    fn a_missing_song_record_is_reported() {
        let mut state = seed_state();
        let song_id = songs::first_by_title(&state, "So What").expect("song");

        // Rip the song out from under the indices
        state.songs.remove(&song_id);

        let err = check(&state).unwrap_err();
        assert!(matches!(err, JukeboxError::Integrity(_)));
    }

    #[test]
    fn counter_drift_is_reported() {
        let mut state = seed_state();
        let artist_id = *state.artist_by_name.get("Miles Davis").expect("artist");

        state
            .artists
            .get_mut(&artist_id)
            .expect("artist record")
            .likes += 1;

        let err = check(&state).unwrap_err();
        assert!(matches!(err, JukeboxError::Integrity(_)));
    }

    #[test]
    fn a_listener_without_membership_is_reported() {
        let mut state = seed_state();
        let playlist_id = playlists::first_by_title(&state, "Fives").expect("playlist");
        let bob = users::require_by_mobile(&state, "555-0101").expect("user");

        state
            .user_playlists
            .get_mut(&bob)
            .expect("membership list")
            .retain(|id| *id != playlist_id);

        let err = check(&state).unwrap_err();
        assert!(matches!(err, JukeboxError::Integrity(_)));
    }
}
