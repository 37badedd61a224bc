//! Popularity charts

use jukebox_core::types::{Artist, Song};

use crate::state::CatalogState;

/// Name of the artist with the most likes, or an empty string when no
/// artist is registered.
///
/// A fresh scan every call; nothing is cached. The comparison is
/// strictly greater, so ties keep the earliest-registered artist.
pub(crate) fn most_popular_artist(state: &CatalogState) -> String {
    let best = state
        .artists
        .values()
        .fold(None, |best: Option<&Artist>, artist| match best {
            Some(current) if artist.likes > current.likes => Some(artist),
            None => Some(artist),
            keep => keep,
        });
    best.map(|artist| artist.name.clone()).unwrap_or_default()
}

/// Title of the song with the most likes, or an empty string when no
/// song is registered. Same scan and tie-break as the artist chart.
pub(crate) fn most_popular_song(state: &CatalogState) -> String {
    let best = state
        .songs
        .values()
        .fold(None, |best: Option<&Song>, song| match best {
            Some(current) if song.likes > current.likes => Some(song),
            None => Some(song),
            keep => keep,
        });
    best.map(|song| song.title.clone()).unwrap_or_default()
}
