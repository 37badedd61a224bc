//! Artist registration and lookup

use jukebox_core::{error::Result, types::Artist, types::ArtistId};
use tracing::debug;

use crate::state::CatalogState;

/// Register an artist with zero likes and no albums.
///
/// Duplicate names produce distinct artists; the name index keeps
/// pointing at the first, so name lookups stay first-match-wins.
pub(crate) fn create(state: &mut CatalogState, name: &str) -> Result<Artist> {
    let id = state.mint_artist_id();
    let artist = Artist::new(id, name);

    state.artists.insert(id, artist.clone());
    state.artist_by_name.entry(name.to_string()).or_insert(id);
    state.artist_albums.insert(id, Vec::new());

    debug!("Registered artist {} ({})", id, name);
    Ok(artist)
}

/// Resolve a name to an artist ID, registering a new artist when the
/// name is unknown. Album creation goes through this.
pub(crate) fn find_or_create(state: &mut CatalogState, name: &str) -> Result<ArtistId> {
    if let Some(&id) = state.artist_by_name.get(name) {
        return Ok(id);
    }
    Ok(create(state, name)?.id)
}

pub(crate) fn get_by_id(state: &CatalogState, id: ArtistId) -> Option<Artist> {
    state.artists.get(&id).cloned()
}

pub(crate) fn find_by_name(state: &CatalogState, name: &str) -> Option<Artist> {
    state
        .artist_by_name
        .get(name)
        .and_then(|id| state.artists.get(id))
        .cloned()
}

pub(crate) fn get_all(state: &CatalogState) -> Vec<Artist> {
    state.artists.values().cloned().collect()
}
