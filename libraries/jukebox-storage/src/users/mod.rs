//! User registration and lookup

use jukebox_core::{error::Result, types::User, types::UserId, JukeboxError};
use tracing::debug;

use crate::state::CatalogState;

/// Register a user under a mobile number.
///
/// The mobile number is the unique natural key: registering it twice
/// returns the original user unchanged, whatever name the repeat carries.
pub(crate) fn create(state: &mut CatalogState, name: &str, mobile: &str) -> Result<User> {
    if let Some(&id) = state.user_by_mobile.get(mobile) {
        let existing = state
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| JukeboxError::integrity("mobile index points at a missing user"))?;
        debug!("Mobile {} already registered to user {}", mobile, id);
        return Ok(existing);
    }

    let id = state.mint_user_id();
    let user = User::new(id, name, mobile);

    state.users.insert(id, user.clone());
    state.user_by_mobile.insert(mobile.to_string(), id);
    state.user_playlists.insert(id, Vec::new());

    debug!("Registered user {} ({})", id, mobile);
    Ok(user)
}

/// Resolve a mobile number to its user ID, or fail with `UserNotFound`.
pub(crate) fn require_by_mobile(state: &CatalogState, mobile: &str) -> Result<UserId> {
    state
        .user_by_mobile
        .get(mobile)
        .copied()
        .ok_or_else(|| JukeboxError::UserNotFound(mobile.to_string()))
}

pub(crate) fn get_by_mobile(state: &CatalogState, mobile: &str) -> Option<User> {
    state
        .user_by_mobile
        .get(mobile)
        .and_then(|id| state.users.get(id))
        .cloned()
}

pub(crate) fn get_all(state: &CatalogState) -> Vec<User> {
    state.users.values().cloned().collect()
}
