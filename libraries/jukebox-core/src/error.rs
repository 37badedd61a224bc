/// Core error types for Jukebox
use thiserror::Error;

/// Result type alias using `JukeboxError`
pub type Result<T> = std::result::Result<T, JukeboxError>;

/// Core error type for Jukebox
///
/// Lookup variants carry the natural key that missed (mobile number for
/// users, name for artists, title for everything else) so callers can
/// report exactly what the request asked for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JukeboxError {
    /// User not found (by mobile number)
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Artist not found (by name)
    #[error("Artist not found: {0}")]
    ArtistNotFound(String),

    /// Album not found (by title)
    #[error("Album not found: {0}")]
    AlbumNotFound(String),

    /// Song not found (by title)
    #[error("Song not found: {0}")]
    SongNotFound(String),

    /// Playlist not found (by title)
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    /// Broken cross-reference, poisoned lock, or failed invariant audit
    #[error("Catalog integrity error: {0}")]
    Integrity(String),
}

impl JukeboxError {
    /// Create an integrity error
    pub fn integrity(msg: impl Into<String>) -> Self {
        Self::Integrity(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_carry_the_missed_key() {
        let err = JukeboxError::UserNotFound("555-0100".to_string());
        assert_eq!(err.to_string(), "User not found: 555-0100");

        let err = JukeboxError::SongNotFound("So What".to_string());
        assert_eq!(err.to_string(), "Song not found: So What");
    }

    #[test]
    fn integrity_helper_wraps_message() {
        let err = JukeboxError::integrity("dangling album link");
        assert_eq!(err.to_string(), "Catalog integrity error: dangling album link");
    }
}
