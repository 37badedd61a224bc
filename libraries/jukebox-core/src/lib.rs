//! Jukebox Core
//!
//! Platform-agnostic core types, traits, and error handling for Jukebox.
//!
//! This crate provides the foundational building blocks shared by every
//! catalog backend (in-memory today, persistent or remote later).
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Artist`, `Album`, `Song`, `Playlist`
//! - **Core Traits**: `CatalogStore`
//! - **Error Handling**: Unified `JukeboxError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use jukebox_core::types::{Artist, ArtistId, Song, SongId};
//! use chrono::Utc;
//!
//! // Entity records carry their registry-assigned ID
//! let artist = Artist::new(ArtistId::new(1), "Miles Davis");
//! assert_eq!(artist.likes, 0);
//!
//! let song = Song::new(SongId::new(1), "So What", 545);
//! assert!(song.created_at <= Utc::now());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use catalog::CatalogStore;
pub use error::{JukeboxError, Result};

// Export all types
pub use types::{
    // Users
    User, UserId,
    // Catalog entities
    Artist, ArtistId,
    Album, AlbumId,
    Song, SongId,
    Playlist, PlaylistId, ResolvedPlaylist,
    // Aggregates
    CatalogStats,
};
