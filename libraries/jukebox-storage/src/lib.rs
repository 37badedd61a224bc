//! Jukebox Storage
//!
//! In-memory catalog-and-social-graph store for Jukebox.
//!
//! This crate holds the reference backend behind
//! `jukebox_core::CatalogStore`: artists, albums, songs, users, playlists,
//! likes, and listener relationships, all kept consistent in one state
//! aggregate behind a single reader-writer lock.
//!
//! # Architecture
//!
//! - **Single State Aggregate**: entity tables plus every association index
//! - **Vertical Slicing**: each feature owns its own operations and checks
//! - **Snapshot Playlists**: playlist contents are fixed at creation
//! - **No Partial Failures**: every operation validates before it mutates
//!
//! # Example
//!
//! ```rust,no_run
//! use jukebox_core::CatalogStore;
//! use jukebox_storage::InMemoryCatalog;
//!
//! # async fn example() -> jukebox_core::Result<()> {
//! let catalog = InMemoryCatalog::new();
//!
//! catalog.create_user("Alice", "555-0100").await?;
//! catalog.create_album("Kind of Blue", "Miles Davis").await?;
//! catalog.create_song("So What", "Kind of Blue", 545).await?;
//!
//! let playlist = catalog
//!     .create_playlist_by_length("555-0100", "Long Cuts", 545)
//!     .await?;
//! assert_eq!(playlist.songs.len(), 1);
//! # Ok(())
//! # }
//! ```

mod state;
mod store;

// Vertical slices
mod albums;
mod artists;
mod charts;
mod likes;
mod playlists;
mod songs;
mod users;

// Whole-store invariant audit
mod integrity;

pub use store::InMemoryCatalog;
