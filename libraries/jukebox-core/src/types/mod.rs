mod album;
mod artist;
mod ids;
mod playlist;
mod song;
mod stats;
mod user;

pub use album::Album;
pub use artist::Artist;
pub use ids::{AlbumId, ArtistId, PlaylistId, SongId, UserId};
pub use playlist::{Playlist, ResolvedPlaylist};
pub use song::Song;
pub use stats::CatalogStats;
pub use user::User;
