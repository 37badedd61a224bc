//! Property-based tests for the in-memory catalog
//!
//! Uses proptest to verify invariants across random operation
//! interleavings: counters stay in step with the ownership walk, charts
//! only name entities that hold the top count, snapshots never move,
//! and the integrity audit holds after any sequence.

use jukebox_core::{CatalogStore, JukeboxError};
use jukebox_storage::InMemoryCatalog;
use proptest::prelude::*;

// ===== Helpers =====

/// One catalog operation over a deliberately small key space, so random
/// sequences collide on users, titles, and playlists often.
#[derive(Debug, Clone)]
enum Op {
    CreateUser(u8),
    CreateAlbum(u8, u8),
    CreateSong(u8, u8, bool),
    LikeSong(u8, u8),
    PlaylistByLength(u8, u8, bool),
    PlaylistByTitles(u8, u8, Vec<u8>),
    Join(u8, u8),
}

fn mobile(i: u8) -> String {
    format!("555-010{}", i)
}

fn artist_name(i: u8) -> String {
    format!("artist-{}", i)
}

fn album_title(i: u8) -> String {
    format!("album-{}", i)
}

fn song_title(i: u8) -> String {
    format!("song-{}", i)
}

fn playlist_title(i: u8) -> String {
    format!("playlist-{}", i)
}

fn length(long: bool) -> u32 {
    if long {
        300
    } else {
        180
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..4).prop_map(Op::CreateUser),
        (0u8..4, 0u8..3).prop_map(|(album, artist)| Op::CreateAlbum(album, artist)),
        (0u8..5, 0u8..4, any::<bool>())
            .prop_map(|(song, album, long)| Op::CreateSong(song, album, long)),
        (0u8..4, 0u8..5).prop_map(|(user, song)| Op::LikeSong(user, song)),
        (0u8..4, 0u8..3, any::<bool>())
            .prop_map(|(user, title, long)| Op::PlaylistByLength(user, title, long)),
        (0u8..4, 0u8..3, prop::collection::vec(0u8..5, 0..4))
            .prop_map(|(user, title, songs)| Op::PlaylistByTitles(user, title, songs)),
        (0u8..4, 0u8..3).prop_map(|(user, title)| Op::Join(user, title)),
    ]
}

fn arbitrary_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(arbitrary_op(), 1..60)
}

async fn apply(catalog: &InMemoryCatalog, op: &Op) -> jukebox_core::Result<()> {
    match op {
        Op::CreateUser(user) => catalog
            .create_user(&format!("user-{}", user), &mobile(*user))
            .await
            .map(|_| ()),
        Op::CreateAlbum(album, artist) => catalog
            .create_album(&album_title(*album), &artist_name(*artist))
            .await
            .map(|_| ()),
        Op::CreateSong(song, album, long) => catalog
            .create_song(&song_title(*song), &album_title(*album), length(*long))
            .await
            .map(|_| ()),
        Op::LikeSong(user, song) => catalog
            .like_song(&mobile(*user), &song_title(*song))
            .await
            .map(|_| ()),
        Op::PlaylistByLength(user, title, long) => catalog
            .create_playlist_by_length(&mobile(*user), &playlist_title(*title), length(*long))
            .await
            .map(|_| ()),
        Op::PlaylistByTitles(user, title, songs) => {
            let titles: Vec<String> = songs.iter().map(|song| song_title(*song)).collect();
            catalog
                .create_playlist_by_titles(&mobile(*user), &playlist_title(*title), &titles)
                .await
                .map(|_| ())
        }
        Op::Join(user, title) => catalog
            .join_playlist(&mobile(*user), &playlist_title(*title))
            .await
            .map(|_| ()),
    }
}

/// Misses are part of normal traffic; anything else is a real failure.
fn is_expected_miss(err: &JukeboxError) -> bool {
    matches!(
        err,
        JukeboxError::UserNotFound(_)
            | JukeboxError::AlbumNotFound(_)
            | JukeboxError::SongNotFound(_)
            | JukeboxError::PlaylistNotFound(_)
    )
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("Failed to build runtime")
}

// ===== Property Tests =====

proptest! {
    /// Property: artist counters always equal the like totals reached
    /// through the artist -> album -> song walk, and the whole store
    /// passes the integrity audit.
    #[test]
    fn artist_counters_track_the_ownership_walk(ops in arbitrary_ops()) {
        let rt = runtime();
        let catalog = InMemoryCatalog::new();

        for op in &ops {
            if let Err(err) = rt.block_on(apply(&catalog, op)) {
                prop_assert!(is_expected_miss(&err), "unexpected error from {:?}: {}", op, err);
            }
        }

        for artist in rt.block_on(catalog.get_all_artists()).expect("read artists") {
            let mut expected = 0u64;
            for album in rt
                .block_on(catalog.get_albums_by_artist(artist.id))
                .expect("read albums")
            {
                for song in rt
                    .block_on(catalog.get_songs_by_album(album.id))
                    .expect("read songs")
                {
                    expected += song.likes;
                }
            }
            prop_assert_eq!(artist.likes, expected, "counter drifted for {}", artist.name);
        }

        prop_assert!(catalog.check_integrity().is_ok());
    }

    /// Property: the charts either answer with an empty string on an
    /// empty table or name an entry holding the maximum like count.
    #[test]
    fn charts_name_a_top_holder(ops in arbitrary_ops()) {
        let rt = runtime();
        let catalog = InMemoryCatalog::new();

        for op in &ops {
            if let Err(err) = rt.block_on(apply(&catalog, op)) {
                prop_assert!(is_expected_miss(&err), "unexpected error from {:?}: {}", op, err);
            }
        }

        let artists = rt.block_on(catalog.get_all_artists()).expect("read artists");
        let top_artist = rt.block_on(catalog.most_popular_artist()).expect("artist chart");
        if artists.is_empty() {
            prop_assert_eq!(top_artist, "");
        } else {
            let max_likes = artists.iter().map(|a| a.likes).max().unwrap_or(0);
            let holder = artists
                .iter()
                .filter(|a| a.name == top_artist)
                .map(|a| a.likes)
                .max();
            prop_assert_eq!(holder, Some(max_likes), "chart named {}", top_artist);
        }

        let songs = rt.block_on(catalog.get_all_songs()).expect("read songs");
        let top_song = rt.block_on(catalog.most_popular_song()).expect("song chart");
        if songs.is_empty() {
            prop_assert_eq!(top_song, "");
        } else {
            let max_likes = songs.iter().map(|s| s.likes).max().unwrap_or(0);
            let holder = songs
                .iter()
                .filter(|s| s.title == top_song)
                .map(|s| s.likes)
                .max();
            prop_assert_eq!(holder, Some(max_likes), "chart named {}", top_song);
        }
    }

    /// Property: a playlist snapshot taken between two random operation
    /// bursts is identical afterwards, whatever the second burst did.
    #[test]
    fn snapshots_survive_later_operations(
        before in arbitrary_ops(),
        after in arbitrary_ops()
    ) {
        let rt = runtime();
        let catalog = InMemoryCatalog::new();

        rt.block_on(catalog.create_user("Keeper", &mobile(9)))
            .expect("create user");

        for op in &before {
            if let Err(err) = rt.block_on(apply(&catalog, op)) {
                prop_assert!(is_expected_miss(&err), "unexpected error from {:?}: {}", op, err);
            }
        }

        let created = rt
            .block_on(catalog.create_playlist_by_length(&mobile(9), "kept-playlist", length(true)))
            .expect("create playlist");

        for op in &after {
            if let Err(err) = rt.block_on(apply(&catalog, op)) {
                prop_assert!(is_expected_miss(&err), "unexpected error from {:?}: {}", op, err);
            }
        }

        // Joining by the creator is a no-op that returns the snapshot.
        // Membership is what is frozen; like counters on member songs
        // may still move, so compare the ID sequences.
        let resolved = rt
            .block_on(catalog.join_playlist(&mobile(9), "kept-playlist"))
            .expect("resolve playlist");
        let kept: Vec<_> = resolved.songs.iter().map(|s| s.id).collect();
        let original: Vec<_> = created.songs.iter().map(|s| s.id).collect();
        prop_assert_eq!(kept, original);
        prop_assert!(catalog.check_integrity().is_ok());
    }
}
