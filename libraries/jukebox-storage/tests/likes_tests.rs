//! Integration tests for likes and the popularity charts
//!
//! Tests the one-level cascade from songs to their owning artists,
//! per-user idempotence, and the fresh-scan chart queries.


use jukebox_core::{CatalogStore, JukeboxError};
use jukebox_storage::InMemoryCatalog;
use test_helpers::*;

#[tokio::test]
async fn test_like_cascades_one_level_to_the_artist() {
    let catalog = seeded_catalog().await;

    let song = catalog
        .like_song(ALICE, "One More Time")
        .await
        .expect("Failed to like song");
    assert_eq!(song.likes, 1);

    let daft_punk = catalog
        .find_artist_by_name("Daft Punk")
        .await
        .unwrap()
        .expect("artist registered");
    assert_eq!(daft_punk.likes, 1);

    // The other artist is untouched
    let miles = catalog
        .find_artist_by_name("Miles Davis")
        .await
        .unwrap()
        .expect("artist registered");
    assert_eq!(miles.likes, 0);
}

#[tokio::test]
async fn test_double_like_leaves_every_total_unchanged() {
    let catalog = seeded_catalog().await;

    catalog
        .like_song(ALICE, "So What")
        .await
        .expect("Failed to like song");
    let song = catalog
        .like_song(ALICE, "So What")
        .await
        .expect("Failed to like song");

    assert_eq!(song.likes, 1);
    let miles = catalog
        .find_artist_by_name("Miles Davis")
        .await
        .unwrap()
        .expect("artist registered");
    assert_eq!(miles.likes, 1);
    assert_eq!(catalog.stats().await.unwrap().likes, 1);

    catalog.check_integrity().expect("integrity audit");
}

#[tokio::test]
async fn test_artist_accumulates_across_their_songs() {
    let catalog = seeded_catalog().await;

    catalog
        .like_song(ALICE, "So What")
        .await
        .expect("Failed to like song");
    catalog
        .like_song(ALICE, "Blue in Green")
        .await
        .expect("Failed to like song");
    catalog
        .like_song(BOB, "So What")
        .await
        .expect("Failed to like song");

    let miles = catalog
        .find_artist_by_name("Miles Davis")
        .await
        .unwrap()
        .expect("artist registered");
    assert_eq!(miles.likes, 3);

    catalog.check_integrity().expect("integrity audit");
}

#[tokio::test]
async fn test_likers_are_kept_in_like_order() {
    let catalog = seeded_catalog().await;

    catalog
        .like_song(CARA, "Aerodynamic")
        .await
        .expect("Failed to like song");
    catalog
        .like_song(ALICE, "Aerodynamic")
        .await
        .expect("Failed to like song");

    let song = catalog
        .like_song(ALICE, "Aerodynamic")
        .await
        .expect("repeat like");
    let likers = catalog.get_song_likers(song.id).await.unwrap();
    let mobiles: Vec<&str> = likers.iter().map(|u| u.mobile.as_str()).collect();
    assert_eq!(mobiles, vec![CARA, ALICE]);
}

#[tokio::test]
async fn test_like_failures_leave_the_catalog_unchanged() {
    let catalog = seeded_catalog().await;
    let before = catalog.stats().await.unwrap();

    let err = catalog.like_song(ALICE, "No Such Song").await.unwrap_err();
    assert_eq!(err, JukeboxError::SongNotFound("No Such Song".to_string()));

    let err = catalog.like_song("555-9999", "So What").await.unwrap_err();
    assert_eq!(err, JukeboxError::UserNotFound("555-9999".to_string()));

    assert_eq!(catalog.stats().await.unwrap(), before);
    catalog.check_integrity().expect("integrity audit");
}

#[tokio::test]
async fn test_duplicate_song_titles_like_the_first_registration() {
    let catalog = seeded_catalog().await;

    // A second "So What" lands on another album
    catalog
        .create_song("So What", "Discovery", 210)
        .await
        .expect("Failed to create song");

    catalog
        .like_song(ALICE, "So What")
        .await
        .expect("Failed to like song");

    let songs = catalog.get_all_songs().await.unwrap();
    let so_whats: Vec<u64> = songs
        .iter()
        .filter(|s| s.title == "So What")
        .map(|s| s.likes)
        .collect();
    assert_eq!(so_whats, vec![1, 0]);

    // The cascade followed the first registration to Miles Davis
    let miles = catalog
        .find_artist_by_name("Miles Davis")
        .await
        .unwrap()
        .expect("artist registered");
    assert_eq!(miles.likes, 1);
}

#[tokio::test]
async fn test_charts_on_an_empty_catalog_are_empty_strings() {
    let catalog = InMemoryCatalog::new();

    assert_eq!(catalog.most_popular_artist().await.unwrap(), "");
    assert_eq!(catalog.most_popular_song().await.unwrap(), "");
}

#[tokio::test]
async fn test_charts_tie_break_on_registration_order() {
    let catalog = seeded_catalog().await;

    // No likes yet: everything ties at zero
    assert_eq!(catalog.most_popular_artist().await.unwrap(), "Miles Davis");
    assert_eq!(catalog.most_popular_song().await.unwrap(), "So What");

    catalog
        .like_song(ALICE, "One More Time")
        .await
        .expect("Failed to like song");
    assert_eq!(catalog.most_popular_artist().await.unwrap(), "Daft Punk");
    assert_eq!(catalog.most_popular_song().await.unwrap(), "One More Time");

    // Equal counts fall back to the earlier registration
    catalog
        .like_song(BOB, "So What")
        .await
        .expect("Failed to like song");
    assert_eq!(catalog.most_popular_artist().await.unwrap(), "Miles Davis");
    assert_eq!(catalog.most_popular_song().await.unwrap(), "So What");
}
