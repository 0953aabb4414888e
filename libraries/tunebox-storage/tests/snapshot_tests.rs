//! Integration tests for the Playlist Store slice


use test_helpers::TestDb;
use tunebox_core::{BlobKey, Library, Playlist, PlaylistStore, Theme, Track, TrackSource};
use tunebox_storage::{snapshot, SqlitePlaylistStore};

fn library_with_mixed_tracks() -> Library {
    let mut library = Library::new("Road Trip");
    library.insert_playlist(Playlist::new("Chill"));

    let tracks = library.tracks_mut("Road Trip").unwrap();
    tracks.push(Track::new(
        "Song A",
        TrackSource::remote("https://audio.example.com/a.m4a"),
    ));
    tracks.push(Track::uploaded("upload.mp3", "blob:session/abc", BlobKey::new(3)));
    tracks.push(Track::new(
        "Song B",
        TrackSource::remote("https://audio.example.com/b.m4a"),
    ));

    library
        .tracks_mut("Chill")
        .unwrap()
        .push(Track::new("Song C", TrackSource::remote("https://audio.example.com/c.m4a")));
    library.set_active("Chill");
    library
}

#[tokio::test]
async fn test_load_on_first_run_is_none() {
    let test_db = TestDb::new().await;
    let store = SqlitePlaylistStore::new(test_db.pool().clone());

    assert!(store.load().await.unwrap().is_none());
    assert!(store.load_theme().await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_load_round_trip_drops_session_tracks() {
    let test_db = TestDb::new().await;
    let store = SqlitePlaylistStore::new(test_db.pool().clone());

    let original = library_with_mixed_tracks();
    store.save(&original).await.unwrap();

    let loaded = store.load().await.unwrap().expect("snapshot was saved");

    let mut expected = original;
    expected
        .tracks_mut("Road Trip")
        .unwrap()
        .retain(Track::is_persistable);
    assert_eq!(loaded, expected);
    assert_eq!(loaded.active_name(), "Chill");
}

#[tokio::test]
async fn test_save_overwrites_wholesale() {
    let test_db = TestDb::new().await;
    let store = SqlitePlaylistStore::new(test_db.pool().clone());

    store.save(&library_with_mixed_tracks()).await.unwrap();
    store.save(&Library::new("Only")).await.unwrap();

    let loaded = store.load().await.unwrap().unwrap();
    assert_eq!(loaded.names().collect::<Vec<_>>(), vec!["Only"]);
    assert_eq!(loaded.active_name(), "Only");
}

#[tokio::test]
async fn test_raw_slots_use_persisted_shape() {
    let test_db = TestDb::new().await;
    let store = SqlitePlaylistStore::new(test_db.pool().clone());
    store.save(&library_with_mixed_tracks()).await.unwrap();

    let raw = snapshot::get_value(test_db.pool(), snapshot::KEY_PLAYLISTS)
        .await
        .unwrap()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["Road Trip"].as_array().unwrap().len(), 2);
    assert_eq!(value["Chill"][0]["name"], "Song C");
    assert_eq!(value["Chill"][0]["src"], "https://audio.example.com/c.m4a");

    let active = snapshot::get_value(test_db.pool(), snapshot::KEY_ACTIVE_PLAYLIST)
        .await
        .unwrap();
    assert_eq!(active.as_deref(), Some("Chill"));
}

#[tokio::test]
async fn test_stale_active_name_falls_back() {
    let test_db = TestDb::new().await;
    let store = SqlitePlaylistStore::new(test_db.pool().clone());
    store.save(&library_with_mixed_tracks()).await.unwrap();

    snapshot::set_value(test_db.pool(), snapshot::KEY_ACTIVE_PLAYLIST, "Gone")
        .await
        .unwrap();

    let loaded = store.load().await.unwrap().unwrap();
    assert_eq!(loaded.active_name(), "Chill");
}

#[tokio::test]
async fn test_corrupt_snapshot_is_an_error() {
    let test_db = TestDb::new().await;
    let store = SqlitePlaylistStore::new(test_db.pool().clone());

    snapshot::set_value(test_db.pool(), snapshot::KEY_PLAYLISTS, "{not json")
        .await
        .unwrap();

    assert!(store.load().await.is_err());
}

#[tokio::test]
async fn test_theme_round_trip() {
    let test_db = TestDb::new().await;
    let store = SqlitePlaylistStore::new(test_db.pool().clone());

    store.save_theme(Theme::Light).await.unwrap();
    assert_eq!(store.load_theme().await.unwrap(), Some(Theme::Light));

    store.save_theme(Theme::Dark).await.unwrap();
    assert_eq!(store.load_theme().await.unwrap(), Some(Theme::Dark));
}
