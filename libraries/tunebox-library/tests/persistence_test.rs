//! End-to-end persistence tests against real SQLite files
//!
//! Each test bootstraps a manager, mutates it, flushes the write-behind
//! queue and bootstraps a second manager from the same files.

use bytes::Bytes;
use std::sync::Arc;
use tempfile::TempDir;
use tunebox_core::{BlobStore, Track, TrackSource};
use tunebox_library::LibraryManager;
use tunebox_storage::{SqliteBlobStore, SqlitePlaylistStore};

struct Stores {
    blobs: Arc<SqliteBlobStore>,
    playlists: Arc<SqlitePlaylistStore>,
}

async fn open_stores(dir: &TempDir) -> Stores {
    let blobs_url = format!("sqlite://{}", dir.path().join("blobs.db").display());
    let library_url = format!("sqlite://{}", dir.path().join("library.db").display());

    Stores {
        blobs: Arc::new(SqliteBlobStore::open(&blobs_url).await.unwrap()),
        playlists: Arc::new(SqlitePlaylistStore::open(&library_url).await.unwrap()),
    }
}

async fn bootstrap(stores: &Stores) -> LibraryManager {
    LibraryManager::bootstrap(stores.blobs.clone(), stores.playlists.clone(), "My Playlist").await
}

fn remote(name: &str) -> Track {
    Track::new(name, TrackSource::remote(format!("https://cdn.example.com/{name}.m4a")))
}

#[tokio::test]
async fn test_library_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let stores = open_stores(&dir).await;
        let mut manager = bootstrap(&stores).await;
        manager.create_playlist("Road Trip").unwrap();
        manager.add_track("Road Trip", remote("a")).unwrap();
        manager.add_track("Road Trip", remote("b")).unwrap();
        manager.move_track("Road Trip", 1, 0).unwrap();
        manager.flush().await;
    }

    let stores = open_stores(&dir).await;
    let manager = bootstrap(&stores).await;

    assert_eq!(manager.library().active_name(), "Road Trip");
    assert_eq!(manager.library().playlist_count(), 2);
    let names: Vec<_> = manager.active_tracks().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(manager.current_index(), Some(0));
}

#[tokio::test]
async fn test_uploads_are_reconstituted_from_blob_store() {
    let dir = tempfile::tempdir().unwrap();

    {
        let stores = open_stores(&dir).await;
        let mut manager = bootstrap(&stores).await;
        manager.add_to_active(remote("stream"));
        let outcome = manager
            .import_upload(Bytes::from_static(b"RIFF....WAVE"), "take1.wav")
            .await;
        assert_eq!(outcome.index, 1);
        manager.flush().await;

        // The snapshot itself only carries the remote track
        let saved = tunebox_storage::snapshot::load_snapshot(stores.playlists.pool())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(saved.playlists["My Playlist"].len(), 1);
    }

    let stores = open_stores(&dir).await;
    let manager = bootstrap(&stores).await;

    let tracks = manager.active_tracks();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].name, "stream");
    assert_eq!(tracks[1].name, "take1.wav");
    assert!(tracks[1].source.is_ephemeral());
    assert!(tracks[1].blob_key.is_some());

    let bytes = manager.media().resolve(tracks[1].source.as_src()).unwrap();
    assert_eq!(bytes, Bytes::from_static(b"RIFF....WAVE"));
}

#[tokio::test]
async fn test_removing_upload_deletes_blob() {
    let dir = tempfile::tempdir().unwrap();
    let stores = open_stores(&dir).await;
    let mut manager = bootstrap(&stores).await;

    manager.import_upload(Bytes::from_static(b"one"), "one.mp3").await;
    manager.import_upload(Bytes::from_static(b"two"), "two.mp3").await;
    let active = manager.library().active_name().to_string();

    let outcome = manager.remove_track(&active, 0).unwrap();
    assert!(manager.media().resolve(outcome.removed.source.as_src()).is_none());
    manager.flush().await;

    let remaining = stores.blobs.get_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "two.mp3");
}

#[tokio::test]
async fn test_deleting_playlist_cascades_to_blobs() {
    let dir = tempfile::tempdir().unwrap();
    let stores = open_stores(&dir).await;
    let mut manager = bootstrap(&stores).await;

    manager.create_playlist("Demos").unwrap();
    manager.import_upload(Bytes::from_static(b"d1"), "d1.mp3").await;
    manager.import_upload(Bytes::from_static(b"d2"), "d2.mp3").await;
    manager.add_to_active(remote("not-a-blob"));

    let outcome = manager.delete_playlist("Demos").unwrap();
    assert!(outcome.active_changed);
    assert_eq!(outcome.blobs_deleted, 2);
    assert_eq!(manager.library().active_name(), "My Playlist");
    assert!(manager.media().is_empty());

    manager.flush().await;
    assert!(stores.blobs.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_disabled_blob_store_keeps_uploads_for_session() {
    let dir = tempfile::tempdir().unwrap();
    let library_url = format!("sqlite://{}", dir.path().join("library.db").display());
    let playlists = Arc::new(SqlitePlaylistStore::open(&library_url).await.unwrap());

    let mut manager = LibraryManager::bootstrap(
        Arc::new(SqliteBlobStore::disabled()),
        playlists.clone(),
        "My Playlist",
    )
    .await;

    let outcome = manager.import_upload(Bytes::from_static(b"x"), "x.mp3").await;
    assert!(outcome.first_track);

    let track = &manager.active_tracks()[0];
    assert!(track.blob_key.is_none());
    assert!(manager.media().resolve(track.source.as_src()).is_some());

    manager.flush().await;
    let reloaded = LibraryManager::bootstrap(
        Arc::new(SqliteBlobStore::disabled()),
        playlists,
        "My Playlist",
    )
    .await;
    assert!(reloaded.active_tracks().is_empty());
}
