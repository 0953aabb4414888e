//! Integration tests for the Blob Store slice


use bytes::Bytes;
use test_helpers::TestDb;
use tunebox_core::{BlobKey, BlobStore};
use tunebox_storage::{blobs, SqliteBlobStore};

#[tokio::test]
async fn test_put_and_get_all() {
    let test_db = TestDb::new().await;
    let store = SqliteBlobStore::new(test_db.pool().clone());

    let first = store
        .put(Bytes::from_static(b"first"), "first.mp3")
        .await
        .unwrap()
        .expect("store is enabled");
    let second = store
        .put(Bytes::from_static(b"second"), "second.flac")
        .await
        .unwrap()
        .expect("store is enabled");

    assert!(second > first);

    let all = store.get_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].key, first);
    assert_eq!(all[0].name, "first.mp3");
    assert_eq!(all[0].bytes, Bytes::from_static(b"first"));
    assert_eq!(all[1].key, second);
    assert_eq!(all[1].name, "second.flac");
}

#[tokio::test]
async fn test_keys_are_not_reused_after_delete() {
    let test_db = TestDb::new().await;
    let store = SqliteBlobStore::new(test_db.pool().clone());

    let a = store.put(Bytes::from_static(b"a"), "a").await.unwrap().unwrap();
    let b = store.put(Bytes::from_static(b"b"), "b").await.unwrap().unwrap();
    store.delete(b).await.unwrap();
    store.delete(a).await.unwrap();

    let c = store.put(Bytes::from_static(b"c"), "c").await.unwrap().unwrap();
    assert!(c > b, "key {c} reused an earlier key");
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let test_db = TestDb::new().await;
    let store = SqliteBlobStore::new(test_db.pool().clone());

    let key = store.put(Bytes::from_static(b"x"), "x").await.unwrap().unwrap();

    store.delete(key).await.unwrap();
    store.delete(key).await.unwrap();
    store.delete(BlobKey::new(9_999)).await.unwrap();

    assert_eq!(blobs::count(test_db.pool()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_reports_existence_at_slice_level() {
    let test_db = TestDb::new().await;
    let key = blobs::insert(test_db.pool(), "song.mp3", b"data").await.unwrap();

    assert!(blobs::delete(test_db.pool(), key).await.unwrap());
    assert!(!blobs::delete(test_db.pool(), key).await.unwrap());
}

#[tokio::test]
async fn test_blobs_survive_reopen() {
    let test_db = TestDb::new().await;
    {
        let store = SqliteBlobStore::open(&test_db.url).await.unwrap();
        store.put(Bytes::from_static(b"keep"), "keep.mp3").await.unwrap();
    }

    let reopened = SqliteBlobStore::open(&test_db.url).await.unwrap();
    let all = reopened.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "keep.mp3");
}

#[tokio::test]
async fn test_open_failure_disables_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a database file
    let url = format!("sqlite://{}", temp_dir.path().display());

    let store = SqliteBlobStore::open_or_disabled(&url).await;
    assert!(!store.is_enabled());

    assert!(store.put(Bytes::from_static(b"x"), "x").await.unwrap().is_none());
    assert!(store.get_all().await.unwrap().is_empty());
    store.delete(BlobKey::new(1)).await.unwrap();
}
