//! In-memory stores
//!
//! Same contracts as the `SQLite` stores without touching disk. The playlist
//! store keeps the filtered snapshot rather than the library itself, so a
//! load after a save behaves exactly like the durable store.

use crate::error::StorageError;
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use tunebox_core::{BlobKey, BlobStore, Library, PlaylistSnapshot, PlaylistStore, StoredBlob, Theme};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|e| StorageError::Poisoned(e.to_string()))
}

#[derive(Debug, Default)]
struct BlobEntries {
    entries: BTreeMap<BlobKey, (String, Bytes)>,
    last_key: i64,
}

/// Blob Store held in process memory
#[derive(Debug)]
pub struct MemoryBlobStore {
    inner: Mutex<BlobEntries>,
    enabled: bool,
}

impl MemoryBlobStore {
    /// Create an empty, enabled store
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BlobEntries::default()),
            enabled: true,
        }
    }

    /// Create a store that ignores every operation
    pub fn disabled() -> Self {
        Self {
            inner: Mutex::new(BlobEntries::default()),
            enabled: false,
        }
    }

    /// Keys currently stored
    pub fn keys(&self) -> Vec<BlobKey> {
        lock(&self.inner)
            .map(|inner| inner.entries.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Whether a key is stored
    pub fn contains(&self, key: BlobKey) -> bool {
        lock(&self.inner)
            .map(|inner| inner.entries.contains_key(&key))
            .unwrap_or(false)
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn put(&self, bytes: Bytes, name: &str) -> tunebox_core::Result<Option<BlobKey>> {
        if !self.enabled {
            return Ok(None);
        }
        let mut inner = lock(&self.inner)?;
        inner.last_key += 1;
        let key = BlobKey::new(inner.last_key);
        inner.entries.insert(key, (name.to_string(), bytes));
        Ok(Some(key))
    }

    async fn get_all(&self) -> tunebox_core::Result<Vec<StoredBlob>> {
        if !self.enabled {
            return Ok(Vec::new());
        }
        let inner = lock(&self.inner)?;
        Ok(inner
            .entries
            .iter()
            .map(|(key, (name, bytes))| StoredBlob {
                key: *key,
                name: name.clone(),
                bytes: bytes.clone(),
            })
            .collect())
    }

    async fn delete(&self, key: BlobKey) -> tunebox_core::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        lock(&self.inner)?.entries.remove(&key);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct PlaylistSlots {
    snapshot: Option<PlaylistSnapshot>,
    theme: Option<Theme>,
    saves: usize,
}

/// Playlist Store held in process memory
#[derive(Debug, Default)]
pub struct MemoryPlaylistStore {
    inner: Mutex<PlaylistSlots>,
}

impl MemoryPlaylistStore {
    /// Create an empty store (first run)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a saved library
    pub fn with_library(library: &Library) -> Self {
        let store = Self::new();
        if let Ok(mut inner) = lock(&store.inner) {
            inner.snapshot = Some(PlaylistSnapshot::from_library(library));
        }
        store
    }

    /// The last saved snapshot
    pub fn snapshot(&self) -> Option<PlaylistSnapshot> {
        lock(&self.inner).ok().and_then(|inner| inner.snapshot.clone())
    }

    /// Number of completed saves
    pub fn save_count(&self) -> usize {
        lock(&self.inner).map(|inner| inner.saves).unwrap_or(0)
    }
}

#[async_trait]
impl PlaylistStore for MemoryPlaylistStore {
    async fn load(&self) -> tunebox_core::Result<Option<Library>> {
        let inner = lock(&self.inner)?;
        Ok(inner
            .snapshot
            .clone()
            .and_then(PlaylistSnapshot::into_library))
    }

    async fn save(&self, library: &Library) -> tunebox_core::Result<()> {
        let mut inner = lock(&self.inner)?;
        inner.snapshot = Some(PlaylistSnapshot::from_library(library));
        inner.saves += 1;
        Ok(())
    }

    async fn load_theme(&self) -> tunebox_core::Result<Option<Theme>> {
        Ok(lock(&self.inner)?.theme)
    }

    async fn save_theme(&self, theme: Theme) -> tunebox_core::Result<()> {
        lock(&self.inner)?.theme = Some(theme);
        Ok(())
    }
}
