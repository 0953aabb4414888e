//! Storage traits for the two persistence layers
//!
//! The Blob Store keeps raw upload bytes; the Playlist Store keeps the
//! playlist structure as a snapshot. Both are driven by the library manager
//! and are allowed to lag behind the in-memory library.

use crate::error::Result;
use crate::types::{BlobKey, Library, Theme};
use async_trait::async_trait;
use bytes::Bytes;

/// Entry read back from the Blob Store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    /// Key assigned on `put`
    pub key: BlobKey,
    /// Original file name
    pub name: String,
    /// File contents
    pub bytes: Bytes,
}

/// Persistent storage for uploaded file contents
///
/// A disabled store (for example one whose database failed to open) turns
/// every operation into a no-op so the player keeps working session-only.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Whether writes reach durable storage
    fn is_enabled(&self) -> bool;

    /// Store raw bytes under a fresh key
    ///
    /// Keys are monotonic and never reused. Returns `None` when disabled.
    async fn put(&self, bytes: Bytes, name: &str) -> Result<Option<BlobKey>>;

    /// Every stored entry, ordered by key
    async fn get_all(&self) -> Result<Vec<StoredBlob>>;

    /// Remove an entry; deleting a missing key is not an error
    async fn delete(&self, key: BlobKey) -> Result<()>;
}

/// Persistent storage for the playlist snapshot and UI preferences
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Read the persisted library, `None` on first run
    async fn load(&self) -> Result<Option<Library>>;

    /// Overwrite the snapshot wholesale
    ///
    /// Tracks with session-local sources are filtered out before writing.
    async fn save(&self, library: &Library) -> Result<()>;

    /// Read the theme preference
    async fn load_theme(&self) -> Result<Option<Theme>>;

    /// Write the theme preference
    async fn save_theme(&self, theme: Theme) -> Result<()>;
}
