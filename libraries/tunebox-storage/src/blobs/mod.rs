//! Blob Store: uploaded file contents
//!
//! Entries are independent of playlist structure. The library manager links
//! tracks to entries through their `BlobKey` and deletes the entry when the
//! track goes away.

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use sqlx::{Row, SqlitePool};
use tunebox_core::{BlobKey, BlobStore, StoredBlob};

/// Insert a blob and return its freshly assigned key
pub async fn insert(pool: &SqlitePool, name: &str, data: &[u8]) -> Result<BlobKey> {
    let now = chrono::Utc::now().timestamp();

    let result = sqlx::query("INSERT INTO blobs (name, data, created_at) VALUES (?, ?, ?)")
        .bind(name)
        .bind(data)
        .bind(now)
        .execute(pool)
        .await?;

    Ok(BlobKey::new(result.last_insert_rowid()))
}

/// Get every blob ordered by key
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<StoredBlob>> {
    let rows = sqlx::query("SELECT id, name, data FROM blobs ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| StoredBlob {
            key: row.get("id"),
            name: row.get("name"),
            bytes: Bytes::from(row.get::<Vec<u8>, _>("data")),
        })
        .collect())
}

/// Delete a blob
///
/// Returns `Ok(true)` if an entry was deleted, `Ok(false)` if none existed
pub async fn delete(pool: &SqlitePool, key: BlobKey) -> Result<bool> {
    let result = sqlx::query("DELETE FROM blobs WHERE id = ?")
        .bind(key)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Count stored blobs
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let row = sqlx::query("SELECT COUNT(*) AS total FROM blobs")
        .fetch_one(pool)
        .await?;
    Ok(row.get("total"))
}

/// `SQLite`-backed Blob Store
///
/// Holds no pool when disabled; every operation is then a no-op.
#[derive(Debug, Clone)]
pub struct SqliteBlobStore {
    pool: Option<SqlitePool>,
}

impl SqliteBlobStore {
    /// Wrap an already migrated pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool: Some(pool) }
    }

    /// A store that never persists anything
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Open the database at `database_url`, running migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn open(database_url: &str) -> Result<Self> {
        let pool = crate::open_database(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Open the database, falling back to a disabled store on failure
    ///
    /// A failed open disables the store for the rest of the session.
    pub async fn open_or_disabled(database_url: &str) -> Self {
        match Self::open(database_url).await {
            Ok(store) => {
                tracing::info!(url = %database_url, "Blob store opened");
                store
            }
            Err(e) => {
                tracing::error!(
                    url = %database_url,
                    error = %e,
                    "Blob store unavailable, uploads will not survive this session"
                );
                Self::disabled()
            }
        }
    }

    /// Get the underlying pool, if enabled
    pub fn pool(&self) -> Option<&SqlitePool> {
        self.pool.as_ref()
    }
}

#[async_trait]
impl BlobStore for SqliteBlobStore {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn put(&self, bytes: Bytes, name: &str) -> tunebox_core::Result<Option<BlobKey>> {
        let Some(pool) = &self.pool else {
            return Ok(None);
        };
        let key = insert(pool, name, &bytes).await?;
        tracing::debug!(key = %key, name = %name, size = bytes.len(), "Stored blob");
        Ok(Some(key))
    }

    async fn get_all(&self) -> tunebox_core::Result<Vec<StoredBlob>> {
        let Some(pool) = &self.pool else {
            return Ok(Vec::new());
        };
        Ok(get_all(pool).await?)
    }

    async fn delete(&self, key: BlobKey) -> tunebox_core::Result<()> {
        let Some(pool) = &self.pool else {
            return Ok(());
        };
        let existed = delete(pool, key).await?;
        tracing::debug!(key = %key, existed, "Deleted blob");
        Ok(())
    }
}
